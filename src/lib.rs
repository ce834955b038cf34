pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Command-line interface
pub mod config; // Config file resolution and account lookup
pub mod core; // Runtime, guarded workflows and operators

/// Support modules (used across layers)
pub mod api; // gridscale API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
