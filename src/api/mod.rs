//! API layer for the gridscale REST API
//!
//! - [`client`]: HTTP client implementing the generic object verbs
//! - [`resource`]: the generic verb trait and the per-kind resource contract
//! - [`models`]: request/response data structures
//! - [`context`]: per-call request context

pub mod client;
pub mod context;
pub mod models;
pub mod resource;
