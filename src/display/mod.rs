//! Output rendering: aligned tables, ID lists and JSON

pub mod display_options;
pub mod table;

pub use display_options::RenderOptions;
pub use table::{TableData, render_ids, render_json, render_output, render_table};
