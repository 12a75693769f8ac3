//! Output formatting for session results.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_level_table, format_summary};
pub use staircase_core::formatting::format_summary_plain;
