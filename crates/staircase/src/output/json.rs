//! JSON form of a finished session, for storage next to the CSV export.

use staircase_core::Summary;

/// Compact JSON for a finished session, one line per summary.
///
/// # Errors
///
/// Not expected in practice: [`Summary`] holds only plain data with string
/// map keys.
pub fn to_json(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string(summary)
}

/// Indented JSON for reading a session by eye. Same errors as [`to_json`].
pub fn to_json_pretty(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
