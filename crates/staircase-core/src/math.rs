//! Math functions for no_std compatibility.
//!
//! In no_std mode, f64 doesn't have methods like round.
//! This module provides these functions using libm.

/// Round half away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

/// Arithmetic mean of integer levels, `None` for an empty slice.
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|&v| v as i64).sum();
    Some(sum as f64 / values.len() as f64)
}

/// `round(100 * part / whole)`, `None` when `whole` is zero.
pub fn percentage(part: u32, whole: u32) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some(round(100.0 * part as f64 / whole as f64) as u32)
}
