//! Constants of the 2-down/1-up procedure and session defaults.

/// Correct answers in a row needed before the level moves one step harder.
pub const CORRECT_STREAK_TO_ADVANCE: u8 = 2;

/// Accuracy a 2-down/1-up staircase converges to: sqrt(0.5) (Levitt, 1971).
pub const TARGET_ACCURACY: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// Default cap on the number of trials in one session.
pub const DEFAULT_MAX_QUESTIONS: u32 = 45;

/// Default number of reversals that ends a session.
///
/// Levitt (1992) recommends testing for at least seven reversals and using
/// the last six for the estimate.
pub const DEFAULT_REVERSALS_TO_FINISH: usize = 7;

/// Default number of leading reversals left out of the threshold average.
pub const DEFAULT_DISCARD_REVERSALS: usize = 1;
