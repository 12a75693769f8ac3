//! Adaptive staircase logic (no_std compatible).
//!
//! The presentation layer (stimulus playback, response collection, clocks)
//! lives in the `staircase` crate; this module holds the state machine that
//! turns graded answers into the next level.
//!
//! # Key Components
//!
//! - **SessionState**: Level, direction, streak, reversals, per-level counts and the trial log
//! - **staircase_step**: One 2-down/1-up transition, including clamping and termination
//! - **StaircaseController**: Owns config and state; the `reset`/`record_answer`/`summary` surface

mod controller;
mod state;
mod step;

pub use controller::StaircaseController;
pub use state::SessionState;
pub use step::{staircase_step, Decision, FinishReason, StepResult};
