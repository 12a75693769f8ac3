//! Core adaptive staircase for SNR listening tests.
//!
//! This crate provides the 2-down/1-up staircase controller used by the
//! quality-comparison and digit-identification listening tests, designed to
//! work in `no_std` environments (embedded, WASM) with only an allocator.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support (`std::error::Error` impls)
//!
//! # Usage
//!
//! This crate is typically used through the main `staircase` crate, which
//! provides stimulus selection, grading, clocks, logging and export.
//! However, it can be driven directly by any presentation layer that grades
//! answers itself and supplies timestamps.
//!
//! ```
//! use staircase_core::{Decision, SnrRange, StaircaseConfig, StaircaseController};
//!
//! let config = StaircaseConfig::new(SnrRange::new(1, 21), 10);
//! let mut controller = StaircaseController::reset(config).unwrap();
//!
//! // The first stimulus is presented at the start level.
//! assert_eq!(controller.current_snr(), 10);
//!
//! match controller.record_answer(false, 0).unwrap() {
//!     Decision::Continue(next_snr) => assert_eq!(next_snr, 9),
//!     Decision::Finished => unreachable!(),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adaptive;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod math;
pub mod record;
pub mod summary;
pub mod types;

// Re-export commonly used items at crate root
pub use adaptive::{
    staircase_step, Decision, FinishReason, SessionState, StaircaseController, StepResult,
};
pub use config::StaircaseConfig;
pub use error::{ConfigError, StaircaseError, StateError};
pub use record::{GradedAnswer, StimulusParams, TrialRecord};
pub use summary::{compute_target_snr, LevelStats, Summary};
pub use types::{Direction, Polarity, SnrRange};
