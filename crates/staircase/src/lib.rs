//! # staircase
//!
//! Adaptive SNR listening tests driven by a 2-down/1-up staircase.
//!
//! Two task variants share the same staircase engine:
//! - **Quality comparison (3AFC)**: two samples, one at the current level and
//!   one at the best-quality reference, in random order; the listener picks
//!   the better one or answers "not detectable".
//! - **Digit identification**: a three-digit number embedded in noise at the
//!   current level; the listener types what they heard.
//!
//! The session picks stimuli, grades responses, timestamps them and feeds
//! them to the [`StaircaseController`] from `staircase-core`. When the session
//! finishes, the [`Summary`] carries the threshold estimate and everything
//! needed for the CSV export.
//!
//! ## Quick Start
//!
//! ```
//! use staircase::{Choice, ComparisonSelector, Config, ListeningSession, Next, Response};
//!
//! let config = Config::quality_comparison().seed(7);
//! let selector = ComparisonSelector::for_config(&config);
//! let mut session = ListeningSession::new(config, selector).unwrap();
//!
//! loop {
//!     // Present session.current_trial() to the listener, then:
//!     match session.submit(Response::Choice(Choice::NotDetectable)).unwrap() {
//!         Next::Trial(_) => continue,
//!         Next::Finished(summary) => {
//!             println!("{}", staircase::output::format_summary(&summary, None));
//!             break;
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;
mod session;

pub mod export;
pub mod helpers;
pub mod output;
pub mod task;

// Re-exports for public API
pub use config::{Config, DbMapping};
pub use error::SessionError;
pub use session::{Clock, ListeningSession, Next, SystemClock, Trial};
pub use task::{
    grade, Choice, ComparisonSelector, DigitSelector, Response, Sample, Stimulus,
    StimulusSelector, TaskKind,
};

pub use staircase_core::{
    ConfigError, Decision, Direction, FinishReason, GradedAnswer, LevelStats, Polarity, SnrRange,
    StaircaseConfig, StaircaseController, StaircaseError, StateError, StimulusParams, Summary,
    TrialRecord,
};
