//! Errors raised by the staircase controller.

use core::fmt;

use crate::adaptive::FinishReason;
use crate::types::SnrRange;

/// Errors returned by [`StaircaseController`](crate::StaircaseController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaircaseError {
    /// The configuration was rejected at `reset` time.
    InvalidConfig(ConfigError),

    /// An operation was called out of sequence.
    InvalidState(StateError),
}

/// Reasons a [`StaircaseConfig`](crate::StaircaseConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `snr_start > snr_end`.
    InvertedRange {
        /// First level of the rejected range.
        start: i32,
        /// Last level of the rejected range.
        end: i32,
    },

    /// The start level lies outside the level range.
    StartOutOfRange {
        /// Requested level of trial 1.
        start_snr: i32,
        /// Range it should have been in.
        range: SnrRange,
    },

    /// `max_questions` is zero.
    ZeroMaxQuestions,

    /// `reversals_to_finish` is zero.
    ZeroReversalsToFinish,
}

/// Contract violations by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// An answer was recorded after the session finished.
    AlreadyFinished {
        /// Number of trials answered before finishing.
        trials: usize,
        /// Why the session finished.
        reason: FinishReason,
    },

    /// A summary was requested while trials are still being presented.
    NotFinished {
        /// Trial currently awaiting an answer.
        trial_number: u32,
    },
}

impl fmt::Display for StaircaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaircaseError::InvalidConfig(e) => write!(f, "invalid staircase configuration: {}", e),
            StaircaseError::InvalidState(e) => write!(f, "invalid staircase state: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvertedRange { start, end } => {
                write!(f, "snr range start {} is greater than end {}", start, end)
            }
            ConfigError::StartOutOfRange { start_snr, range } => {
                write!(f, "start snr {} is outside range {}", start_snr, range)
            }
            ConfigError::ZeroMaxQuestions => write!(f, "max_questions must be > 0"),
            ConfigError::ZeroReversalsToFinish => write!(f, "reversals_to_finish must be > 0"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::AlreadyFinished { trials, reason } => write!(
                f,
                "session already finished after {} trials ({})",
                trials, reason
            ),
            StateError::NotFinished { trial_number } => write!(
                f,
                "session still running, trial {} awaits an answer",
                trial_number
            ),
        }
    }
}

impl From<ConfigError> for StaircaseError {
    fn from(e: ConfigError) -> Self {
        StaircaseError::InvalidConfig(e)
    }
}

impl From<StateError> for StaircaseError {
    fn from(e: StateError) -> Self {
        StaircaseError::InvalidState(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StaircaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StaircaseError::InvalidConfig(e) => Some(e),
            StaircaseError::InvalidState(e) => Some(e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}
