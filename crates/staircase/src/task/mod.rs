//! Task variants: what is presented, what the listener answers, and how the
//! answer is graded.
//!
//! - [`TaskKind::QualityComparison`]: two samples A and B, one at the current
//!   level and one at the reference level, in random order. The listener
//!   names the better sample or answers "not detectable".
//! - [`TaskKind::DigitIdentification`]: a three-digit number in noise at the
//!   current level. The listener types the digits.

mod grading;
mod selector;

pub use grading::grade;
pub use selector::{
    ComparisonSelector, DigitSelector, StimulusSelector, DEFAULT_DIGITS, DEFAULT_DIGIT_TEMPLATE,
    DEFAULT_SPEAKER_TEMPLATES,
};

use serde::{Deserialize, Serialize};

use staircase_core::StimulusParams;

/// Which task a session presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Three-alternative quality comparison.
    QualityComparison,
    /// Digit-in-noise identification.
    DigitIdentification,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::QualityComparison => write!(f, "quality comparison"),
            TaskKind::DigitIdentification => write!(f, "digit identification"),
        }
    }
}

/// One audio sample of a comparison trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Level of the sample.
    pub snr: i32,
    /// Path of the clip to play.
    pub clip: String,
}

/// What is presented in one trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stimulus {
    /// Quality comparison: sample A, sample B, and the reference level.
    Comparison {
        /// First sample played.
        a: Sample,
        /// Second sample played.
        b: Sample,
        /// Best-quality level; one of `a` or `b` is always at this level.
        reference_snr: i32,
    },

    /// Digit identification clip.
    Digits {
        /// Level of the clip.
        snr: i32,
        /// The digits spoken in the clip.
        digits: String,
        /// Path of the clip to play.
        clip: String,
    },
}

impl Stimulus {
    /// The task this stimulus belongs to.
    pub fn kind(&self) -> TaskKind {
        match self {
            Stimulus::Comparison { .. } => TaskKind::QualityComparison,
            Stimulus::Digits { .. } => TaskKind::DigitIdentification,
        }
    }

    /// The part of the stimulus that goes into the trial log.
    pub fn params(&self) -> StimulusParams {
        match self {
            Stimulus::Comparison { a, b, .. } => StimulusParams::Comparison { a: a.snr, b: b.snr },
            Stimulus::Digits { digits, .. } => StimulusParams::Digits {
                expected: digits.clone(),
            },
        }
    }
}

/// The listener's choice in a comparison trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Sample A sounds better.
    A,
    /// Sample B sounds better.
    B,
    /// No difference heard.
    NotDetectable,
}

/// A listener response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Answer to a comparison trial.
    Choice(Choice),
    /// Digits typed for a digit trial.
    Digits(String),
}

impl Response {
    /// The task this response answers.
    pub fn kind(&self) -> TaskKind {
        match self {
            Response::Choice(_) => TaskKind::QualityComparison,
            Response::Digits(_) => TaskKind::DigitIdentification,
        }
    }

    /// Whether the response carries no answer (blank digits).
    pub fn is_blank(&self) -> bool {
        match self {
            Response::Choice(_) => false,
            Response::Digits(text) => text.trim().is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stimulus_params() {
        let stimulus = Stimulus::Comparison {
            a: Sample {
                snr: 50,
                clip: "a.wav".to_string(),
            },
            b: Sample {
                snr: 34,
                clip: "b.wav".to_string(),
            },
            reference_snr: 50,
        };
        assert_eq!(stimulus.kind(), TaskKind::QualityComparison);
        assert_eq!(stimulus.params(), StimulusParams::Comparison { a: 50, b: 34 });
    }

    #[test]
    fn test_blank_response() {
        assert!(Response::Digits("  ".to_string()).is_blank());
        assert!(Response::Digits(String::new()).is_blank());
        assert!(!Response::Digits("1 2 3".to_string()).is_blank());
        assert!(!Response::Choice(Choice::NotDetectable).is_blank());
    }
}
