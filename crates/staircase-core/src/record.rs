//! Graded answers and the per-trial audit log.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// What was presented in a trial, as far as the log needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StimulusParams {
    /// Only the level is known (the caller graded the answer itself).
    Level,

    /// Quality comparison: levels of samples A and B.
    Comparison {
        /// Level of sample A.
        a: i32,
        /// Level of sample B.
        b: i32,
    },

    /// Digit identification: the digits embedded in the clip.
    Digits {
        /// Expected answer.
        expected: String,
    },
}

impl StimulusParams {
    /// CSV column names for a log whose first record carries this stimulus.
    ///
    /// These match the field names of the exported result files so existing
    /// analysis scripts keep working.
    pub fn csv_header(&self) -> &'static [&'static str] {
        match self {
            StimulusParams::Level => &["questionNumber", "SNR", "isCorrect", "t"],
            StimulusParams::Comparison { .. } => {
                &["questionNumber", "A", "B", "choice", "isCorrect", "t"]
            }
            StimulusParams::Digits { .. } => &[
                "questionNumber",
                "SNR",
                "user_input",
                "correct_input",
                "isCorrect",
                "t",
            ],
        }
    }
}

/// An answer already graded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    /// What was presented.
    pub stimulus: StimulusParams,
    /// The raw response, as it should appear in the log.
    pub response: String,
    /// Whether the response was correct.
    pub is_correct: bool,
}

impl GradedAnswer {
    /// An answer known only by its correctness.
    pub fn bare(is_correct: bool) -> Self {
        Self {
            stimulus: StimulusParams::Level,
            response: String::new(),
            is_correct,
        }
    }
}

/// One entry of the append-only trial log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 1-based trial number.
    pub trial_number: u32,
    /// Level the trial was presented at.
    pub snr: i32,
    /// What was presented.
    pub stimulus: StimulusParams,
    /// Raw response.
    pub response: String,
    /// Grading result.
    pub is_correct: bool,
    /// Caller-supplied capture time, milliseconds since the Unix epoch.
    pub timestamp_millis: u64,
}

impl TrialRecord {
    /// Field values in the column order of [`StimulusParams::csv_header`].
    pub fn csv_fields(&self) -> Vec<String> {
        let number = self.trial_number.to_string();
        let correct = self.is_correct.to_string();
        let t = self.timestamp_millis.to_string();
        match &self.stimulus {
            StimulusParams::Level => vec![number, self.snr.to_string(), correct, t],
            StimulusParams::Comparison { a, b } => vec![
                number,
                a.to_string(),
                b.to_string(),
                self.response.clone(),
                correct,
                t,
            ],
            StimulusParams::Digits { expected } => vec![
                number,
                self.snr.to_string(),
                self.response.clone(),
                expected.clone(),
                correct,
                t,
            ],
        }
    }
}
