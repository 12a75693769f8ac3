//! CSV export of finished sessions.
//!
//! The document has three blocks separated by a blank line:
//!
//! ```csv
//! questionNumber,SNR,user_input,correct_input,isCorrect,t
//! 1,10,024,024,true,1700000000000
//! ...
//!
//! Targeted SNR,12
//! Reversals,10,13,11,12
//!
//! SNRs,1,2,...,21
//! # of questions asked,0,0,...
//! # of Correct Answers,0,0,...
//! success ratio,NaN,NaN,...
//! ```
//!
//! The trial block uses the column names of the task (see
//! [`StimulusParams::csv_header`](staircase_core::StimulusParams::csv_header)).
//! Levels never visited have a `NaN` success ratio. Trial fields that hold a
//! comma or a double quote are quoted.

mod csv;

pub use csv::{load_summary_csv, parse_summary_csv, to_csv, write_csv, ExportedSummary};

/// Label of the threshold row.
pub const TARGET_LABEL: &str = "Targeted SNR";
/// Label of the reversal row.
pub const REVERSALS_LABEL: &str = "Reversals";
/// Label of the level row.
pub const LEVELS_LABEL: &str = "SNRs";
/// Label of the per-level trial counts.
pub const ASKED_LABEL: &str = "# of questions asked";
/// Label of the per-level correct counts.
pub const CORRECT_LABEL: &str = "# of Correct Answers";
/// Label of the per-level success percentages.
pub const RATIO_LABEL: &str = "success ratio";

/// Errors that can occur while writing or reading an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// IO error writing or reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural problem at a specific line.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A summary row is absent.
    #[error("Missing summary row '{label}'")]
    MissingRow {
        /// Label of the missing row.
        label: &'static str,
    },

    /// A value could not be parsed.
    #[error("Invalid value at line {line}: '{value}'")]
    InvalidValue {
        /// Line number (1-indexed).
        line: usize,
        /// The offending text.
        value: String,
    },
}
