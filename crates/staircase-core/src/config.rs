//! Staircase configuration and its validation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISCARD_REVERSALS, DEFAULT_MAX_QUESTIONS, DEFAULT_REVERSALS_TO_FINISH,
};
use crate::error::ConfigError;
use crate::types::{Polarity, SnrRange};

/// Configuration of one staircase session. Immutable once the session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaircaseConfig {
    /// Levels the session may present.
    pub snr_range: SnrRange,

    /// Level of trial 1. Must lie inside `snr_range`.
    pub start_snr: i32,

    /// Maximum number of trials. Default: 45.
    pub max_questions: u32,

    /// Number of reversals that ends the session. Default: 7.
    pub reversals_to_finish: usize,

    /// Which numeric direction of the level is harder.
    pub polarity: Polarity,

    /// Leading reversals left out of the threshold average. Default: 1.
    ///
    /// The first reversal is mostly determined by the start level, so it is
    /// discarded as warm-up.
    pub discard_reversals: usize,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        Self::new(SnrRange::new(1, 21), 10)
    }
}

impl StaircaseConfig {
    /// Create a configuration with default limits for the given range.
    pub fn new(snr_range: SnrRange, start_snr: i32) -> Self {
        Self {
            snr_range,
            start_snr,
            max_questions: DEFAULT_MAX_QUESTIONS,
            reversals_to_finish: DEFAULT_REVERSALS_TO_FINISH,
            polarity: Polarity::default(),
            discard_reversals: DEFAULT_DISCARD_REVERSALS,
        }
    }

    /// Builder method to set the question cap.
    pub fn max_questions(mut self, max: u32) -> Self {
        self.max_questions = max;
        self
    }

    /// Builder method to set the number of reversals that ends a session.
    pub fn reversals_to_finish(mut self, reversals: usize) -> Self {
        self.reversals_to_finish = reversals;
        self
    }

    /// Builder method to set the polarity.
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Builder method to set how many leading reversals are discarded.
    pub fn discard_reversals(mut self, discard: usize) -> Self {
        self.discard_reversals = discard;
        self
    }

    /// Check the configuration before a session is created.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.snr_range.is_valid() {
            return Err(ConfigError::InvertedRange {
                start: self.snr_range.start,
                end: self.snr_range.end,
            });
        }
        if !self.snr_range.contains(self.start_snr) {
            return Err(ConfigError::StartOutOfRange {
                start_snr: self.start_snr,
                range: self.snr_range,
            });
        }
        if self.max_questions == 0 {
            return Err(ConfigError::ZeroMaxQuestions);
        }
        if self.reversals_to_finish == 0 {
            return Err(ConfigError::ZeroReversalsToFinish);
        }
        Ok(())
    }
}
