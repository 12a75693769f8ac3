//! State maintained during one staircase session (no_std compatible).
//!
//! Time tracking is handled by the caller: trial timestamps are passed in,
//! so this module never reads a clock.

use alloc::vec;
use alloc::vec::Vec;

use crate::config::StaircaseConfig;
use crate::record::TrialRecord;
use crate::summary::LevelStats;
use crate::types::{Direction, SnrRange};

use super::FinishReason;

/// Mutable state of one staircase session.
///
/// Created fresh for every session and mutated only by
/// [`staircase_step`](super::staircase_step).
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Level of the trial currently presented (or the last one, once finished).
    pub current_snr: i32,

    /// Direction of the last level change.
    pub direction: Direction,

    /// Correct answers in a row at the current level (0 or 1 between trials).
    pub consecutive_correct: u8,

    /// Levels at which reversals were recorded, in order.
    pub reversals: Vec<i32>,

    /// 1-based number of the trial currently presented.
    pub trial_number: u32,

    /// One entry per answered trial.
    pub log: Vec<TrialRecord>,

    /// Set once the session has finished.
    pub finish_reason: Option<FinishReason>,

    range: SnrRange,
    reversal_capacity: usize,
    trials_asked: Vec<u32>,
    correct: Vec<u32>,
}

impl SessionState {
    /// Create the state for trial 1 of a session.
    ///
    /// Level `start_snr` is counted as asked once: the caller presents the
    /// first stimulus before any answer is recorded. The config must already
    /// be validated.
    pub fn new(config: &StaircaseConfig) -> Self {
        let range = config.snr_range;
        let mut state = Self {
            current_snr: config.start_snr,
            direction: Direction::Harder,
            consecutive_correct: 0,
            reversals: Vec::with_capacity(config.reversals_to_finish),
            trial_number: 1,
            log: Vec::with_capacity(config.max_questions as usize),
            finish_reason: None,
            range,
            reversal_capacity: config.reversals_to_finish,
            trials_asked: vec![0; range.len()],
            correct: vec![0; range.len()],
        };
        state.mark_asked(config.start_snr);
        state
    }

    /// Reset the state for a new session, preserving capacity.
    pub fn reset(&mut self, config: &StaircaseConfig) {
        let range = config.snr_range;
        self.current_snr = config.start_snr;
        self.direction = Direction::Harder;
        self.consecutive_correct = 0;
        self.reversals.clear();
        self.trial_number = 1;
        self.log.clear();
        self.finish_reason = None;
        self.range = range;
        self.reversal_capacity = config.reversals_to_finish;
        self.trials_asked.clear();
        self.trials_asked.resize(range.len(), 0);
        self.correct.clear();
        self.correct.resize(range.len(), 0);
        self.mark_asked(config.start_snr);
    }

    /// Whether a terminal decision has been returned.
    pub fn is_finished(&self) -> bool {
        self.finish_reason.is_some()
    }

    /// Whether another reversal may still be recorded.
    pub fn has_reversal_slot(&self) -> bool {
        self.reversals.len() < self.reversal_capacity
    }

    /// Append a reversal at `level`.
    ///
    /// Returns the recorded level, or `None` when the reversal list is full.
    pub fn push_reversal(&mut self, level: i32) -> Option<i32> {
        debug_assert!(
            self.has_reversal_slot(),
            "reversal list is already full ({} entries)",
            self.reversal_capacity
        );
        if !self.has_reversal_slot() {
            return None;
        }
        self.reversals.push(level);
        Some(level)
    }

    /// Count one more trial presented at `level`.
    pub fn mark_asked(&mut self, level: i32) {
        let idx = self.level_index(level);
        self.trials_asked[idx] += 1;
    }

    /// Count one more correct answer at `level`.
    pub fn mark_correct(&mut self, level: i32) {
        let idx = self.level_index(level);
        self.correct[idx] += 1;
    }

    /// Trials presented at `level` so far (0 outside the range).
    pub fn trials_asked_at(&self, level: i32) -> u32 {
        self.range
            .index_of(level)
            .map_or(0, |idx| self.trials_asked[idx])
    }

    /// Correct answers at `level` so far (0 outside the range).
    pub fn correct_at(&self, level: i32) -> u32 {
        self.range.index_of(level).map_or(0, |idx| self.correct[idx])
    }

    /// Total trials presented, summed over all levels.
    pub fn total_trials_asked(&self) -> u32 {
        self.trials_asked.iter().sum()
    }

    /// Per-level counts, one entry per level of the range in ascending order.
    pub fn level_stats(&self) -> Vec<LevelStats> {
        self.range
            .levels()
            .zip(self.trials_asked.iter().zip(&self.correct))
            .map(|(snr, (&asked, &correct))| LevelStats {
                snr,
                asked,
                correct,
            })
            .collect()
    }

    fn level_index(&self, level: i32) -> usize {
        match self.range.index_of(level) {
            Some(idx) => idx,
            None => panic!("level {} escaped range {}", level, self.range),
        }
    }
}
