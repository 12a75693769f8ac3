//! Summary of a finished session: threshold estimate and per-level counts.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::adaptive::{FinishReason, SessionState};
use crate::config::StaircaseConfig;
use crate::math::{mean, percentage, round};
use crate::record::TrialRecord;
use crate::types::SnrRange;

/// Trial counts at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// The level.
    pub snr: i32,
    /// Trials presented at this level.
    pub asked: u32,
    /// Correct answers at this level.
    pub correct: u32,
}

impl LevelStats {
    /// `round(100 * correct / asked)`, `None` for a level never visited.
    pub fn success_ratio(&self) -> Option<u32> {
        percentage(self.correct, self.asked)
    }
}

/// Everything the presentation layer needs to render and export results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Estimated threshold level (rounded mean of the kept reversals).
    pub target_snr: i32,

    /// Unrounded mean of the reversals that entered `target_snr`.
    /// `None` when no reversal was recorded.
    pub mean_reversal: Option<f64>,

    /// All recorded reversals, in order.
    pub reversals: Vec<i32>,

    /// Leading reversals excluded from the estimate.
    pub discarded_reversals: usize,

    /// Level range of the session.
    pub snr_range: SnrRange,

    /// One entry per level of the range, ascending.
    pub levels: Vec<LevelStats>,

    /// Trial log, in presentation order.
    pub log: Vec<TrialRecord>,

    /// Why the session finished.
    pub finish_reason: FinishReason,
}

impl Summary {
    pub(crate) fn from_state(
        config: &StaircaseConfig,
        state: &SessionState,
        finish_reason: FinishReason,
    ) -> Self {
        let fallback = config.snr_range.start;
        let kept = kept_reversals(&state.reversals, config.discard_reversals);
        Self {
            target_snr: compute_target_snr(&state.reversals, config.discard_reversals, fallback),
            mean_reversal: mean(kept),
            reversals: state.reversals.clone(),
            discarded_reversals: state.reversals.len() - kept.len(),
            snr_range: config.snr_range,
            levels: state.level_stats(),
            log: state.log.clone(),
            finish_reason,
        }
    }

    /// Number of trials presented.
    pub fn trials_presented(&self) -> u32 {
        self.levels.iter().map(|l| l.asked).sum()
    }

    /// Number of correct answers overall.
    pub fn total_correct(&self) -> u32 {
        self.levels.iter().map(|l| l.correct).sum()
    }

    /// Counts for `level`, if it is inside the range.
    pub fn level(&self, level: i32) -> Option<&LevelStats> {
        self.snr_range.index_of(level).map(|idx| &self.levels[idx])
    }

    /// Success percentage at `level`; `None` outside the range or if never visited.
    pub fn success_ratio(&self, level: i32) -> Option<u32> {
        self.level(level).and_then(LevelStats::success_ratio)
    }

    /// The reversals that entered the estimate.
    pub fn kept_reversals(&self) -> &[i32] {
        &self.reversals[self.discarded_reversals..]
    }
}

fn kept_reversals(reversals: &[i32], discard: usize) -> &[i32] {
    if reversals.len() > discard {
        &reversals[discard..]
    } else {
        reversals
    }
}

/// Threshold estimate from a reversal sequence.
///
/// Averages `reversals[discard..]` and rounds half away from zero. With no
/// reversals at all the estimate is `fallback` (the first level of the
/// range). When every recorded reversal would be discarded, all of them are
/// averaged instead.
pub fn compute_target_snr(reversals: &[i32], discard: usize, fallback: i32) -> i32 {
    match mean(kept_reversals(reversals, discard)) {
        Some(m) => round(m) as i32,
        None => fallback,
    }
}
