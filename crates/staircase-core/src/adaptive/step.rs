//! Single 2-down/1-up transition (no_std compatible).
//!
//! # Usage Pattern
//!
//! ```ignore
//! let mut state = SessionState::new(&config);
//!
//! loop {
//!     // Caller presents a stimulus at state.current_snr and grades the answer
//!     let answer = /* graded by caller */;
//!     let now_ms = /* measured by caller */;
//!
//!     match staircase_step(&config, &mut state, answer, now_ms)?.decision {
//!         Decision::Continue(next_snr) => continue,
//!         Decision::Finished => break,
//!     }
//! }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::StaircaseConfig;
use crate::constants::CORRECT_STREAK_TO_ADVANCE;
use crate::error::{StaircaseError, StateError};
use crate::record::{GradedAnswer, TrialRecord};
use crate::types::Direction;

use super::SessionState;

/// What the presentation layer should do after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Present the next trial at this level.
    Continue(i32),
    /// The session is over; request the summary.
    Finished,
}

impl Decision {
    /// Level of the next trial, if any.
    pub fn next_snr(&self) -> Option<i32> {
        match self {
            Decision::Continue(snr) => Some(*snr),
            Decision::Finished => None,
        }
    }

    /// Whether the session ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, Decision::Finished)
    }
}

/// Why a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// The requested number of reversals was recorded.
    ReversalsReached,
    /// `max_questions` trials were answered first.
    QuestionLimit,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::ReversalsReached => write!(f, "reversal target reached"),
            FinishReason::QuestionLimit => write!(f, "question limit reached"),
        }
    }
}

/// Result of a single staircase step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Continue or finish.
    pub decision: Decision,

    /// Level of the reversal recorded by this answer, if any.
    ///
    /// At most one reversal is recorded per answer from the staircase rule
    /// or the range clamp; the final level appended when the question limit
    /// ends a session is not reported here.
    pub reversal: Option<i32>,

    /// Direction the level was pulled back from, if the move left the range.
    pub clamped: Option<Direction>,

    /// Set when this answer ended the session.
    pub finish_reason: Option<FinishReason>,
}

/// Apply one graded answer to the session.
///
/// Performs, in order: log the trial, count a correct answer, apply the
/// 2-down/1-up rule (recording a reversal when the pending move flips the
/// direction), clamp the level back into the range, then decide whether the
/// session is over. A clamp points the direction away from the edge it hit
/// and records a reversal unless one was already recorded by this answer.
///
/// # Errors
///
/// Returns [`StateError::AlreadyFinished`] if the session already returned
/// [`Decision::Finished`].
pub fn staircase_step(
    config: &StaircaseConfig,
    state: &mut SessionState,
    answer: GradedAnswer,
    timestamp_millis: u64,
) -> Result<StepResult, StaircaseError> {
    if let Some(reason) = state.finish_reason {
        return Err(StateError::AlreadyFinished {
            trials: state.log.len(),
            reason,
        }
        .into());
    }

    let level = state.current_snr;
    let is_correct = answer.is_correct;

    state.log.push(TrialRecord {
        trial_number: state.trial_number,
        snr: level,
        stimulus: answer.stimulus,
        response: answer.response,
        is_correct,
        timestamp_millis,
    });
    if is_correct {
        state.mark_correct(level);
    }

    let mut reversal = None;

    let pending = if is_correct {
        state.consecutive_correct += 1;
        if state.consecutive_correct >= CORRECT_STREAK_TO_ADVANCE {
            Some(Direction::Harder)
        } else {
            None
        }
    } else {
        Some(Direction::Easier)
    };

    let mut clamped = None;
    if let Some(towards) = pending {
        if state.direction != towards {
            reversal = state.push_reversal(level);
            state.direction = towards;
        }
        state.current_snr = level + config.polarity.step(towards);
        state.consecutive_correct = 0;

        // A single step can only overshoot by one level, on the side we moved to.
        // Pinned to that edge, the next move can only lead away from it.
        if !config.snr_range.contains(state.current_snr) {
            state.current_snr = match towards {
                Direction::Harder => config.polarity.hardest(config.snr_range),
                Direction::Easier => config.polarity.easiest(config.snr_range),
            };
            state.direction = towards.reversed();
            if reversal.is_none() {
                reversal = state.push_reversal(state.current_snr);
            }
            clamped = Some(towards);
        }
    }

    debug_assert!(config.snr_range.contains(state.current_snr));
    debug_assert!(state.consecutive_correct < CORRECT_STREAK_TO_ADVANCE);

    let finish_reason = if state.reversals.len() >= config.reversals_to_finish {
        Some(FinishReason::ReversalsReached)
    } else if state.trial_number >= config.max_questions {
        // Keep the last level reached in the threshold estimate.
        state.push_reversal(state.current_snr);
        Some(FinishReason::QuestionLimit)
    } else {
        None
    };

    let decision = match finish_reason {
        Some(reason) => {
            state.finish_reason = Some(reason);
            Decision::Finished
        }
        None => {
            state.mark_asked(state.current_snr);
            state.trial_number += 1;
            Decision::Continue(state.current_snr)
        }
    };

    Ok(StepResult {
        decision,
        reversal,
        clamped,
        finish_reason,
    })
}
