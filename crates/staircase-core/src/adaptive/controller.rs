//! The staircase controller: one owned session of config plus state.

use alloc::vec::Vec;

use crate::config::StaircaseConfig;
use crate::error::{StaircaseError, StateError};
use crate::record::{GradedAnswer, TrialRecord};
use crate::summary::{LevelStats, Summary};
use crate::types::Direction;

use super::{staircase_step, Decision, FinishReason, SessionState, StepResult};

/// Adaptive 2-down/1-up controller for one listening session.
///
/// Each session is an independent value; nothing is shared between
/// controllers, so many sessions can run side by side.
///
/// # Lifecycle
///
/// `reset` creates the session with trial 1 presented at `start_snr`.
/// Every presented trial is answered exactly once through
/// [`record_answer`](Self::record_answer) or
/// [`record_graded`](Self::record_graded). Once [`Decision::Finished`] is
/// returned the session is terminal and [`summary`](Self::summary) becomes
/// available.
#[derive(Debug, Clone)]
pub struct StaircaseController {
    config: StaircaseConfig,
    state: SessionState,
}

impl StaircaseController {
    /// Validate `config` and start a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`StaircaseError::InvalidConfig`] for an inverted range, a
    /// start level outside the range, or a zero question/reversal limit.
    pub fn reset(config: StaircaseConfig) -> Result<Self, StaircaseError> {
        config.validate()?;
        let state = SessionState::new(&config);
        Ok(Self { config, state })
    }

    /// Discard the current session and start over with the same config.
    pub fn restart(&mut self) {
        self.state.reset(&self.config);
    }

    /// Record an answer known only by its correctness.
    ///
    /// `timestamp_millis` is the capture time of the answer; the controller
    /// does not read a clock.
    pub fn record_answer(
        &mut self,
        is_correct: bool,
        timestamp_millis: u64,
    ) -> Result<Decision, StaircaseError> {
        self.record_graded(GradedAnswer::bare(is_correct), timestamp_millis)
            .map(|step| step.decision)
    }

    /// Record a graded answer with its stimulus and raw response.
    pub fn record_graded(
        &mut self,
        answer: GradedAnswer,
        timestamp_millis: u64,
    ) -> Result<StepResult, StaircaseError> {
        staircase_step(&self.config, &mut self.state, answer, timestamp_millis)
    }

    /// Summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotFinished`] while trials are still running.
    pub fn summary(&self) -> Result<Summary, StaircaseError> {
        match self.state.finish_reason {
            Some(reason) => Ok(Summary::from_state(&self.config, &self.state, reason)),
            None => Err(StateError::NotFinished {
                trial_number: self.state.trial_number,
            }
            .into()),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &StaircaseConfig {
        &self.config
    }

    /// Full session state (read-only).
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Level of the trial awaiting an answer (or the last level, once finished).
    pub fn current_snr(&self) -> i32 {
        self.state.current_snr
    }

    /// Number of the trial awaiting an answer.
    pub fn trial_number(&self) -> u32 {
        self.state.trial_number
    }

    /// Direction of the last level change.
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Correct answers in a row at the current level.
    pub fn consecutive_correct(&self) -> u8 {
        self.state.consecutive_correct
    }

    /// Reversals recorded so far.
    pub fn reversals(&self) -> &[i32] {
        &self.state.reversals
    }

    /// Trial log so far.
    pub fn log(&self) -> &[TrialRecord] {
        &self.state.log
    }

    /// Per-level counts so far.
    pub fn level_stats(&self) -> Vec<LevelStats> {
        self.state.level_stats()
    }

    /// Whether the session has finished.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Why the session finished, if it has.
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.state.finish_reason
    }
}
