//! A listening session: stimulus selection, grading and timestamps around a
//! [`StaircaseController`].

use std::time::{SystemTime, UNIX_EPOCH};

use staircase_core::{
    Decision, FinishReason, StaircaseController, StateError, StepResult, Summary,
};

use crate::config::Config;
use crate::error::SessionError;
use crate::task::{grade, Response, Stimulus, StimulusSelector};

/// Source of answer timestamps.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// A trial awaiting the listener's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    /// 1-based trial number.
    pub number: u32,
    /// Level the trial is presented at.
    pub snr: i32,
    /// What to play.
    pub stimulus: Stimulus,
}

/// What comes after a submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    /// Present this trial next.
    Trial(Trial),
    /// The session is over.
    Finished(Summary),
}

/// One listener working through one adaptive session.
///
/// The session presents trial 1 as soon as it is created. Each call to
/// [`submit`](Self::submit) answers the current trial and either presents
/// the next one or finishes.
#[derive(Debug)]
pub struct ListeningSession<S, C = SystemClock> {
    config: Config,
    controller: StaircaseController,
    selector: S,
    clock: C,
    current: Option<Trial>,
}

impl<S: StimulusSelector> ListeningSession<S, SystemClock> {
    /// Start a session timestamped with the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Staircase`] if the staircase config is invalid.
    pub fn new(config: Config, selector: S) -> Result<Self, SessionError> {
        Self::with_clock(config, selector, SystemClock)
    }
}

impl<S: StimulusSelector, C: Clock> ListeningSession<S, C> {
    /// Start a session with an explicit clock.
    pub fn with_clock(config: Config, mut selector: S, clock: C) -> Result<Self, SessionError> {
        let controller = StaircaseController::reset(config.staircase.clone())?;

        tracing::info!(
            task = %config.task,
            range = %config.staircase.snr_range,
            start = config.staircase.start_snr,
            max_questions = config.staircase.max_questions,
            reversals_to_finish = config.staircase.reversals_to_finish,
            "Starting listening session"
        );

        let number = controller.trial_number();
        let snr = controller.current_snr();
        let current = Some(Trial {
            number,
            snr,
            stimulus: selector.select(number, snr),
        });

        Ok(Self {
            config,
            controller,
            selector,
            clock,
            current,
        })
    }

    /// The trial awaiting an answer, `None` once finished.
    pub fn current_trial(&self) -> Option<&Trial> {
        self.current.as_ref()
    }

    /// Answer the current trial.
    ///
    /// # Errors
    ///
    /// - [`SessionError::MissingResponse`] for a blank answer. Nothing is
    ///   recorded and the same trial stays pending.
    /// - [`SessionError::ResponseMismatch`] when the response does not fit
    ///   the presented task.
    /// - [`SessionError::Staircase`] when the session already finished.
    pub fn submit(&mut self, response: Response) -> Result<Next, SessionError> {
        let Some(trial) = self.current.as_ref() else {
            let reason = self
                .controller
                .finish_reason()
                .unwrap_or(FinishReason::QuestionLimit);
            return Err(SessionError::Staircase(
                StateError::AlreadyFinished {
                    trials: self.controller.log().len(),
                    reason,
                }
                .into(),
            ));
        };

        if response.is_blank() {
            return Err(SessionError::MissingResponse {
                trial: trial.number,
            });
        }

        let Some(answer) = grade(&trial.stimulus, &response) else {
            return Err(SessionError::ResponseMismatch {
                trial: trial.number,
                stimulus: trial.stimulus.kind(),
                response: response.kind(),
            });
        };

        let number = trial.number;
        let snr = trial.snr;
        let is_correct = answer.is_correct;
        let timestamp = self.clock.now_millis();
        let step = self.controller.record_graded(answer, timestamp)?;

        tracing::debug!(
            trial = number,
            snr,
            is_correct,
            reversal = ?step.reversal,
            "Recorded answer"
        );

        self.advance(step)
    }

    fn advance(&mut self, step: StepResult) -> Result<Next, SessionError> {
        match step.decision {
            Decision::Continue(snr) => {
                let number = self.controller.trial_number();
                let trial = Trial {
                    number,
                    snr,
                    stimulus: self.selector.select(number, snr),
                };
                self.current = Some(trial.clone());
                Ok(Next::Trial(trial))
            }
            Decision::Finished => {
                self.current = None;
                let summary = self.controller.summary()?;

                if summary.finish_reason == FinishReason::QuestionLimit {
                    tracing::warn!(
                        reversals = summary.reversals.len(),
                        wanted = self.config.staircase.reversals_to_finish,
                        "Question limit reached before the reversal target"
                    );
                }
                tracing::info!(
                    target_snr = summary.target_snr,
                    target_db = self.config.db_mapping.to_db(summary.target_snr as f64),
                    trials = summary.log.len(),
                    reason = %summary.finish_reason,
                    "Session finished"
                );

                Ok(Next::Finished(summary))
            }
        }
    }

    /// Summary of the finished session.
    pub fn summary(&self) -> Result<Summary, SessionError> {
        Ok(self.controller.summary()?)
    }

    /// Whether the session has finished.
    pub fn is_finished(&self) -> bool {
        self.controller.is_finished()
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying staircase.
    pub fn controller(&self) -> &StaircaseController {
        &self.controller
    }
}
