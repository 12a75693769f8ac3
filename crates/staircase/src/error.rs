//! Session-level errors.

use staircase_core::StaircaseError;

use crate::task::TaskKind;

/// Errors returned by [`ListeningSession`](crate::ListeningSession).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The staircase rejected the config or the call.
    #[error(transparent)]
    Staircase(#[from] StaircaseError),

    /// The listener submitted an empty answer. The trial is still pending.
    #[error("Trial {trial}: no response given")]
    MissingResponse {
        /// Trial awaiting an answer.
        trial: u32,
    },

    /// The response belongs to a different task than the presented stimulus.
    #[error("Trial {trial}: {response} response to a {stimulus} stimulus")]
    ResponseMismatch {
        /// Trial awaiting an answer.
        trial: u32,
        /// Task of the presented stimulus.
        stimulus: TaskKind,
        /// Task of the submitted response.
        response: TaskKind,
    },
}
