use thiserror::Error;

/// Classification of a failed submission. Exactly one kind per failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected locally; no service call was made.
    InvalidInput,
    /// The service rejected the credentials (401/403-class status).
    Unauthorized,
    /// The service was reachable but answered with another error status.
    ServiceError,
    /// No response was obtained from the service.
    Unreachable,
}

/// A terminal failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmitFailure {
    /// What went wrong.
    pub kind: FailureKind,
    /// The one message to display for this failure.
    pub message: String,
}

impl SubmitFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Lifecycle of one credential form's submission.
///
/// Exactly one instance per active form; only `submit` and the service
/// response drive transitions. A submission always ends in `Succeeded` or
/// `Failed`, never parked in `Submitting`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No submission attempted since the form became active.
    #[default]
    Idle,
    /// A request is in flight; further submits are ignored.
    Submitting,
    /// The last submission failed.
    Failed(SubmitFailure),
    /// The last submission succeeded and navigation was triggered.
    Succeeded,
}
