//! Credential submission.
//!
//! One [`SubmissionController`] drives one credential form through
//! validation, the identity call, outcome classification and the success
//! navigation. The login and password-reset forms are two instantiations of
//! the same controller.

mod classify;
mod controller;
mod state;

pub use controller::{CredentialSubmission, SubmissionController};
pub use state::{FailureKind, SubmissionState, SubmitFailure};
