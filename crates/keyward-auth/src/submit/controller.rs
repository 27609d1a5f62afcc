use std::sync::{Arc, RwLock};

use keyward_core::{Navigator, Route};
use tracing::{debug, instrument, warn};

use crate::{
    identity::IdentityService,
    submit::{
        classify::classify_service_error,
        state::{FailureKind, SubmissionState, SubmitFailure},
    },
};

pub(crate) const MSG_REQUIRED_FIELDS: &str = "Username and password are required";
pub(crate) const MSG_RESET_CODE_REQUIRED: &str = "Enter the reset code";
pub(crate) const MSG_NO_SESSION_DATA: &str = "No data received from the server";

/// Which credential flow a controller instance drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitFlow {
    Login,
    PasswordReset,
}

/// One attempt's worth of form input.
///
/// Built fresh from the form fields on each submit and owned exclusively by
/// the submitting form; never shared between form instances.
#[derive(Debug, Clone, Default)]
pub struct CredentialSubmission {
    /// Username typed into the form. May be empty.
    pub identifier: String,
    /// Password (login) or replacement password (reset). May be empty.
    pub secret: String,
    /// Resolved reset token; only meaningful for the reset flow.
    pub effective_token: String,
}

impl CredentialSubmission {
    /// Input for a login submission.
    pub fn login(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            effective_token: String::new(),
        }
    }

    /// Input for a password-reset submission.
    pub fn password_reset(
        new_secret: impl Into<String>,
        effective_token: impl Into<String>,
    ) -> Self {
        Self {
            identifier: String::new(),
            secret: new_secret.into(),
            effective_token: effective_token.into(),
        }
    }
}

/// Drives one credential form: validation, the identity call, outcome
/// classification and the success navigation.
///
/// One instance per active form. Every submission ends in a terminal
/// [`SubmissionState`]; `submit` never propagates an error and never leaves
/// the state in `Submitting`.
pub struct SubmissionController {
    flow: SubmitFlow,
    service: Arc<dyn IdentityService>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SubmissionState>,
}

impl SubmissionController {
    /// Controller for the login form.
    pub fn login(service: Arc<dyn IdentityService>, navigator: Arc<dyn Navigator>) -> Self {
        Self::new(SubmitFlow::Login, service, navigator)
    }

    /// Controller for a password-reset form.
    pub fn password_reset(
        service: Arc<dyn IdentityService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(SubmitFlow::PasswordReset, service, navigator)
    }

    fn new(
        flow: SubmitFlow,
        service: Arc<dyn IdentityService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            flow,
            service,
            navigator,
            state: RwLock::new(SubmissionState::Idle),
        }
    }

    /// Current submission state, for the presentation layer.
    pub fn state(&self) -> SubmissionState {
        self.state
            .read()
            .expect("submission state lock poisoned")
            .clone()
    }

    /// Submit the form.
    ///
    /// A call while a request is already in flight is a no-op. The caller is
    /// expected to disable the submit action during
    /// [`SubmissionState::Submitting`]; the controller guards against
    /// re-entrancy regardless.
    #[instrument(skip_all, fields(flow = ?self.flow))]
    pub async fn submit(&self, submission: CredentialSubmission) {
        if !self.begin_submit() {
            debug!("submission already in flight, ignoring");
            return;
        }

        if let Some(failure) = self.validate(&submission) {
            warn!(kind = ?failure.kind, "submission rejected before the service call");
            self.finish(SubmissionState::Failed(failure));
            return;
        }

        let outcome = match self.flow {
            SubmitFlow::Login => self.submit_login(&submission).await,
            SubmitFlow::PasswordReset => self.submit_password_reset(&submission).await,
        };

        match outcome {
            Ok(route) => {
                debug!(%route, "submission succeeded");
                self.finish(SubmissionState::Succeeded);
                self.navigator.go_to(route);
            }
            Err(failure) => {
                warn!(kind = ?failure.kind, "submission failed");
                self.finish(SubmissionState::Failed(failure));
            }
        }
    }

    /// Client-side validation; a violation means zero service calls.
    fn validate(&self, submission: &CredentialSubmission) -> Option<SubmitFailure> {
        match self.flow {
            SubmitFlow::Login => {
                if submission.identifier.trim().is_empty() || submission.secret.trim().is_empty() {
                    return Some(SubmitFailure::new(
                        FailureKind::InvalidInput,
                        MSG_REQUIRED_FIELDS,
                    ));
                }
            }
            SubmitFlow::PasswordReset => {
                if submission.effective_token.trim().is_empty() {
                    return Some(SubmitFailure::new(
                        FailureKind::InvalidInput,
                        MSG_RESET_CODE_REQUIRED,
                    ));
                }
            }
        }

        None
    }

    async fn submit_login(
        &self,
        submission: &CredentialSubmission,
    ) -> Result<Route, SubmitFailure> {
        match self
            .service
            .sign_in(submission.identifier.trim(), &submission.secret)
            .await
        {
            Ok(Some(_session)) => Ok(Route::AdminHome),
            // A non-error response must still carry usable session data.
            Ok(None) => Err(SubmitFailure::new(
                FailureKind::ServiceError,
                MSG_NO_SESSION_DATA,
            )),
            Err(error) => Err(classify_service_error(&error)),
        }
    }

    async fn submit_password_reset(
        &self,
        submission: &CredentialSubmission,
    ) -> Result<Route, SubmitFailure> {
        match self
            .service
            .reset_password(&submission.secret, submission.effective_token.trim())
            .await
        {
            Ok(()) => Ok(Route::AdminHome),
            Err(error) => Err(classify_service_error(&error)),
        }
    }

    /// Move to `Submitting` unless a request is already in flight. Entering
    /// `Submitting` also clears any previous failure message.
    fn begin_submit(&self) -> bool {
        let mut state = self.state.write().expect("submission state lock poisoned");
        if *state == SubmissionState::Submitting {
            return false;
        }
        *state = SubmissionState::Submitting;
        true
    }

    /// Record a terminal outcome. The lock is never held across an await, so
    /// a late response after form teardown only touches this instance.
    fn finish(&self, terminal: SubmissionState) {
        debug_assert!(!matches!(terminal, SubmissionState::Submitting | SubmissionState::Idle));
        let mut state = self.state.write().expect("submission state lock poisoned");
        *state = terminal;
    }
}
