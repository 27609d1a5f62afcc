use std::sync::Arc;

use keyward_core::{Client, Navigator};

use crate::{identity::IdentityClient, submit::SubmissionController};

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client for identity functionality.
    pub fn identity(&self) -> IdentityClient {
        IdentityClient::new(self.client.clone())
    }

    /// Submission controller for the login form.
    pub fn login_form(&self, navigator: Arc<dyn Navigator>) -> SubmissionController {
        SubmissionController::login(Arc::new(self.identity()), navigator)
    }

    /// Submission controller for a password-reset form.
    pub fn reset_form(&self, navigator: Arc<dyn Navigator>) -> SubmissionController {
        SubmissionController::password_reset(Arc::new(self.identity()), navigator)
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
