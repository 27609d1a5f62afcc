use async_trait::async_trait;
use keyward_core::ApiError;

use crate::identity::SessionData;

/// Client-side contract of the Keyward identity service.
///
/// Both operations are unauthenticated. A structured rejection surfaces as
/// [`ApiError::ResponseContent`] with whatever status and message the
/// service supplied; a transport failure surfaces as the underlying
/// [`ApiError::Reqwest`] error.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Exchange a username/password pair for a session.
    ///
    /// `Ok(None)` models a success response that carried no session payload.
    /// Deciding what to do with that is the caller's business, not the
    /// transport's.
    async fn sign_in(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<SessionData>, ApiError>;

    /// Redeem a one-time reset token, setting a new password.
    ///
    /// The operation is side-effect only; any success response counts,
    /// whatever its body.
    async fn reset_password(&self, new_secret: &str, token: &str) -> Result<(), ApiError>;
}
