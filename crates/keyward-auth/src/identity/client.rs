use async_trait::async_trait;
use keyward_core::{ApiError, Client};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    api::{
        request::{ResetPasswordRequestPayload, SignInRequestPayload},
        response::{ErrorApiResponse, SessionApiResponse},
    },
    identity::{IdentityService, SessionData},
};

/// Issues unauthenticated credential calls against the Keyward identity
/// service.
#[derive(Clone)]
pub struct IdentityClient {
    pub(crate) client: Client,
}

impl IdentityClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// POST a JSON payload to `path` under the identity base path.
    async fn send_identity_request(
        &self,
        path: &str,
        payload: &(impl Serialize + Sync),
    ) -> Result<reqwest::Response, ApiError> {
        let configuration = self.client.internal.get_api_configuration();
        let url = format!("{}{}", configuration.identity_base_path, path);

        let response = configuration
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            // credential requests and responses must never be cached
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .json(payload)
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl IdentityService for IdentityClient {
    #[instrument(skip_all)]
    async fn sign_in(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<SessionData>, ApiError> {
        let payload = SignInRequestPayload {
            username: identifier.to_string(),
            password: secret.to_string(),
        };

        let response = self
            .send_identity_request("/sign-in/username", &payload)
            .await?;

        if !response.status().is_success() {
            return Err(into_response_error(response).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            warn!("sign-in succeeded without a session payload");
            return Ok(None);
        }

        let session: SessionApiResponse = serde_json::from_str(&body)?;
        Ok(Some(session.into()))
    }

    #[instrument(skip_all)]
    async fn reset_password(&self, new_secret: &str, token: &str) -> Result<(), ApiError> {
        let payload = ResetPasswordRequestPayload {
            new_password: new_secret.to_string(),
            token: token.to_string(),
        };

        let response = self
            .send_identity_request("/reset-password", &payload)
            .await?;

        if !response.status().is_success() {
            return Err(into_response_error(response).await);
        }

        // Side-effect-only endpoint; the success body is ignored.
        Ok(())
    }
}

/// Turn a non-success response into [`ApiError::ResponseContent`], keeping
/// whatever status and message the service supplied. An unparseable error
/// body degrades to `message: None` rather than failing.
async fn into_response_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let body: Option<ErrorApiResponse> = response.json().await.ok();

    if let Some(code) = body.as_ref().and_then(|body| body.code.as_deref()) {
        debug!(%status, code, "identity service rejected the request");
    }

    ApiError::ResponseContent {
        status: Some(status),
        message: body.and_then(|body| body.message),
    }
}

#[cfg(test)]
mod tests {
    use keyward_core::ClientSettings;
    use keyward_test::start_identity_mock;
    use wiremock::{matchers, Mock, ResponseTemplate};

    use super::*;

    fn identity_client(settings: ClientSettings) -> IdentityClient {
        IdentityClient::new(Client::new(Some(settings)))
    }

    fn session_body() -> serde_json::Value {
        serde_json::json!({
            "token": "sess_9f2c",
            "user": {"id": "u_1", "username": "alice", "name": "Alice"},
            "expiresAt": "2026-08-13T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn sign_in_parses_the_session_payload() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/api/auth/sign-in/username"))
            .and(matchers::header(
                reqwest::header::ACCEPT.as_str(),
                "application/json",
            ))
            .and(matchers::header(
                reqwest::header::CACHE_CONTROL.as_str(),
                "no-store",
            ))
            .and(matchers::body_json(serde_json::json!({
                "username": "alice",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body()));

        let (_server, settings) = start_identity_mock(vec![mock]).await;

        let result = identity_client(settings).sign_in("alice", "hunter2").await;

        let session = result
            .expect("sign-in should succeed")
            .expect("session payload expected");
        assert_eq!(session.token, "sess_9f2c");
        assert_eq!(session.user.id, "u_1");
        assert_eq!(session.user.name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn sign_in_with_empty_success_body_yields_no_session() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/api/auth/sign-in/username"))
            .respond_with(ResponseTemplate::new(200));

        let (_server, settings) = start_identity_mock(vec![mock]).await;

        let result = identity_client(settings).sign_in("alice", "hunter2").await;

        assert_eq!(result.expect("sign-in should succeed"), None);
    }

    #[tokio::test]
    async fn sign_in_rejection_carries_status_and_message() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/api/auth/sign-in/username"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "invalid username or password",
                "code": "INVALID_USERNAME_OR_PASSWORD"
            })));

        let (_server, settings) = start_identity_mock(vec![mock]).await;

        let result = identity_client(settings).sign_in("alice", "wrong").await;

        match result.expect_err("sign-in should be rejected") {
            ApiError::ResponseContent { status, message } => {
                assert_eq!(status, Some(reqwest::StatusCode::UNAUTHORIZED));
                assert_eq!(message.as_deref(), Some("invalid username or password"));
            }
            other => panic!("expected ResponseContent, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejection_with_unparseable_body_keeps_the_status() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/api/auth/sign-in/username"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"));

        let (_server, settings) = start_identity_mock(vec![mock]).await;

        let result = identity_client(settings).sign_in("alice", "hunter2").await;

        match result.expect_err("sign-in should be rejected") {
            ApiError::ResponseContent { status, message } => {
                assert_eq!(status, Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
                assert_eq!(message, None);
            }
            other => panic!("expected ResponseContent, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reset_password_posts_the_token_and_ignores_the_body() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/api/auth/reset-password"))
            .and(matchers::body_json(serde_json::json!({
                "newPassword": "Sup3r!",
                "token": "abc123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true
            })));

        let (_server, settings) = start_identity_mock(vec![mock]).await;

        let result = identity_client(settings)
            .reset_password("Sup3r!", "abc123")
            .await;

        result.expect("reset should succeed");
    }

    #[tokio::test]
    async fn connection_failure_surfaces_as_a_transport_error() {
        // Port 1 refuses connections; no mock server involved.
        let settings = ClientSettings {
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };

        let result = identity_client(settings).sign_in("alice", "hunter2").await;

        match result.expect_err("sign-in should fail") {
            ApiError::Reqwest(error) => assert!(error.is_connect()),
            other => panic!("expected a transport error, got {other:?}"),
        }
    }
}
