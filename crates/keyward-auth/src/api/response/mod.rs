use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::identity::{SessionData, SessionUser};

/// Success body of a sign-in call.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionApiResponse {
    pub token: String,
    pub user: SessionUserApiResponse,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionUserApiResponse {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<SessionApiResponse> for SessionData {
    fn from(response: SessionApiResponse) -> Self {
        SessionData {
            token: response.token,
            user: SessionUser {
                id: response.user.id,
                username: response.user.username,
                name: response.user.name,
            },
            expires_at: response.expires_at,
        }
    }
}

/// Error body of a rejected identity call. Every field is optional; the
/// service is not obligated to explain itself.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
