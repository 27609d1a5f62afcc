use keyward_core::ApiError;
use reqwest::StatusCode;

use crate::submit::state::{FailureKind, SubmitFailure};

pub(crate) const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub(crate) const MSG_SERVER_ERROR: &str = "Server error";
pub(crate) const MSG_UNREACHABLE: &str = "Cannot reach the server. Check your connection.";

/// Map a failed identity call onto the user-facing failure taxonomy.
///
/// Deterministic and side-effect free. The controller is the only caller,
/// but the mapping stands alone so it can be tested without a network layer:
/// 401/403-class rejections are `Unauthorized`, any other structured
/// rejection is `ServiceError`, and everything that never produced a
/// structured result is `Unreachable`.
pub(crate) fn classify_service_error(error: &ApiError) -> SubmitFailure {
    match error {
        ApiError::ResponseContent {
            status: Some(status),
            message,
        } if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN => {
            SubmitFailure::new(
                FailureKind::Unauthorized,
                message.clone().unwrap_or_else(|| MSG_INVALID_CREDENTIALS.to_string()),
            )
        }
        ApiError::ResponseContent {
            status: Some(status),
            message,
        } => SubmitFailure::new(
            FailureKind::ServiceError,
            message
                .clone()
                .unwrap_or_else(|| format!("{} ({})", MSG_SERVER_ERROR, status.as_u16())),
        ),
        ApiError::ResponseContent {
            status: None,
            message,
        } => SubmitFailure::new(
            FailureKind::ServiceError,
            message.clone().unwrap_or_else(|| MSG_SERVER_ERROR.to_string()),
        ),
        ApiError::Reqwest(_) | ApiError::Serde(_) => {
            SubmitFailure::new(FailureKind::Unreachable, MSG_UNREACHABLE)
        }
    }
}
