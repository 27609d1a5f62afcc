//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from performing requests against the identity service.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error("Received error message from server: [{}] {}", status_label(.status), .message.as_deref().unwrap_or("(no message)"))]
    ResponseContent {
        /// HTTP status of the rejection, when one was obtained.
        status: Option<StatusCode>,
        /// Server-supplied message, when the error body carried one.
        message: Option<String>,
    },
}

fn status_label(status: &Option<StatusCode>) -> String {
    match status {
        Some(status) => status.as_u16().to_string(),
        None => "-".to_string(),
    }
}
