use std::sync::Arc;

use reqwest::header::{self, HeaderValue};

use super::internal::{ApiConfiguration, InternalClient};
use crate::client::client_settings::ClientSettings;

/// The main struct to interact with the Keyward SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. Any mutable state needs to be behind the Arc, ideally as
    // part of the existing [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Keyward client, with `None` for default settings.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        let settings = settings.unwrap_or_default();

        let headers = build_default_headers(&settings);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP client build should not fail");

        let api_configuration = ApiConfiguration {
            identity_base_path: settings.identity_base_path(),
            client: http_client,
        };

        Self {
            internal: Arc::new(InternalClient {
                settings,
                api_configuration,
            }),
        }
    }
}

/// Build default headers for the Keyward HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
