use crate::client::client_settings::ClientSettings;

/// Everything needed to issue requests against the identity service.
pub struct ApiConfiguration {
    /// Fully resolved base path of the identity service, e.g.
    /// `https://keyward.app/api/auth`.
    pub identity_base_path: String,
    /// HTTP client shared by all identity requests.
    pub client: reqwest::Client,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("identity_base_path", &self.identity_base_path)
            .finish_non_exhaustive()
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) api_configuration: ApiConfiguration,
}

impl InternalClient {
    /// Configuration for reaching the identity service.
    pub fn get_api_configuration(&self) -> &ApiConfiguration {
        &self.api_configuration
    }

    /// The settings this client was created with.
    pub fn get_settings(&self) -> &ClientSettings {
        &self.settings
    }
}
