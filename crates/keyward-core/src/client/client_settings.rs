use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the various targets and behavior of the
/// Keyward Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use keyward_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "https://keyward.app".to_string(),
///     auth_path: "/api/auth".to_string(),
///     user_agent: "Keyward Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Origin of the targeted Keyward deployment, without a trailing slash.
    /// Defaults to `https://keyward.app`
    pub base_url: String,
    /// Mount point of the identity service under `base_url`. Deployments that mount the identity
    /// service elsewhere override this. Defaults to `/api/auth`
    pub auth_path: String,
    /// The user_agent sent with every request. Defaults to `Keyward Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://keyward.app".into(),
            auth_path: "/api/auth".into(),
            user_agent: "Keyward Rust-SDK".into(),
        }
    }
}

impl ClientSettings {
    /// Fully resolved base path of the identity service.
    pub fn identity_base_path(&self) -> String {
        format!("{}{}", self.base_url, self.auth_path)
    }
}
