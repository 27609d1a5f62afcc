use serde::Serialize;

/// Body for `POST {identity}/sign-in/username`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInRequestPayload {
    /// Keyward account username.
    pub username: String,
    /// Account password, sent as entered.
    pub password: String,
}

/// Body for `POST {identity}/reset-password`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResetPasswordRequestPayload {
    /// Replacement password.
    pub new_password: String,
    /// One-time reset token proving the request is legitimate.
    pub token: String,
}
