use chrono::{DateTime, Utc};

/// An authenticated session issued by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Bearer session token.
    pub token: String,
    /// The user the session was issued to.
    pub user: SessionUser,
    /// When the session expires, if the service reported it.
    pub expires_at: Option<DateTime<Utc>>,
}

/// The signed-in user, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Stable user identifier.
    pub id: String,
    /// Username the account signs in with.
    pub username: String,
    /// Display name, when the account has one.
    pub name: Option<String>,
}
