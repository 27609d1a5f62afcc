//! Client-side navigation seam.
//!
//! The SDK never performs route transitions itself. The embedding
//! application supplies a [`Navigator`] and the credential flows call it
//! with one of the fixed [`Route`] destinations after a successful
//! submission.

use std::fmt;

/// Fixed client-side destinations used by the credential flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Authenticated landing page (the admin users dashboard).
    AdminHome,
    /// The sign-in page.
    Login,
}

impl Route {
    /// The application path this destination maps to.
    pub fn path(&self) -> &'static str {
        match self {
            Route::AdminHome => "/admin/users",
            Route::Login => "/auth",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Route transitions performed by the embedding application.
///
/// `go_to` is fire-and-forget: implementations must not block, and the SDK
/// calls it at most once per successful submission.
pub trait Navigator: Send + Sync {
    /// Perform a client-side transition to `route`.
    fn go_to(&self, route: Route);
}
