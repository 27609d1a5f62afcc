//! Reset-token resolution.
//!
//! A reset form can get its token from two places: a deep-link query
//! parameter captured when the form becomes active, or a code the user types
//! in. The URL token wins, and while it is present the manual input is not
//! offered at all. Precedence, not a merge: the effective token is a derived
//! value, recomputed from the two candidates on every read.

/// Token candidates for one reset form instance.
///
/// The URL token is captured once at activation and is immutable for the
/// form's lifetime; changes to the underlying query string only matter to a
/// fresh form instance. An absent parameter is the empty string, never a
/// null-like value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTokenSource {
    url_token: String,
}

impl ResetTokenSource {
    /// Capture the URL token from the form's activation context.
    pub fn from_activation(url_token: impl Into<String>) -> Self {
        Self {
            url_token: url_token.into(),
        }
    }

    /// The token actually used for a reset request: the URL token when
    /// non-empty, the manually entered code otherwise.
    pub fn effective_token<'a>(&'a self, manual_code: &'a str) -> &'a str {
        if self.url_token.is_empty() {
            manual_code
        } else {
            &self.url_token
        }
    }

    /// Whether the form should offer manual code entry. A function of the
    /// URL token alone, independent of anything the user has typed.
    pub fn shows_manual_entry(&self) -> bool {
        self.url_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_token_wins_over_any_manual_code() {
        let source = ResetTokenSource::from_activation("abc123");

        for manual in ["", "XYZ9", "abc123", "  "] {
            assert_eq!(source.effective_token(manual), "abc123");
        }
        assert!(!source.shows_manual_entry());
    }

    #[test]
    fn manual_code_is_used_when_no_url_token_exists() {
        let source = ResetTokenSource::from_activation("");

        assert_eq!(source.effective_token("XYZ9"), "XYZ9");
        assert!(source.shows_manual_entry());
    }

    #[test]
    fn manual_entry_visibility_ignores_typed_input() {
        let source = ResetTokenSource::from_activation("");

        // Still shown even once the user has typed a full code.
        assert!(source.shows_manual_entry());
        let _ = source.effective_token("XYZ9");
        assert!(source.shows_manual_entry());
    }

    #[test]
    fn both_sources_empty_resolve_to_an_empty_token() {
        let source = ResetTokenSource::from_activation("");
        assert_eq!(source.effective_token(""), "");
    }
}
