//! Token endpoint grants

use crate::constants::{GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN};

/// A single request shape accepted by the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// Exchange an authorization code.
    AuthorizationCode {
        /// Code received on the redirect URI.
        code: String,
        /// Redirect URI the code was issued for.
        redirect_uri: String,
    },
    /// Exchange a refresh token.
    RefreshToken {
        /// Refresh token from the current record.
        refresh_token: String,
    },
}

impl TokenGrant {
    /// `grant_type` wire value.
    #[must_use]
    pub const fn grant_type(&self) -> &'static str {
        match self {
            Self::AuthorizationCode { .. } => GRANT_AUTHORIZATION_CODE,
            Self::RefreshToken { .. } => GRANT_REFRESH_TOKEN,
        }
    }

    /// Grant-specific form fields, `grant_type` first.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::AuthorizationCode { code, redirect_uri } => vec![
                ("grant_type", self.grant_type()),
                ("code", code.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
            ],
            Self::RefreshToken { refresh_token } => vec![
                ("grant_type", self.grant_type()),
                ("refresh_token", refresh_token.as_str()),
            ],
        }
    }
}

// Codes and refresh tokens are credentials; only the grant type is printed.
impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TokenGrant").field(&self.grant_type()).finish()
    }
}
