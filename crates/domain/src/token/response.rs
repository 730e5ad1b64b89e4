//! Token endpoint response body

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON object returned by a successful token request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Newly issued access token.
    pub access_token: String,
    /// Token type, usually `Bearer`.
    pub token_type: String,
    /// Refresh token, absent when the provider did not rotate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Absolute expiry as Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Every other field the provider returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenResponse {
    /// Keeps `previous` as the refresh token if the response carries none.
    #[must_use]
    pub fn or_refresh_token(mut self, previous: &str) -> Self {
        if self.refresh_token.as_deref().is_none_or(str::is_empty) {
            self.refresh_token = Some(previous.to_string());
        }
        self
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
