//! Token refresh.

use smartcar_domain::{OAuthError, OAuthResult, ProviderRejection, TokenGrant, TokenRecord};

use super::OAuthClient;

impl OAuthClient {
    /// Exchanges the record's refresh token for a new record.
    ///
    /// The returned record is authoritative. If the provider rotated the
    /// refresh token it carries the new one; otherwise the old one is kept.
    ///
    /// # Errors
    /// Returns `OAuthError::Configuration` before any request if the identity
    /// cannot be resolved, `OAuthError::TokenRefresh` if the refresh token is
    /// rejected and `OAuthError::Transport` if the endpoint is unreachable.
    pub async fn refresh(&self, token: &TokenRecord) -> OAuthResult<TokenRecord> {
        let identity = self.identity()?;

        let previous = token.refresh_token();
        if previous.is_empty() {
            return Err(OAuthError::TokenRefresh(ProviderRejection::local(
                "token record has no refresh token",
            )));
        }

        let grant = TokenGrant::RefreshToken {
            refresh_token: previous.to_string(),
        };
        self.submit(&identity, grant, OAuthError::TokenRefresh, Some(previous))
            .await
    }
}
