//! Authorization code exchange.

use smartcar_domain::{OAuthError, OAuthResult, ProviderRejection, TokenGrant, TokenRecord};

use super::OAuthClient;

impl OAuthClient {
    /// Exchanges an authorization code for a token record.
    ///
    /// The code is submitted once; a rejected code cannot be exchanged again,
    /// so this is never retried.
    ///
    /// # Errors
    /// Returns `OAuthError::Configuration` before any request if the identity
    /// cannot be resolved, `OAuthError::TokenExchange` if the provider rejects
    /// the code and `OAuthError::Transport` if the endpoint is unreachable.
    pub async fn exchange_code(&self, auth_code: &str) -> OAuthResult<TokenRecord> {
        let identity = self.identity()?;

        if auth_code.is_empty() {
            return Err(OAuthError::TokenExchange(ProviderRejection::local(
                "authorization code is empty",
            )));
        }

        let grant = TokenGrant::AuthorizationCode {
            code: auth_code.to_string(),
            redirect_uri: identity.callback_url().to_string(),
        };
        self.submit(&identity, grant, OAuthError::TokenExchange, None)
            .await
    }
}
