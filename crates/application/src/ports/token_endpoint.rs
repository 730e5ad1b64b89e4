//! Token endpoint port
//!
//! Defines the HTTP collaborator the OAuth core delegates to.

use async_trait::async_trait;
use smartcar_domain::{
    AuthorizationParams, ClientIdentity, ProviderRejection, TokenGrant, TokenResponse,
    TransportError,
};

/// Errors returned by a token endpoint client.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The endpoint answered with a non-success status.
    #[error("Request rejected: {0}")]
    Rejected(ProviderRejection),

    /// The endpoint answered success with an unusable body.
    #[error("Malformed token response: {0}")]
    Malformed(String),

    /// The endpoint could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Client for the provider's authorization and token endpoints.
#[async_trait]
pub trait TokenEndpointClient: Send + Sync {
    /// Builds the browser-facing authorization URL.
    ///
    /// Pure: performs no I/O.
    fn authorize_url(&self, client_id: &str, params: &AuthorizationParams) -> String;

    /// Submits a grant to the token endpoint, authenticated as `identity`.
    ///
    /// Performs exactly one HTTP request and never retries.
    ///
    /// # Errors
    /// Returns `EndpointError::Rejected` for non-success responses,
    /// `EndpointError::Malformed` for unparseable success bodies and
    /// `EndpointError::Transport` when no response was received.
    async fn request_token(
        &self,
        identity: &ClientIdentity,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, EndpointError>;
}
