//! Shared OAuth client handle.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use smartcar_domain::constants::{CALLBACK_URL_ENV, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
use smartcar_domain::{
    ClientIdentity, ConfigurationError, OAuthError, OAuthResult, ProviderRejection, TokenGrant,
    TokenRecord, TokenResponse,
};

use crate::ports::{Clock, ConfigProvider, EndpointError, TokenEndpointClient};

/// Resolves the client identity, failing on the first missing value.
///
/// Reads client id, secret and callback URL in that order.
///
/// # Errors
/// Returns `ConfigurationError::Missing` naming the first absent value.
pub(crate) fn resolve_identity(
    config: &dyn ConfigProvider,
) -> Result<ClientIdentity, ConfigurationError> {
    let client_id = config.get(CLIENT_ID_ENV)?;
    let client_secret = config.get(CLIENT_SECRET_ENV)?;
    let callback_url = config.get(CALLBACK_URL_ENV)?;
    Ok(ClientIdentity::new(client_id, client_secret, callback_url))
}

/// The process-wide OAuth client.
///
/// Holds the configuration source, the token endpoint and a lazily resolved
/// [`ClientIdentity`]. The identity is resolved at most once; concurrent
/// first calls share the same instance. A failed resolution is not cached.
pub struct OAuthClient {
    config: Arc<dyn ConfigProvider>,
    endpoint: Arc<dyn TokenEndpointClient>,
    clock: Arc<dyn Clock>,
    identity: OnceLock<Arc<ClientIdentity>>,
    init_lock: Mutex<()>,
}

impl OAuthClient {
    /// Create a new client. Configuration is not read until first use.
    #[must_use]
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        endpoint: Arc<dyn TokenEndpointClient>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            endpoint,
            clock,
            identity: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the shared client identity, resolving it on first use.
    ///
    /// # Errors
    /// Returns `OAuthError::Configuration` if a required value is missing.
    pub(crate) fn identity(&self) -> OAuthResult<Arc<ClientIdentity>> {
        if let Some(identity) = self.identity.get() {
            return Ok(Arc::clone(identity));
        }

        let _guard = self.init_lock.lock();
        if let Some(identity) = self.identity.get() {
            return Ok(Arc::clone(identity));
        }

        let identity = match resolve_identity(self.config.as_ref()) {
            Ok(identity) => Arc::new(identity),
            Err(e) => {
                tracing::warn!(error = %e, "client identity could not be resolved");
                return Err(e.into());
            }
        };
        tracing::debug!("client identity resolved");
        Ok(Arc::clone(self.identity.get_or_init(|| identity)))
    }

    pub(crate) fn endpoint(&self) -> &dyn TokenEndpointClient {
        self.endpoint.as_ref()
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Submits one grant and turns the response into a record.
    ///
    /// `rejected` picks the error kind for provider-side failures.
    pub(crate) async fn submit(
        &self,
        identity: &ClientIdentity,
        grant: TokenGrant,
        rejected: fn(ProviderRejection) -> OAuthError,
        previous_refresh_token: Option<&str>,
    ) -> OAuthResult<TokenRecord> {
        let grant_type = grant.grant_type();
        tracing::debug!(grant_type, "requesting token");

        let response = self
            .endpoint
            .request_token(identity, &grant)
            .await
            .map_err(|e| {
                let error = classify(e, rejected);
                tracing::warn!(grant_type, error = %error, "token request failed");
                error
            })?;

        let response: TokenResponse = match previous_refresh_token {
            Some(previous) => response.or_refresh_token(previous),
            None => response,
        };

        let record = TokenRecord::from_response(response, self.now()).map_err(|e| {
            tracing::warn!(grant_type, error = %e, "token response unusable");
            rejected(ProviderRejection::local(e.to_string()))
        })?;

        tracing::info!(grant_type, expires_at = %record.expires_at(), "token issued");
        Ok(record)
    }
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("identity_resolved", &self.identity.get().is_some())
            .finish_non_exhaustive()
    }
}

fn classify(error: EndpointError, rejected: fn(ProviderRejection) -> OAuthError) -> OAuthError {
    match error {
        EndpointError::Rejected(rejection) => rejected(rejection),
        EndpointError::Malformed(message) => rejected(ProviderRejection::local(message)),
        EndpointError::Transport(e) => OAuthError::Transport(e),
    }
}
