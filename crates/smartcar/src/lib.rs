//! Smartcar OAuth client
//!
//! Builds the authorization URL, exchanges the returned code for tokens and
//! refreshes them. This crate wires the environment, the reqwest token
//! endpoint and the system clock into an [`OAuthClient`].
//!
//! ```no_run
//! # async fn run() -> Result<(), smartcar::OAuthError> {
//! use smartcar::{AuthorizationRequestOptions, Smartcar};
//!
//! let client = Smartcar::new().build()?;
//! let url = client.build_authorization_url(
//!     &AuthorizationRequestOptions::new().with_scope(["read_odometer", "read_vehicle_info"]),
//! )?;
//! // redirect the user to `url`, then exchange the code they come back with
//! let token = client.exchange_code("code-from-redirect").await?;
//! let _refreshed = client.refresh(&token).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

pub use smartcar_application::{
    Clock, ConfigProvider, EndpointError, OAuthClient, TokenEndpointClient, TokenLine,
};
pub use smartcar_domain::constants;
pub use smartcar_domain::{
    AuthorizationRequestOptions, ClientIdentity, ConfigurationError, OAuthError, OAuthResult,
    ProviderRejection, TokenRecord, TokenState, TransportError, TransportErrorKind,
};
pub use smartcar_infrastructure::{
    EnvConfigProvider, ReqwestTokenEndpoint, StaticConfigProvider, SystemClock,
};

/// Builder for an [`OAuthClient`] backed by the default adapters.
///
/// Defaults: identity from the process environment, the Smartcar OAuth site,
/// a 30 second request timeout and the system clock.
#[must_use]
pub struct Smartcar {
    config: Arc<dyn ConfigProvider>,
    site: String,
    timeout: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl Smartcar {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self {
            config: Arc::new(EnvConfigProvider::new()),
            site: constants::OAUTH_SITE.to_string(),
            timeout: None,
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Resolve identity from another configuration source.
    pub fn with_config(mut self, config: impl ConfigProvider + 'static) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Talk to another OAuth site.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Override the per-request timeout.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use another clock for token expiry.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the client. Configuration is not read until first use.
    ///
    /// # Errors
    /// Returns `OAuthError::Configuration` if the site is not a valid URL.
    pub fn build(self) -> OAuthResult<OAuthClient> {
        let mut endpoint = ReqwestTokenEndpoint::with_site(&self.site)?;
        if let Some(timeout) = self.timeout {
            endpoint = endpoint.with_timeout(timeout);
        }
        tracing::debug!(site = %self.site, "smartcar oauth client built");
        Ok(OAuthClient::new(self.config, Arc::new(endpoint), self.clock))
    }
}

impl Default for Smartcar {
    fn default() -> Self {
        Self::new()
    }
}
