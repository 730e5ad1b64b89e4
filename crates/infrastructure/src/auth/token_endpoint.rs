//! Smartcar OAuth endpoint client.
//!
//! This module builds authorization URLs and performs the
//! `authorization_code` and `refresh_token` grants over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use smartcar_application::{EndpointError, TokenEndpointClient};
use smartcar_domain::constants::{AUTHORIZE_PATH, OAUTH_SITE, TOKEN_PATH};
use smartcar_domain::{
    AuthorizationParams, ClientIdentity, ConfigurationError, ProviderRejection, TokenGrant,
    TokenResponse, TransportError, TransportErrorKind,
};
use url::Url;

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Name reported when the site URL is rejected.
const SITE_SETTING: &str = "oauth site";

/// Token endpoint client backed by reqwest.
///
/// Client credentials travel in the form body alongside the grant fields.
/// Redirects are never followed.
#[derive(Debug, Clone)]
pub struct ReqwestTokenEndpoint {
    http_client: Client,
    authorize_url: Url,
    token_url: Url,
    timeout: Duration,
}

impl ReqwestTokenEndpoint {
    /// Create a client for the default Smartcar site.
    ///
    /// # Errors
    /// Returns an error if the built-in site URL cannot be parsed.
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::with_site(OAUTH_SITE)
    }

    /// Create a client for another site, such as a staging host.
    ///
    /// # Errors
    /// Returns `ConfigurationError::Invalid` if `site` is not an absolute URL.
    pub fn with_site(site: &str) -> Result<Self, ConfigurationError> {
        let http_client = Client::builder()
            .user_agent(concat!("smartcar-rust/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(http_client, site)
    }

    /// Create with a custom reqwest client.
    ///
    /// # Errors
    /// Returns `ConfigurationError::Invalid` if `site` is not an absolute URL.
    pub fn with_client(http_client: Client, site: &str) -> Result<Self, ConfigurationError> {
        let base = Url::parse(site)
            .map_err(|e| ConfigurationError::invalid(SITE_SETTING, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ConfigurationError::invalid(
                SITE_SETTING,
                "URL cannot be a base",
            ));
        }
        let authorize_url = base
            .join(AUTHORIZE_PATH)
            .map_err(|e| ConfigurationError::invalid(SITE_SETTING, e.to_string()))?;
        let token_url = base
            .join(TOKEN_PATH)
            .map_err(|e| ConfigurationError::invalid(SITE_SETTING, e.to_string()))?;

        Ok(Self {
            http_client,
            authorize_url,
            token_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The token endpoint URL requests are sent to.
    #[must_use]
    pub const fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Maps reqwest errors to transport errors.
    fn map_error(error: &reqwest::Error) -> TransportError {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        TransportError::new(kind, error.to_string())
    }

    /// Body text for a rejection, keeping a read failure visible.
    fn rejection_body(text: reqwest::Result<String>) -> String {
        text.unwrap_or_else(|e| format!("Failed to read error response: {e}"))
    }
}

#[async_trait]
impl TokenEndpointClient for ReqwestTokenEndpoint {
    fn authorize_url(&self, client_id: &str, params: &AuthorizationParams) -> String {
        let query = params
            .query_pairs(client_id)
            .into_iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = self.authorize_url.clone();
        url.set_query(Some(&query));
        url.into()
    }

    async fn request_token(
        &self,
        identity: &ClientIdentity,
        grant: &TokenGrant,
    ) -> Result<TokenResponse, EndpointError> {
        let grant_type = grant.grant_type();
        let mut fields = grant.form_fields();
        fields.push(("client_id", identity.client_id()));
        fields.push(("client_secret", identity.client_secret()));

        let body = serde_urlencoded::to_string(&fields).map_err(|e| {
            TransportError::new(TransportErrorKind::Other, format!("Failed to encode form: {e}"))
        })?;

        tracing::debug!(grant_type, url = %self.token_url, "POST token endpoint");

        let response = self
            .http_client
            .post(self.token_url.clone())
            .timeout(self.timeout)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        tracing::debug!(grant_type, status = status.as_u16(), "token endpoint responded");

        if !status.is_success() {
            let error_text = Self::rejection_body(response.text().await);
            return Err(EndpointError::Rejected(ProviderRejection::from_response(
                status.as_u16(),
                error_text,
            )));
        }

        // The grant is spent once a success status arrives, so read failures
        // are reported as unusable responses rather than transport errors.
        let text = response
            .text()
            .await
            .map_err(|e| EndpointError::Malformed(format!("Failed to read token response: {e}")))?;

        serde_json::from_str::<TokenResponse>(&text)
            .map_err(|e| EndpointError::Malformed(format!("Failed to parse token response: {e}")))
    }
}
