//! Domain error types

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A required configuration value could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The named value is unset or empty.
    #[error("configuration value {name} is not set")]
    Missing {
        /// Name the value was looked up by.
        name: String,
    },

    /// The named value is present but unusable.
    #[error("configuration value {name} is invalid: {reason}")]
    Invalid {
        /// Name the value was looked up by.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigurationError {
    /// Creates a `Missing` error for the given name.
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Creates an `Invalid` error for the given name.
    #[must_use]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within the transport timeout.
    Timeout,
    /// No connection could be established.
    Connect,
    /// Any other failure before a response was read.
    Other,
}

/// The token endpoint could not be reached. No grant was consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct TransportError {
    /// Failure category.
    pub kind: TransportErrorKind,
    /// Transport-level description.
    pub message: String,
}

impl TransportError {
    /// Creates a transport error of the given kind.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns true if the transport timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self.kind, TransportErrorKind::Timeout)
    }
}

/// Standard OAuth error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Details of a grant the provider refused or answered unusably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRejection {
    /// HTTP status, if a response was received.
    pub status: Option<u16>,
    /// OAuth `error` code, if the body carried one.
    pub error: Option<String>,
    /// OAuth `error_description`, if the body carried one.
    pub error_description: Option<String>,
    /// The response body as received.
    pub body: String,
}

impl ProviderRejection {
    /// Builds a rejection from an error response, parsing the standard
    /// `error`/`error_description` shape when present.
    #[must_use]
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let parsed = serde_json::from_str::<ErrorBody>(&body).ok();
        let (error, error_description) =
            parsed.map_or((None, None), |b| (Some(b.error), b.error_description));

        Self {
            status: Some(status),
            error,
            error_description,
            body,
        }
    }

    /// Builds a rejection that never reached the provider or whose
    /// response could not be used.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            status: None,
            error: None,
            error_description: None,
            body: message.into(),
        }
    }
}

impl fmt::Display for ProviderRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {status}: ")?;
        }
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => write!(f, "{error} ({description})"),
            (Some(error), None) => write!(f, "{error}"),
            _ => write!(f, "{}", self.body),
        }
    }
}

/// Every failure the OAuth core reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    /// Client identity could not be resolved. Raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The provider rejected an authorization code. Terminal for that code.
    #[error("token exchange failed: {0}")]
    TokenExchange(ProviderRejection),

    /// The provider rejected a refresh token. Terminal for that token line.
    #[error("token refresh failed: {0}")]
    TokenRefresh(ProviderRejection),

    /// The token endpoint could not be reached.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl OAuthError {
    /// Returns true if the caller may retry the same call.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the token line must restart with a new authorization.
    #[must_use]
    pub const fn invalidates_token_line(&self) -> bool {
        matches!(self, Self::TokenRefresh(_))
    }
}

/// Result type alias for OAuth operations.
pub type OAuthResult<T> = Result<T, OAuthError>;
