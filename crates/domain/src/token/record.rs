//! Token record handed to the host application.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::TokenResponse;

/// Why a successful token response could not become a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenRecordError {
    /// The response carried no refresh token.
    #[error("token response has no refresh_token")]
    MissingRefreshToken,

    /// The response carried neither `expires_in` nor `expires_at`.
    #[error("token response has no expiry")]
    MissingExpiry,

    /// The expiry could not be turned into a timestamp.
    #[error("token response has an invalid expiry: {0}")]
    InvalidExpiry(i64),
}

/// Access/refresh token pair produced by a token endpoint exchange.
///
/// Serializes as a flat JSON object: the named fields, `expires_at` as Unix
/// seconds, then every additional provider field.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    access_token: String,
    refresh_token: String,
    token_type: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    expires_at: DateTime<Utc>,
    #[serde(flatten)]
    raw: Map<String, Value>,
}

impl TokenRecord {
    /// Builds a record from a successful token response.
    ///
    /// `obtained_at` anchors a relative `expires_in`.
    ///
    /// # Errors
    /// Returns an error if the response lacks a refresh token or a usable expiry.
    pub fn from_response(
        response: TokenResponse,
        obtained_at: DateTime<Utc>,
    ) -> Result<Self, TokenRecordError> {
        let refresh_token = response
            .refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(TokenRecordError::MissingRefreshToken)?;

        let expires_at = match (response.expires_in, response.expires_at) {
            (Some(secs), _) => {
                if secs < 0 {
                    return Err(TokenRecordError::InvalidExpiry(secs));
                }
                Duration::try_seconds(secs)
                    .and_then(|d| obtained_at.checked_add_signed(d))
                    .ok_or(TokenRecordError::InvalidExpiry(secs))?
            }
            (None, Some(ts)) => {
                DateTime::from_timestamp(ts, 0).ok_or(TokenRecordError::InvalidExpiry(ts))?
            }
            (None, None) => return Err(TokenRecordError::MissingExpiry),
        };

        Ok(Self {
            access_token: response.access_token,
            refresh_token,
            token_type: response.token_type,
            expires_at,
            raw: response.extra,
        })
    }

    /// The access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Token type.
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// When the access token expires.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Additional fields the provider returned.
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Check if the token is expired or will expire within the given buffer.
    ///
    /// A buffer too large to represent counts as expiring.
    #[must_use]
    pub fn is_expired_or_expiring(&self, now: DateTime<Utc>, buffer_seconds: i64) -> bool {
        Duration::try_seconds(buffer_seconds)
            .and_then(|buffer| now.checked_add_signed(buffer))
            .is_none_or(|deadline| deadline >= self.expires_at)
    }

    /// Seconds until expiry, negative once expired.
    #[must_use]
    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds()
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl std::fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRecord")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}
