//! Token line lifecycle

use crate::error::OAuthError;

/// Where a token line stands.
///
/// `NoToken -> Active` on a successful code exchange, `Active -> Active` on a
/// successful refresh, `Active -> Invalid` when the provider rejects the
/// refresh token. Only a new authorization leaves `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenState {
    /// No authorization has completed yet.
    #[default]
    NoToken,
    /// A usable token record exists.
    Active,
    /// The refresh token was rejected.
    Invalid,
}

impl TokenState {
    /// State after a successful code exchange.
    #[must_use]
    pub const fn on_exchanged(self) -> Self {
        Self::Active
    }

    /// State after a refresh attempt.
    #[must_use]
    pub const fn on_refresh(self, result: Result<(), &OAuthError>) -> Self {
        match (self, result) {
            (Self::Active, Ok(())) => Self::Active,
            (Self::Active, Err(error)) if error.invalidates_token_line() => Self::Invalid,
            (state, _) => state,
        }
    }

    /// State after abandoning the line to start a new authorization.
    #[must_use]
    pub const fn restart(self) -> Self {
        Self::NoToken
    }

    /// Returns true if a token record is usable.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true if the line needs a new authorization.
    #[must_use]
    pub const fn needs_authorization(self) -> bool {
        matches!(self, Self::NoToken | Self::Invalid)
    }

    /// Get a user-friendly message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoToken => "Not authorized",
            Self::Active => "Authorized",
            Self::Invalid => "Authorization revoked or expired, re-authorize",
        }
    }
}
