//! Authorization request types

use serde::{Deserialize, Serialize};

use crate::constants::{
    APPROVAL_AUTO, APPROVAL_FORCE, MODE_LIVE, MODE_TEST, RESPONSE_TYPE_CODE,
};

/// Caller-supplied options for one authorization URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationRequestOptions {
    /// Opaque value echoed back to the redirect URI.
    pub state: Option<String>,
    /// Vehicle make that skips the brand selection screen.
    pub make: Option<String>,
    /// Requested scopes, in the order the provider should see them.
    pub scope: Option<Vec<String>>,
    /// Always show the consent screen.
    pub force_prompt: Option<bool>,
    /// Authorize against simulated vehicles.
    pub test_mode: Option<bool>,
}

impl AuthorizationRequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `state` parameter.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the `make` parameter.
    #[must_use]
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Sets the requested scopes.
    #[must_use]
    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = Some(scope.into_iter().map(Into::into).collect());
        self
    }

    /// Sets `force_prompt`.
    #[must_use]
    pub const fn with_force_prompt(mut self, force: bool) -> Self {
        self.force_prompt = Some(force);
        self
    }

    /// Sets `test_mode`.
    #[must_use]
    pub const fn with_test_mode(mut self, test: bool) -> Self {
        self.test_mode = Some(test);
        self
    }
}

/// Whether the consent screen is shown for already approved scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalPrompt {
    /// Skip consent when nothing new is requested.
    #[default]
    Auto,
    /// Always show consent.
    Force,
}

impl ApprovalPrompt {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => APPROVAL_AUTO,
            Self::Force => APPROVAL_FORCE,
        }
    }
}

/// Real or simulated vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Real vehicles.
    #[default]
    Live,
    /// Simulated vehicles.
    Test,
}

impl Mode {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => MODE_LIVE,
            Self::Test => MODE_TEST,
        }
    }
}

/// Assembled authorization parameters, minus the client id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationParams {
    /// Where the provider sends the user back.
    pub redirect_uri: String,
    /// Consent screen behaviour.
    pub approval_prompt: ApprovalPrompt,
    /// Live or test vehicles.
    pub mode: Mode,
    /// Space-joined scopes.
    pub scope: Option<String>,
    /// Echoed state.
    pub state: Option<String>,
    /// Pre-selected make.
    pub make: Option<String>,
}

impl AuthorizationParams {
    /// Query pairs in their fixed wire order, including `client_id`.
    #[must_use]
    pub fn query_pairs<'a>(&'a self, client_id: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut pairs = vec![
            ("response_type", RESPONSE_TYPE_CODE),
            ("client_id", client_id),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("approval_prompt", self.approval_prompt.as_str()),
            ("mode", self.mode.as_str()),
        ];
        if let Some(scope) = &self.scope {
            pairs.push(("scope", scope.as_str()));
        }
        if let Some(state) = &self.state {
            pairs.push(("state", state.as_str()));
        }
        if let Some(make) = &self.make {
            pairs.push(("make", make.as_str()));
        }
        pairs
    }
}
