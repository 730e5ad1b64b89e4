//! Registered client identity.

use std::fmt;

/// The application's registered credentials and redirect URI.
///
/// Immutable once built. `Debug` never prints the values.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    client_id: String,
    client_secret: String,
    callback_url: String,
}

impl ClientIdentity {
    /// Creates an identity from already resolved values.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
        }
    }

    /// The registered client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The registered client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The registered redirect URI.
    #[must_use]
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

impl fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientIdentity")
            .field("client_id", &"[redacted]")
            .field("client_secret", &"[redacted]")
            .field("callback_url", &"[redacted]")
            .finish()
    }
}
