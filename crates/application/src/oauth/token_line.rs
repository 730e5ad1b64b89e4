//! Token line lifecycle tracking.

use smartcar_domain::{OAuthError, OAuthResult, ProviderRejection, TokenRecord, TokenState};

use super::OAuthClient;

/// One authorization's chain of token records.
///
/// Holds the current record and applies the [`TokenState`] transitions as
/// exchanges and refreshes complete. Keeps nothing beyond memory; the host
/// persists records itself.
#[derive(Debug, Clone, Default)]
pub struct TokenLine {
    state: TokenState,
    record: Option<TokenRecord>,
}

impl TokenLine {
    /// Create a line with no token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a line from a record the host previously stored.
    #[must_use]
    pub const fn from_record(record: TokenRecord) -> Self {
        Self {
            state: TokenState::Active,
            record: Some(record),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TokenState {
        self.state
    }

    /// Current record, present only while the line is active.
    #[must_use]
    pub const fn record(&self) -> Option<&TokenRecord> {
        self.record.as_ref()
    }

    /// Exchanges a fresh authorization code and starts the line over.
    ///
    /// # Errors
    /// Propagates every error from [`OAuthClient::exchange_code`]. The line is
    /// left unchanged on failure.
    pub async fn exchange(
        &mut self,
        client: &OAuthClient,
        auth_code: &str,
    ) -> OAuthResult<&TokenRecord> {
        let record = client.exchange_code(auth_code).await?;
        self.state = self.state.on_exchanged();
        Ok(self.record.insert(record))
    }

    /// Refreshes the current record, replacing it with the new one.
    ///
    /// # Errors
    /// Returns `OAuthError::TokenRefresh` if the line is not active. A
    /// provider rejection moves the line to `Invalid` and drops the record;
    /// other failures leave it active.
    pub async fn refresh(&mut self, client: &OAuthClient) -> OAuthResult<&TokenRecord> {
        let Some(current) = self.record.as_ref().filter(|_| self.state.is_active()) else {
            return Err(OAuthError::TokenRefresh(ProviderRejection::local(format!(
                "token line is not active: {}",
                self.state.message()
            ))));
        };

        match client.refresh(current).await {
            Ok(record) => {
                self.state = self.state.on_refresh(Ok(()));
                Ok(self.record.insert(record))
            }
            Err(error) => {
                self.state = self.state.on_refresh(Err(&error));
                if self.state == TokenState::Invalid {
                    tracing::info!("token line invalidated, new authorization required");
                    self.record = None;
                }
                Err(error)
            }
        }
    }

    /// Abandons the line so a new authorization can begin.
    pub fn restart(&mut self) {
        self.state = self.state.restart();
        self.record = None;
    }
}
