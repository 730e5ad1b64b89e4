//! Clock port for token expiry

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Anchors relative `expires_in` values when a token record is built.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
