//! Configuration provider port
//!
//! Resolves named configuration values such as the client id.

use smartcar_domain::ConfigurationError;

/// Source of named configuration values.
pub trait ConfigProvider: Send + Sync {
    /// Looks up a raw value by name.
    fn lookup(&self, name: &str) -> Option<String>;

    /// Returns the named value.
    ///
    /// # Errors
    /// Returns `ConfigurationError::Missing` if the value is unset or empty.
    fn get(&self, name: &str) -> Result<String, ConfigurationError> {
        self.lookup(name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigurationError::missing(name))
    }
}
