//! Process environment configuration.

use smartcar_application::ConfigProvider;

/// Reads configuration values from environment variables.
///
/// Values are read on every lookup; the OAuth client caches the resolved
/// identity itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    /// Creates a provider over the current process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
