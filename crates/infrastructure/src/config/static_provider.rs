//! In-memory configuration.

use std::collections::BTreeMap;

use smartcar_application::ConfigProvider;

/// Serves configuration from a fixed map.
///
/// For hosts with their own configuration system, and for tests.
#[derive(Clone, Default)]
pub struct StaticConfigProvider {
    values: BTreeMap<String, String>,
}

impl StaticConfigProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticConfigProvider
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// Values are credentials; only the names are printed.
impl std::fmt::Debug for StaticConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticConfigProvider")
            .field("names", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
