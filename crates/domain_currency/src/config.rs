//! Registry configuration

use serde::Deserialize;

use crate::providers::IsoCurrencyProvider;

/// Selects the built-in providers installed in the process-wide registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// Provider names in chain order
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
}

fn default_providers() -> Vec<String> {
    vec![IsoCurrencyProvider::NAME.to_string()]
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from `MONEY_*` environment variables
    ///
    /// `MONEY_PROVIDERS` takes a comma-separated list, e.g. `MONEY_PROVIDERS=iso`.
    /// An empty value installs no built-in provider.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MONEY")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("providers"),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_iso_only() {
        assert_eq!(RegistryConfig::default().providers, vec!["iso"]);
    }
}
