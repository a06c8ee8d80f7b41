//! CLI configuration

use serde::Deserialize;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `MONEY_CLI_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("MONEY_CLI").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
