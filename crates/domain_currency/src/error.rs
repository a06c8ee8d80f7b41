//! Currency domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the currency domain
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// No registered provider knows the requested code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No built-in provider has the configured name
    #[error("Unknown currency provider: {0}")]
    UnknownProvider(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CurrencyError {
    /// Returns the offending code if this is an unknown currency error
    pub fn unknown_code(&self) -> Option<&str> {
        match self {
            CurrencyError::UnknownCurrency(code) => Some(code.as_str()),
            _ => None,
        }
    }
}
