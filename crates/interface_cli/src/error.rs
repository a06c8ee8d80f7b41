//! CLI error handling

use core_kernel::CoreError;
use domain_convert::RateTypeParseError;
use domain_currency::CurrencyError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    RateType(#[from] RateTypeParseError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for malformed input, 1 for data that is absent
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(err) if err.is_argument_error() => 2,
            CliError::RateType(_) => 2,
            _ => 1,
        }
    }
}
