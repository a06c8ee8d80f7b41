//! Output representations

use serde::Serialize;

use core_kernel::CurrencyUnit;
use domain_convert::ProviderContext;

/// Currency as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyView {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_code: Option<u32>,
    pub default_fraction_digits: u32,
    pub provider: String,
}

impl From<&CurrencyUnit> for CurrencyView {
    fn from(unit: &CurrencyUnit) -> Self {
        Self {
            code: unit.code().to_string(),
            numeric_code: unit.numeric_code(),
            default_fraction_digits: unit.default_fraction_digits(),
            provider: unit.context().provider_name().to_string(),
        }
    }
}

/// Provider context as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderContextView {
    pub provider: String,
    pub rate_types: Vec<String>,
}

impl From<&ProviderContext> for ProviderContextView {
    fn from(context: &ProviderContext) -> Self {
        Self {
            provider: context.provider_name().to_string(),
            rate_types: context.rate_types().iter().map(|r| r.to_string()).collect(),
        }
    }
}
