//! Process-wide currency registry
//!
//! The registry is created on first use from [`RegistryConfig::from_env`].
//! If the environment cannot be read or names an unknown provider, a warning
//! is logged and the default configuration is used instead.
//!
//! Additional providers are installed with [`register_provider`], normally
//! during application start-up.
//!
//! ```rust,ignore
//! currencies::register_provider(InMemoryCurrencyProvider::new("house")
//!     .with_currency("PTS", None, 0, &[])?);
//!
//! let points = currencies::get_currency("PTS")?;
//! ```

use once_cell::sync::Lazy;

use core_kernel::{CurrencyUnit, Locale};

use crate::config::RegistryConfig;
use crate::error::CurrencyError;
use crate::ports::CurrencyProvider;
use crate::registry::CurrencyRegistry;

static REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(init_registry);

fn init_registry() -> CurrencyRegistry {
    let config = RegistryConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Invalid currency registry configuration, using defaults");
        RegistryConfig::default()
    });

    CurrencyRegistry::from_config(&config).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Falling back to default currency providers");
        CurrencyRegistry::from_config(&RegistryConfig::default()).unwrap_or_default()
    })
}

/// Returns the process-wide registry
pub fn registry() -> &'static CurrencyRegistry {
    &REGISTRY
}

/// Appends a provider to the process-wide chain
///
/// Returns `false` if a provider with the same name is already registered.
pub fn register_provider<P: CurrencyProvider>(provider: P) -> bool {
    REGISTRY.register(provider)
}

/// Resolves a currency by code
///
/// # Errors
///
/// Returns `UnknownCurrency` if no registered provider knows the code.
pub fn get_currency(code: &str) -> Result<CurrencyUnit, CurrencyError> {
    REGISTRY.resolve_by_code(code)
}

pub fn is_currency_available(code: &str) -> bool {
    REGISTRY.is_available(code)
}

/// Returns the currencies used in the locale; empty if none is known
pub fn get_currencies(locale: &Locale) -> Vec<CurrencyUnit> {
    REGISTRY.resolve_by_locale(locale)
}

pub fn is_currency_available_for_locale(locale: &Locale) -> bool {
    REGISTRY.is_available_for_locale(locale)
}
