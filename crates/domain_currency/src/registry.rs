//! Currency Registry
//!
//! [`CurrencyRegistry`] puts an ordered chain of [`CurrencyProvider`]s behind
//! two query shapes:
//!
//! - **by code**: the first provider (in registration order) that knows the
//!   code wins; if none does, the query fails with
//!   [`CurrencyError::UnknownCurrency`]
//! - **by locale**: the results of every provider are concatenated in
//!   provider order; no match is an empty result, not an error
//!
//! # Concurrency
//!
//! The provider list is an immutable snapshot behind an [`ArcSwap`].
//! Registration copies the list, appends and swaps it in (read-copy-update),
//! so a query always iterates one consistent snapshot even while providers
//! are being registered on other threads.
//!
//! # Usage
//!
//! ```rust,ignore
//! let registry = CurrencyRegistry::new();
//! registry.register(IsoCurrencyProvider::new());
//!
//! let chf = registry.resolve_by_code("CHF")?;
//! let swiss = registry.resolve_by_locale(&Locale::new("de", "CH"));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use core_kernel::{CurrencyUnit, Locale};

use crate::config::RegistryConfig;
use crate::error::CurrencyError;
use crate::ports::CurrencyProvider;
use crate::providers::IsoCurrencyProvider;

type ProviderChain = Vec<Arc<dyn CurrencyProvider>>;

/// Ordered chain of currency providers
pub struct CurrencyRegistry {
    providers: ArcSwap<ProviderChain>,
}

impl CurrencyRegistry {
    /// Creates a registry without providers
    pub fn new() -> Self {
        Self {
            providers: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Creates a registry with the built-in providers named in the configuration
    ///
    /// # Errors
    ///
    /// Returns `UnknownProvider` if a configured name has no built-in provider.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, CurrencyError> {
        let registry = Self::new();
        for name in &config.providers {
            match name.trim() {
                "" => continue,
                IsoCurrencyProvider::NAME => {
                    registry.register(IsoCurrencyProvider::new());
                }
                other => return Err(CurrencyError::UnknownProvider(other.to_string())),
            }
        }
        Ok(registry)
    }

    /// Appends a provider to the chain
    ///
    /// Returns `false`, leaving the chain unchanged, if a provider with the
    /// same name is already registered.
    pub fn register<P: CurrencyProvider>(&self, provider: P) -> bool {
        self.register_arc(Arc::new(provider))
    }

    /// Appends a shared provider to the chain
    pub fn register_arc(&self, provider: Arc<dyn CurrencyProvider>) -> bool {
        let mut added = false;
        self.providers.rcu(|current| {
            added = !current.iter().any(|p| p.name() == provider.name());
            let mut next: ProviderChain = (**current).clone();
            if added {
                next.push(provider.clone());
            }
            next
        });

        if added {
            tracing::info!(provider = provider.name(), "Registered currency provider");
        } else {
            tracing::warn!(
                provider = provider.name(),
                "Currency provider already registered, ignoring"
            );
        }
        added
    }

    /// Returns the names of the registered providers in chain order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .load()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.load().is_empty()
    }

    /// Resolves a currency by code; the first provider that knows it wins
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` carrying the code if no provider knows it.
    pub fn resolve_by_code(&self, code: &str) -> Result<CurrencyUnit, CurrencyError> {
        let providers = self.providers.load_full();
        for provider in providers.iter() {
            if let Some(unit) = provider.currency(code) {
                tracing::debug!(code, provider = provider.name(), "Resolved currency");
                return Ok(unit);
            }
        }

        tracing::debug!(code, providers = providers.len(), "No provider knows currency");
        Err(CurrencyError::UnknownCurrency(code.to_string()))
    }

    /// Returns true if [`resolve_by_code`](Self::resolve_by_code) would succeed
    pub fn is_available(&self, code: &str) -> bool {
        self.resolve_by_code(code).is_ok()
    }

    /// Returns the currencies of every provider for the locale, in provider order
    pub fn resolve_by_locale(&self, locale: &Locale) -> Vec<CurrencyUnit> {
        let providers = self.providers.load_full();
        let units: Vec<CurrencyUnit> = providers
            .iter()
            .flat_map(|provider| provider.currencies_for_locale(locale))
            .collect();

        if units.is_empty() {
            tracing::debug!(%locale, "No currencies for locale");
        }
        units
    }

    /// Returns true if [`resolve_by_locale`](Self::resolve_by_locale) is non-empty
    pub fn is_available_for_locale(&self, locale: &Locale) -> bool {
        !self.resolve_by_locale(locale).is_empty()
    }

    /// Returns every currency the providers can enumerate
    ///
    /// A code offered by several providers is listed once, as supplied by the
    /// first of them.
    pub fn currencies(&self) -> Vec<CurrencyUnit> {
        let providers = self.providers.load_full();
        let mut seen = HashSet::new();
        providers
            .iter()
            .flat_map(|provider| provider.currencies())
            .filter(|unit| seen.insert(unit.code().to_string()))
            .collect()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CurrencyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::InMemoryCurrencyProvider;

    fn memory(name: &str, code: &str, countries: &[&str]) -> InMemoryCurrencyProvider {
        InMemoryCurrencyProvider::new(name)
            .with_currency(code, None, 2, countries)
            .unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = CurrencyRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.resolve_by_code("USD"),
            Err(CurrencyError::UnknownCurrency(code)) if code == "USD"
        ));
        assert!(registry.resolve_by_locale(&Locale::new("en", "US")).is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let registry = CurrencyRegistry::new();
        registry.register(memory("first", "XXX", &[]));
        registry.register(memory("second", "XXX", &[]));

        let unit = registry.resolve_by_code("XXX").unwrap();
        assert_eq!(unit.context().provider_name(), "first");
    }

    #[test]
    fn test_locale_results_follow_provider_order() {
        let registry = CurrencyRegistry::new();
        registry.register(memory("first", "AAA", &["QQ"]));
        registry.register(memory("second", "BBB", &["QQ"]));

        let codes: Vec<_> = registry
            .resolve_by_locale(&Locale::for_country("QQ"))
            .iter()
            .map(|u| u.code().to_string())
            .collect();
        assert_eq!(codes, vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_duplicate_name_is_ignored() {
        let registry = CurrencyRegistry::new();
        assert!(registry.register(memory("memory", "AAA", &[])));
        assert!(!registry.register(memory("memory", "BBB", &[])));

        assert_eq!(registry.provider_names(), vec!["memory"]);
        assert!(!registry.is_available("BBB"));
    }

    #[test]
    fn test_currencies_deduplicates_by_code() {
        let registry = CurrencyRegistry::new();
        registry.register(memory("first", "AAA", &[]));
        registry.register(memory("second", "AAA", &[]));
        registry.register(memory("third", "CCC", &[]));

        let units = registry.currencies();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].context().provider_name(), "first");
    }

    #[test]
    fn test_from_config_rejects_unknown_provider() {
        let config = RegistryConfig {
            providers: vec!["iso".to_string(), "nope".to_string()],
        };
        assert!(matches!(
            CurrencyRegistry::from_config(&config),
            Err(CurrencyError::UnknownProvider(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_from_default_config_installs_iso() {
        let registry = CurrencyRegistry::from_config(&RegistryConfig::default()).unwrap();
        assert_eq!(registry.provider_names(), vec![IsoCurrencyProvider::NAME]);
        assert!(registry.is_available("EUR"));
    }
}
