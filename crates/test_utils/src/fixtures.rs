//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. [`TestCurrencyProvider`] knows exactly
//! one code (`test1`) and one region (`TEST1L`), so lookups of anything else
//! exercise the not-found paths.

use core_kernel::{CurrencyContextBuilder, CurrencyUnit, Locale};
use domain_convert::{ProviderContext, RateType};
use domain_currency::{currencies, CurrencyProvider, CurrencyRegistry};

/// Provider backing the registry scenarios
#[derive(Debug, Clone, Copy, Default)]
pub struct TestCurrencyProvider;

impl TestCurrencyProvider {
    pub const NAME: &'static str = "test";
    pub const CODE: &'static str = "test1";
    pub const REGION: &'static str = "TEST1L";
    pub const NUMERIC_CODE: u32 = 1;
    pub const FRACTION_DIGITS: u32 = 2;

    fn unit(code: &str) -> Option<CurrencyUnit> {
        let context = CurrencyContextBuilder::new(Self::NAME).build();
        CurrencyUnit::new(code, Some(Self::NUMERIC_CODE), Self::FRACTION_DIGITS, context).ok()
    }
}

impl CurrencyProvider for TestCurrencyProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn currency(&self, code: &str) -> Option<CurrencyUnit> {
        if code == Self::CODE {
            Self::unit(code)
        } else {
            None
        }
    }

    fn currencies_for_locale(&self, locale: &Locale) -> Vec<CurrencyUnit> {
        if locale.country() == Self::REGION {
            Self::unit(Self::REGION).into_iter().collect()
        } else {
            Vec::new()
        }
    }

    fn currencies(&self) -> Vec<CurrencyUnit> {
        Self::unit(Self::CODE).into_iter().collect()
    }
}

/// Fixture for registries
pub struct RegistryFixtures;

impl RegistryFixtures {
    /// A registry holding only the test provider
    pub fn test_only() -> CurrencyRegistry {
        let registry = CurrencyRegistry::new();
        registry.register(TestCurrencyProvider);
        registry
    }

    /// Registers the test provider with the process-wide registry
    ///
    /// Safe to call from every test; repeated registrations are ignored.
    pub fn install_global() {
        currencies::register_provider(TestCurrencyProvider);
    }
}

/// Fixture for locales
pub struct LocaleFixtures;

impl LocaleFixtures {
    /// The region served by the test provider
    pub fn test_region() -> Locale {
        Locale::for_country(TestCurrencyProvider::REGION)
    }

    pub fn china() -> Locale {
        Locale::new("zh", "CN")
    }

    /// A region no provider serves
    pub fn unknown_region() -> Locale {
        Locale::for_country("sdsdsd")
    }

    pub fn switzerland() -> Locale {
        Locale::new("de", "CH")
    }
}

/// Fixture for provider contexts
pub struct ProviderContextFixtures;

impl ProviderContextFixtures {
    /// Deferred and historic rates, as published by a central bank
    pub fn ecb() -> ProviderContext {
        ProviderContext::of("ECB", RateType::Deferred, [RateType::Historic])
    }

    /// A single realtime rate type
    pub fn realtime() -> ProviderContext {
        ProviderContext::of("REALTIME-FX", RateType::Realtime, [])
    }
}
