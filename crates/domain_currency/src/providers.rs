//! Built-in currency providers
//!
//! - [`InMemoryCurrencyProvider`]: currencies registered programmatically
//! - [`IsoCurrencyProvider`]: a fixed set of ISO 4217 currencies

use std::collections::HashMap;

use core_kernel::{CoreError, CurrencyContextBuilder, CurrencyUnit, Locale};

use crate::ports::CurrencyProvider;

/// Provider serving a fixed set of currencies held in memory
///
/// Currencies are matched by exact code and, for locale lookups, by the
/// locale's country. Enumeration and locale results keep insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryCurrencyProvider {
    name: String,
    units: Vec<CurrencyUnit>,
    by_code: HashMap<String, usize>,
    by_country: HashMap<String, Vec<usize>>,
}

impl InMemoryCurrencyProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
            by_code: HashMap::new(),
            by_country: HashMap::new(),
        }
    }

    /// Adds a currency used in the given countries
    ///
    /// Adding a code twice replaces the earlier entry in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the code is blank.
    pub fn with_currency(
        mut self,
        code: &str,
        numeric_code: Option<u32>,
        default_fraction_digits: u32,
        countries: &[&str],
    ) -> Result<Self, CoreError> {
        self.add(code, numeric_code, default_fraction_digits, countries)?;
        Ok(self)
    }

    fn add(
        &mut self,
        code: &str,
        numeric_code: Option<u32>,
        default_fraction_digits: u32,
        countries: &[&str],
    ) -> Result<(), CoreError> {
        let context = CurrencyContextBuilder::new(self.name.clone()).build();
        let unit = CurrencyUnit::new(code, numeric_code, default_fraction_digits, context)?;

        let index = match self.by_code.get(code) {
            Some(&index) => {
                self.units[index] = unit;
                for indices in self.by_country.values_mut() {
                    indices.retain(|&i| i != index);
                }
                index
            }
            None => {
                self.units.push(unit);
                let index = self.units.len() - 1;
                self.by_code.insert(code.to_string(), index);
                index
            }
        };

        for country in countries {
            let country = Locale::for_country(country).country().to_string();
            let indices = self.by_country.entry(country).or_default();
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl CurrencyProvider for InMemoryCurrencyProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn currency(&self, code: &str) -> Option<CurrencyUnit> {
        self.by_code.get(code).map(|&index| self.units[index].clone())
    }

    fn currencies_for_locale(&self, locale: &Locale) -> Vec<CurrencyUnit> {
        self.by_country
            .get(locale.country())
            .map(|indices| indices.iter().map(|&i| self.units[i].clone()).collect())
            .unwrap_or_default()
    }

    fn currencies(&self) -> Vec<CurrencyUnit> {
        self.units.clone()
    }
}

/// Code, numeric code, fraction digits and countries of the ISO currencies served
const ISO_CURRENCIES: &[(&str, u32, u32, &[&str])] = &[
    ("USD", 840, 2, &["US", "EC", "SV", "PR"]),
    ("EUR", 978, 2, &["AT", "BE", "DE", "ES", "FI", "FR", "IE", "IT", "LU", "NL", "PT"]),
    ("GBP", 826, 2, &["GB"]),
    ("JPY", 392, 0, &["JP"]),
    ("CHF", 756, 2, &["CH", "LI"]),
    ("INR", 356, 2, &["IN"]),
    ("AUD", 36, 2, &["AU"]),
    ("CAD", 124, 2, &["CA"]),
    ("SGD", 702, 2, &["SG"]),
    ("HKD", 344, 2, &["HK"]),
];

/// Provider for the ISO 4217 currencies supported out of the box
#[derive(Debug, Clone)]
pub struct IsoCurrencyProvider {
    inner: InMemoryCurrencyProvider,
}

impl IsoCurrencyProvider {
    pub const NAME: &'static str = "iso";

    pub fn new() -> Self {
        let mut inner = InMemoryCurrencyProvider::new(Self::NAME);
        for (code, numeric, digits, countries) in ISO_CURRENCIES {
            if let Err(err) = inner.add(code, Some(*numeric), *digits, countries) {
                tracing::warn!(code, error = %err, "Skipping ISO currency");
            }
        }
        Self { inner }
    }
}

impl Default for IsoCurrencyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyProvider for IsoCurrencyProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn currency(&self, code: &str) -> Option<CurrencyUnit> {
        self.inner.currency(code)
    }

    fn currencies_for_locale(&self, locale: &Locale) -> Vec<CurrencyUnit> {
        self.inner.currencies_for_locale(locale)
    }

    fn currencies(&self) -> Vec<CurrencyUnit> {
        self.inner.currencies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_provider_serves_all_codes() {
        let provider = IsoCurrencyProvider::new();
        assert_eq!(provider.currencies().len(), ISO_CURRENCIES.len());

        let jpy = provider.currency("JPY").unwrap();
        assert_eq!(jpy.numeric_code(), Some(392));
        assert_eq!(jpy.default_fraction_digits(), 0);
        assert_eq!(jpy.context().provider_name(), "iso");
    }

    #[test]
    fn test_iso_provider_locale_lookup() {
        let provider = IsoCurrencyProvider::new();

        let swiss = provider.currencies_for_locale(&Locale::new("de", "CH"));
        assert_eq!(swiss.len(), 1);
        assert_eq!(swiss[0].code(), "CHF");

        assert!(provider.currencies_for_locale(&Locale::new("zh", "CN")).is_empty());
        assert!(provider.currencies_for_locale(&Locale::new("en", "")).is_empty());
    }

    #[test]
    fn test_code_lookup_is_exact() {
        let provider = IsoCurrencyProvider::new();
        assert!(provider.currency("usd").is_none());
        assert!(provider.currency("USD").is_some());
    }

    #[test]
    fn test_in_memory_replacement_keeps_position() {
        let provider = InMemoryCurrencyProvider::new("memory")
            .with_currency("AAA", None, 2, &["AA"])
            .unwrap()
            .with_currency("BBB", None, 2, &["AA"])
            .unwrap()
            .with_currency("AAA", Some(1), 3, &["ZZ"])
            .unwrap();

        let codes: Vec<_> = provider.currencies().iter().map(|c| c.code().to_string()).collect();
        assert_eq!(codes, vec!["AAA", "BBB"]);
        assert_eq!(provider.currency("AAA").unwrap().default_fraction_digits(), 3);

        let aa: Vec<_> = provider
            .currencies_for_locale(&Locale::for_country("AA"))
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(aa, vec!["BBB"]);
        assert_eq!(provider.currencies_for_locale(&Locale::for_country("zz")).len(), 1);
    }

    #[test]
    fn test_in_memory_country_listed_twice_yields_one_unit() {
        let provider = InMemoryCurrencyProvider::new("memory")
            .with_currency("AAA", None, 2, &["AA", "aa", "AA"])
            .unwrap()
            .with_currency("AAA", Some(1), 2, &["AA"])
            .unwrap();

        let units = provider.currencies_for_locale(&Locale::for_country("AA"));
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].numeric_code(), Some(1));
    }

    #[test]
    fn test_in_memory_rejects_blank_code() {
        let result = InMemoryCurrencyProvider::new("memory").with_currency("", None, 2, &[]);
        assert!(matches!(result, Err(CoreError::InvalidArgument(_))));
    }
}
