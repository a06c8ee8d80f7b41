//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::collections::BTreeSet;

use core_kernel::CurrencyUnit;
use domain_convert::{ProviderContext, RateType};

/// Asserts the three reference-data fields of a currency unit
///
/// # Panics
///
/// Panics if any field differs from the expected value
pub fn assert_currency(unit: &CurrencyUnit, code: &str, numeric_code: u32, fraction_digits: u32) {
    assert_eq!(unit.code(), code, "Currency code mismatch for {}", unit);
    assert_eq!(
        unit.numeric_code(),
        Some(numeric_code),
        "Numeric code mismatch for {}",
        unit
    );
    assert_eq!(
        unit.default_fraction_digits(),
        fraction_digits,
        "Fraction digits mismatch for {}",
        unit
    );
}

/// Asserts that a currency unit was supplied by the named provider
pub fn assert_supplied_by(unit: &CurrencyUnit, provider: &str) {
    assert_eq!(
        unit.context().provider_name(),
        provider,
        "Expected {} to come from provider {}",
        unit,
        provider
    );
}

/// Asserts the provider name and exact rate type set of a provider context
pub fn assert_provider_context(context: &ProviderContext, provider: &str, rate_types: &[RateType]) {
    assert_eq!(context.provider_name(), provider, "Provider mismatch in {}", context);
    let expected: BTreeSet<RateType> = rate_types.iter().copied().collect();
    assert_eq!(context.rate_types(), expected, "Rate types mismatch in {}", context);
}
