//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use std::ops::Range;

use core_kernel::Locale;
use domain_convert::RateType;
use proptest::prelude::*;

/// Strategy for generating RateType values
pub fn rate_type_strategy() -> impl Strategy<Value = RateType> {
    prop_oneof![
        Just(RateType::Any),
        Just(RateType::Deferred),
        Just(RateType::Historic),
        Just(RateType::Other),
        Just(RateType::Realtime),
    ]
}

/// Strategy for generating rate type lists, duplicates included
pub fn rate_types_strategy(size: Range<usize>) -> impl Strategy<Value = Vec<RateType>> {
    proptest::collection::vec(rate_type_strategy(), size)
}

/// Strategy for generating provider names
pub fn provider_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9-]{0,15}"
}

/// Strategy for generating currency-code-like strings
pub fn currency_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("test1".to_string()),
        Just("USD".to_string()),
        Just("CHF".to_string()),
        "[A-Za-z0-9]{1,8}",
    ]
}

/// Strategy for generating locales with short random language and country parts
pub fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::for_country("TEST1L")),
        Just(Locale::new("de", "CH")),
        ("[a-z]{0,2}", "[A-Za-z0-9]{0,6}").prop_map(|(language, country)| Locale::new(language, country)),
    ]
}
