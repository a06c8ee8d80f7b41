//! Tests for the generic context builder
//!
//! Covers copy-and-override construction, snapshot independence and the
//! typed accessors exposed through the `Context` trait.

use std::collections::BTreeSet;

use core_kernel::{AttributeContainer, Context, ContextBuilder, Key};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const NAME: Key<String> = Key::new("name");
const DIGITS: Key<u32> = Key::new("digits");
const ENABLED: Key<bool> = Key::new("enabled");
const FACTOR: Key<Decimal> = Key::new("factor");
const CODES: Key<String> = Key::new("codes");

#[derive(Debug, Clone, PartialEq, Eq)]
struct SampleContext {
    attributes: AttributeContainer,
}

impl Context for SampleContext {
    fn attributes(&self) -> &AttributeContainer {
        &self.attributes
    }
}

fn build(builder: &ContextBuilder) -> SampleContext {
    SampleContext {
        attributes: builder.snapshot(),
    }
}

mod accessors {
    use super::*;

    #[test]
    fn test_typed_reads_through_context() {
        let mut builder = ContextBuilder::new();
        builder
            .set(&NAME, "sample".to_string())
            .set(&DIGITS, 2)
            .set(&ENABLED, true)
            .set(&FACTOR, dec!(1.25))
            .set_set(&CODES, vec!["CHF".to_string(), "EUR".to_string()]);
        let context = build(&builder);

        assert_eq!(context.text(&NAME), Some("sample"));
        assert_eq!(context.get(&DIGITS), Some(2));
        assert_eq!(context.get(&ENABLED), Some(true));
        assert_eq!(context.get(&FACTOR), Some(dec!(1.25)));
        assert_eq!(
            context.get_set(&CODES),
            Some(BTreeSet::from(["CHF".to_string(), "EUR".to_string()]))
        );
    }

    #[test]
    fn test_missing_attribute_reads_none() {
        let context = build(&ContextBuilder::new());
        assert_eq!(context.get(&DIGITS), None);
        assert_eq!(context.text(&NAME), None);
    }
}

mod copy_and_override {
    use super::*;

    #[test]
    fn test_from_context_then_override_leaves_source_untouched() {
        let mut builder = ContextBuilder::new();
        builder
            .set(&NAME, "source".to_string())
            .set_set(&CODES, vec!["CHF".to_string()]);
        let source = build(&builder);

        let mut derived_builder = ContextBuilder::from_context(&source);
        derived_builder
            .set(&NAME, "derived".to_string())
            .set_set(&CODES, vec!["USD".to_string()])
            .remove(&ENABLED);
        let derived = build(&derived_builder);

        assert_eq!(source.text(&NAME), Some("source"));
        assert_eq!(source.get_set(&CODES), Some(BTreeSet::from(["CHF".to_string()])));
        assert_eq!(derived.text(&NAME), Some("derived"));
        assert_eq!(derived.get_set(&CODES), Some(BTreeSet::from(["USD".to_string()])));
    }

    #[test]
    fn test_builder_reusable_after_build() {
        let mut builder = ContextBuilder::new();
        builder.set(&DIGITS, 2);
        let first = build(&builder);

        builder.set(&DIGITS, 3);
        let second = build(&builder);

        assert_eq!(first.get(&DIGITS), Some(2));
        assert_eq!(second.get(&DIGITS), Some(3));
    }
}

proptest! {
    #[test]
    fn round_trip_through_builder_preserves_attributes(
        name in "[a-zA-Z]{1,12}",
        digits in 0u32..10,
        codes in proptest::collection::vec("[A-Z]{3}", 0..8)
    ) {
        let mut builder = ContextBuilder::new();
        builder.set(&NAME, name).set(&DIGITS, digits).set_set(&CODES, codes);
        let original = build(&builder);

        let copy = build(&ContextBuilder::from_context(&original));
        prop_assert_eq!(copy, original);
    }

    #[test]
    fn repeated_builds_are_equal(
        name in "[a-z]{1,8}",
        codes in proptest::collection::vec("[A-Z]{3}", 1..6)
    ) {
        let mut builder = ContextBuilder::new();
        builder.set(&NAME, name).set_set(&CODES, codes.clone());

        let first = build(&builder);
        let second = build(&builder);
        prop_assert_eq!(&first, &second);

        let expected: BTreeSet<String> = codes.into_iter().collect();
        prop_assert_eq!(first.get_set(&CODES), Some(expected));
    }
}
