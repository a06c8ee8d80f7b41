//! Provider contexts
//!
//! A [`ProviderContext`] describes an exchange rate provider: its name and the
//! non-empty set of [`RateType`]s it supplies. Contexts are immutable and are
//! produced by a [`ProviderContextBuilder`], which enforces the invariants as
//! each value is set:
//!
//! - the provider name is always present
//! - at least one rate type is always present
//!
//! # Example
//!
//! ```rust,ignore
//! let context = ProviderContextBuilder::new("ECB", RateType::Deferred, [RateType::Historic])
//!     .build();
//!
//! // Derive a modified copy; `context` is not affected
//! let realtime = context
//!     .to_builder()
//!     .set_rate_types([RateType::Realtime])?
//!     .build();
//! ```

use std::collections::BTreeSet;
use std::fmt;

use core_kernel::{AttributeContainer, AttributeType, Context, ContextBuilder, CoreError, Key};

use crate::rate_type::RateType;

/// Immutable description of an exchange rate provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderContext {
    attributes: AttributeContainer,
}

impl ProviderContext {
    /// Key of the provider name
    pub const PROVIDER: Key<String> = Key::new("provider");

    /// Key of the supported rate types
    pub const RATE_TYPES: Key<RateType> = Key::new("rateTypes");

    /// Shorthand for `ProviderContextBuilder::new(..).build()`
    pub fn of(
        provider: impl Into<String>,
        rate_type: RateType,
        rate_types: impl IntoIterator<Item = RateType>,
    ) -> Self {
        ProviderContextBuilder::new(provider, rate_type, rate_types).build()
    }

    pub fn provider_name(&self) -> &str {
        self.attributes.text(&Self::PROVIDER).unwrap_or_default()
    }

    /// Returns the supported rate types
    pub fn rate_types(&self) -> BTreeSet<RateType> {
        self.attributes
            .get_set(&Self::RATE_TYPES)
            .unwrap_or_default()
    }

    /// Returns one of the supported rate types, the lowest in declaration order
    pub fn rate_type(&self) -> Option<RateType> {
        self.rate_types().into_iter().next()
    }

    pub fn supports(&self, rate_type: RateType) -> bool {
        self.rate_types().contains(&rate_type)
    }

    /// Returns a builder seeded with this context
    pub fn to_builder(&self) -> ProviderContextBuilder {
        ProviderContextBuilder::from_context(self)
    }
}

impl Context for ProviderContext {
    fn attributes(&self) -> &AttributeContainer {
        &self.attributes
    }
}

impl fmt::Display for ProviderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderContext[{}]", self.attributes)
    }
}

/// Builder for [`ProviderContext`]
///
/// Every constructor leaves the builder with a provider name and at least one
/// rate type, and every setter keeps it that way, so [`build`](Self::build)
/// cannot fail. Not thread-safe.
#[derive(Debug, Clone)]
pub struct ProviderContextBuilder {
    inner: ContextBuilder,
}

impl ProviderContextBuilder {
    /// Creates a builder from a provider name and one or more rate types
    ///
    /// Infallible: both arguments are required by type. Inputs that may be
    /// missing go through [`try_new`](Self::try_new).
    pub fn new(
        provider: impl Into<String>,
        rate_type: RateType,
        rate_types: impl IntoIterator<Item = RateType>,
    ) -> Self {
        let mut inner = ContextBuilder::new();
        inner
            .set(&ProviderContext::PROVIDER, provider.into())
            .set_set(
                &ProviderContext::RATE_TYPES,
                std::iter::once(rate_type).chain(rate_types),
            );
        Self { inner }
    }

    /// Creates a builder from a provider name and a collection of rate types
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the collection is empty.
    pub fn with_rate_types<I>(provider: impl Into<String>, rate_types: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = RateType>,
    {
        let rate_types = non_empty(rate_types)?;
        let mut inner = ContextBuilder::new();
        inner
            .set(&ProviderContext::PROVIDER, provider.into())
            .set_set(&ProviderContext::RATE_TYPES, rate_types);
        Ok(Self { inner })
    }

    /// Creates a builder from values that may be missing, e.g. deserialized input
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` if either value is `None` and `InvalidArgument`
    /// if the rate type collection is empty.
    pub fn try_new<I>(provider: Option<String>, rate_types: Option<I>) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = RateType>,
    {
        let rate_types =
            rate_types.ok_or_else(|| CoreError::null_argument(ProviderContext::RATE_TYPES.name()))?;
        let rate_types = non_empty(rate_types)?;
        let provider =
            provider.ok_or_else(|| CoreError::null_argument(ProviderContext::PROVIDER.name()))?;
        Self::with_rate_types(provider, rate_types)
    }

    /// Creates a builder seeded with a copy of an existing context
    pub fn from_context(context: &ProviderContext) -> Self {
        let mut inner = ContextBuilder::from_context(context);
        inner.set_set(&ProviderContext::RATE_TYPES, context.rate_types());
        Self { inner }
    }

    /// Sets the provider name
    pub fn set_provider_name(&mut self, provider: impl Into<String>) -> &mut Self {
        self.inner.set(&ProviderContext::PROVIDER, provider.into());
        self
    }

    /// Sets the provider name from a value that may be missing
    pub fn try_set_provider_name(&mut self, provider: Option<String>) -> Result<&mut Self, CoreError> {
        self.inner.try_set(&ProviderContext::PROVIDER, provider)?;
        Ok(self)
    }

    /// Replaces the rate types
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no rate type is given; the builder is left
    /// unchanged in that case.
    pub fn set_rate_types<I>(&mut self, rate_types: I) -> Result<&mut Self, CoreError>
    where
        I: IntoIterator<Item = RateType>,
    {
        let rate_types = non_empty(rate_types)?;
        self.inner.set_set(&ProviderContext::RATE_TYPES, rate_types);
        Ok(self)
    }

    /// Replaces the rate types from a collection that may be missing
    pub fn try_set_rate_types<I>(&mut self, rate_types: Option<I>) -> Result<&mut Self, CoreError>
    where
        I: IntoIterator<Item = RateType>,
    {
        let rate_types =
            rate_types.ok_or_else(|| CoreError::null_argument(ProviderContext::RATE_TYPES.name()))?;
        self.set_rate_types(rate_types)
    }

    /// Stores an additional provider-specific attribute
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `key` addresses the rate types, which
    /// must go through [`set_rate_types`](Self::set_rate_types).
    pub fn set_attribute<T: AttributeType>(&mut self, key: &Key<T>, value: T) -> Result<&mut Self, CoreError> {
        if key.attribute_key() == ProviderContext::RATE_TYPES.attribute_key() {
            return Err(CoreError::invalid_argument(
                "rate types must be set with set_rate_types",
            ));
        }
        self.inner.set(key, value);
        Ok(self)
    }

    /// Creates a new context from the current state
    pub fn build(&self) -> ProviderContext {
        let attributes = self.inner.snapshot();
        tracing::trace!(
            provider = attributes.text(&ProviderContext::PROVIDER).unwrap_or_default(),
            entries = attributes.len(),
            "Built provider context"
        );
        ProviderContext { attributes }
    }
}

fn non_empty<I>(rate_types: I) -> Result<BTreeSet<RateType>, CoreError>
where
    I: IntoIterator<Item = RateType>,
{
    let rate_types: BTreeSet<RateType> = rate_types.into_iter().collect();
    if rate_types.is_empty() {
        return Err(CoreError::invalid_argument("At least one RateType is required."));
    }
    Ok(rate_types)
}
