//! Currency units
//!
//! A [`CurrencyUnit`] is the reference-data record handed out by currency
//! providers: an alphanumeric code, an optional ISO 4217 numeric code and the
//! default number of fraction digits. Each unit carries a [`CurrencyContext`]
//! naming the provider that produced it.

use std::fmt;

use crate::attributes::{AttributeContainer, Key};
use crate::context::{Context, ContextBuilder};
use crate::error::CoreError;

/// Context attached to every currency unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyContext {
    attributes: AttributeContainer,
}

impl CurrencyContext {
    /// Name of the provider that supplied the currency
    pub const PROVIDER: Key<String> = Key::new("provider");

    pub fn provider_name(&self) -> &str {
        self.attributes.text(&Self::PROVIDER).unwrap_or_default()
    }

    /// Returns a builder seeded with this context
    pub fn to_builder(&self) -> CurrencyContextBuilder {
        CurrencyContextBuilder::from_context(self)
    }
}

impl Context for CurrencyContext {
    fn attributes(&self) -> &AttributeContainer {
        &self.attributes
    }
}

impl fmt::Display for CurrencyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyContext[{}]", self.attributes)
    }
}

/// Builder for [`CurrencyContext`]
#[derive(Debug, Clone)]
pub struct CurrencyContextBuilder {
    inner: ContextBuilder,
}

impl CurrencyContextBuilder {
    pub fn new(provider: impl Into<String>) -> Self {
        let mut inner = ContextBuilder::new();
        inner.set(&CurrencyContext::PROVIDER, provider.into());
        Self { inner }
    }

    pub fn from_context(context: &CurrencyContext) -> Self {
        Self {
            inner: ContextBuilder::from_context(context),
        }
    }

    pub fn set_provider_name(&mut self, provider: impl Into<String>) -> &mut Self {
        self.inner.set(&CurrencyContext::PROVIDER, provider.into());
        self
    }

    pub fn build(&self) -> CurrencyContext {
        CurrencyContext {
            attributes: self.inner.snapshot(),
        }
    }
}

/// A currency as supplied by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyUnit {
    code: String,
    numeric_code: Option<u32>,
    default_fraction_digits: u32,
    context: CurrencyContext,
}

impl CurrencyUnit {
    /// Creates a currency unit
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the code is blank.
    pub fn new(
        code: impl Into<String>,
        numeric_code: Option<u32>,
        default_fraction_digits: u32,
        context: CurrencyContext,
    ) -> Result<Self, CoreError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CoreError::invalid_argument("currency code must not be blank"));
        }
        Ok(Self {
            code,
            numeric_code,
            default_fraction_digits,
            context,
        })
    }

    /// Returns the currency code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the ISO 4217 numeric code, if the currency has one
    pub fn numeric_code(&self) -> Option<u32> {
        self.numeric_code
    }

    /// Returns the number of decimal places normally used with this currency
    pub fn default_fraction_digits(&self) -> u32 {
        self.default_fraction_digits
    }

    pub fn context(&self) -> &CurrencyContext {
        &self.context
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
