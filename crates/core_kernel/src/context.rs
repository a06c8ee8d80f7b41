//! Contexts and the generic context builder
//!
//! A context is an immutable bundle of typed attributes describing a
//! capability or configuration. Concrete contexts wrap an
//! [`AttributeContainer`] and expose strongly typed accessors on top of it;
//! they are produced only through a builder.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut builder = ContextBuilder::from_context(&existing);
//! builder.set(&PROVIDER, "ECB".to_string());
//! let attributes = builder.snapshot();
//! ```
//!
//! [`ContextBuilder`] is the shared engine: concrete builders embed one,
//! delegate the generic setters to it and add their own validation on top.

use std::collections::BTreeSet;

use crate::attributes::{AttributeContainer, AttributeType, AttributeValue, Key, Scalar};
use crate::error::CoreError;

/// An immutable bundle of typed attributes
pub trait Context {
    /// Returns the attributes backing this context
    fn attributes(&self) -> &AttributeContainer;

    /// Reads a single attribute
    fn get<T: AttributeType>(&self, key: &Key<T>) -> Option<T> {
        self.attributes().get(key)
    }

    /// Reads a set-valued attribute
    fn get_set<T: AttributeType + Ord>(&self, key: &Key<T>) -> Option<BTreeSet<T>> {
        self.attributes().get_set(key)
    }

    /// Borrows a text attribute
    fn text(&self, key: &Key<String>) -> Option<&str> {
        self.attributes().text(key)
    }
}

/// Mutable accumulator of attributes
///
/// Not synchronized: a builder belongs to the code assembling a context.
/// Setters return `&mut Self` for chaining and [`snapshot`](Self::snapshot)
/// copies the current state, so the builder stays usable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    attributes: AttributeContainer,
}

impl ContextBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded with a copy of the context's attributes
    pub fn from_context<C: Context>(context: &C) -> Self {
        let mut builder = Self::new();
        builder.import_context(context);
        builder
    }

    /// Copies every attribute of `context` into this builder
    ///
    /// Entries already present under the same key are overwritten; entries
    /// the context does not carry are kept.
    pub fn import_context<C: Context>(&mut self, context: &C) -> &mut Self {
        self.attributes.overlay(context.attributes());
        self
    }

    /// Stores a single value, replacing any previous value under the key
    pub fn set<T: AttributeType>(&mut self, key: &Key<T>, value: T) -> &mut Self {
        self.attributes
            .insert(key.attribute_key(), AttributeValue::Single(value.into_scalar()));
        self
    }

    /// Like [`set`](Self::set) for values that may be missing
    pub fn try_set<T: AttributeType>(
        &mut self,
        key: &Key<T>,
        value: Option<T>,
    ) -> Result<&mut Self, CoreError> {
        let value = value.ok_or_else(|| CoreError::null_argument(key.name()))?;
        Ok(self.set(key, value))
    }

    /// Stores a copy of `values` as a set; duplicates collapse
    ///
    /// Empty input is accepted here. Concrete builders reject it where their
    /// domain requires at least one element.
    pub fn set_set<T, I>(&mut self, key: &Key<T>, values: I) -> &mut Self
    where
        T: AttributeType,
        I: IntoIterator<Item = T>,
    {
        let set: BTreeSet<Scalar> = values.into_iter().map(AttributeType::into_scalar).collect();
        self.attributes
            .insert(key.attribute_key(), AttributeValue::Set(set));
        self
    }

    /// Like [`set_set`](Self::set_set) for collections that may be missing
    pub fn try_set_set<T, I>(
        &mut self,
        key: &Key<T>,
        values: Option<I>,
    ) -> Result<&mut Self, CoreError>
    where
        T: AttributeType,
        I: IntoIterator<Item = T>,
    {
        let values = values.ok_or_else(|| CoreError::null_argument(key.name()))?;
        Ok(self.set_set(key, values))
    }

    /// Drops the attribute stored under the key, if any
    pub fn remove<T: AttributeType>(&mut self, key: &Key<T>) -> &mut Self {
        self.attributes.remove(&key.attribute_key());
        self
    }

    /// Returns the working attributes
    pub fn attributes(&self) -> &AttributeContainer {
        &self.attributes
    }

    /// Returns an independent copy of the working attributes
    pub fn snapshot(&self) -> AttributeContainer {
        self.attributes.clone()
    }
}
