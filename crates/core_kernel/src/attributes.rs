//! Typed attribute storage
//!
//! Every context is backed by an [`AttributeContainer`]: a map from an
//! [`AttributeKey`] (attribute name plus value type) to an [`AttributeValue`].
//! Values are held as a tagged union of [`Scalar`]s so that containers can be
//! cloned, compared and displayed without knowing the concrete types stored
//! in them. Typed access goes through [`Key`] constants declared by each
//! concrete context.

use std::any::TypeId;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::error::CoreError;

/// A single stored value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Decimal(Decimal),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(value) => write!(f, "{}", value),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Boolean(value) => write!(f, "{}", value),
            Scalar::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// The value of one container entry: either a single scalar or a set of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Single(Scalar),
    Set(BTreeSet<Scalar>),
}

impl AttributeValue {
    /// Returns true if this entry is set-valued
    pub fn is_set(&self) -> bool {
        matches!(self, AttributeValue::Set(_))
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Single(scalar) => write!(f, "{}", scalar),
            AttributeValue::Set(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A type that can be stored in an attribute container
///
/// Implementors convert themselves into a [`Scalar`] on write and back on
/// read. The value type takes part in the key, so the same attribute name
/// used with two different types addresses two different entries.
pub trait AttributeType: Sized + 'static {
    /// Converts the value into its stored representation
    fn into_scalar(self) -> Scalar;

    /// Decodes a stored value, returning `None` if it has another shape
    fn from_scalar(scalar: &Scalar) -> Option<Self>;

    /// Name reported in type mismatch errors; key identity uses `TypeId`
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl AttributeType for String {
    fn into_scalar(self) -> Scalar {
        Scalar::Text(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Text(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl AttributeType for i64 {
    fn into_scalar(self) -> Scalar {
        Scalar::Integer(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl AttributeType for u32 {
    fn into_scalar(self) -> Scalar {
        Scalar::Integer(i64::from(self))
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Integer(value) => u32::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl AttributeType for bool {
    fn into_scalar(self) -> Scalar {
        Scalar::Boolean(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl AttributeType for Decimal {
    fn into_scalar(self) -> Scalar {
        Scalar::Decimal(self)
    }

    fn from_scalar(scalar: &Scalar) -> Option<Self> {
        match scalar {
            Scalar::Decimal(value) => Some(*value),
            _ => None,
        }
    }
}

/// Untyped key of a container entry: attribute name plus value type
///
/// Equality, ordering and hashing use the name and the `TypeId`; the type
/// name is carried for diagnostics only.
#[derive(Debug, Clone)]
pub struct AttributeKey {
    name: Cow<'static, str>,
    type_id: TypeId,
    type_name: &'static str,
}

impl AttributeKey {
    /// Creates the key under which values of type `T` named `name` are stored
    pub fn of<T: AttributeType>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            type_name: T::type_name(),
        }
    }

    fn identity(&self) -> (&str, TypeId) {
        (&self.name, self.type_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for AttributeKey {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for AttributeKey {}

impl PartialOrd for AttributeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for AttributeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Typed handle to an attribute
///
/// Concrete contexts declare their attributes as `Key` constants, e.g.
/// `pub const PROVIDER: Key<String> = Key::new("provider");`.
pub struct Key<T> {
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: AttributeType> Key<T> {
    /// Returns the untyped container key
    pub fn attribute_key(&self) -> AttributeKey {
        AttributeKey::of::<T>(self.name)
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Map of typed attributes
///
/// Only builders in this crate mutate a container; once it is wrapped by a
/// context it is exposed through shared references only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeContainer {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<T: AttributeType>(&self, key: &Key<T>) -> bool {
        self.entries.contains_key(&key.attribute_key())
    }

    /// Returns the raw entry stored under an untyped key
    pub fn value(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Reads a single value, failing if the entry has an unexpected shape
    pub fn try_get<T: AttributeType>(&self, key: &Key<T>) -> Result<Option<T>, CoreError> {
        match self.entries.get(&key.attribute_key()) {
            None => Ok(None),
            Some(AttributeValue::Single(scalar)) => T::from_scalar(scalar)
                .map(Some)
                .ok_or_else(|| mismatch::<T>(key)),
            Some(AttributeValue::Set(_)) => Err(mismatch::<T>(key)),
        }
    }

    /// Reads a single value; `None` if absent or of another shape
    pub fn get<T: AttributeType>(&self, key: &Key<T>) -> Option<T> {
        self.try_get(key).ok().flatten()
    }

    /// Reads a set value, failing if the entry or any element has an unexpected shape
    pub fn try_get_set<T: AttributeType + Ord>(
        &self,
        key: &Key<T>,
    ) -> Result<Option<BTreeSet<T>>, CoreError> {
        match self.entries.get(&key.attribute_key()) {
            None => Ok(None),
            Some(AttributeValue::Set(values)) => values
                .iter()
                .map(|scalar| T::from_scalar(scalar).ok_or_else(|| mismatch::<T>(key)))
                .collect::<Result<BTreeSet<T>, CoreError>>()
                .map(Some),
            Some(AttributeValue::Single(_)) => Err(mismatch::<T>(key)),
        }
    }

    /// Reads a set value; `None` if absent or of another shape
    pub fn get_set<T: AttributeType + Ord>(&self, key: &Key<T>) -> Option<BTreeSet<T>> {
        self.try_get_set(key).ok().flatten()
    }

    /// Borrows a text value without cloning it
    pub fn text(&self, key: &Key<String>) -> Option<&str> {
        match self.entries.get(&key.attribute_key()) {
            Some(AttributeValue::Single(Scalar::Text(value))) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &AttributeKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Option<AttributeValue> {
        self.entries.insert(key, value)
    }

    pub(crate) fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Copies every entry of `other` over this container
    pub(crate) fn overlay(&mut self, other: &AttributeContainer) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl fmt::Display for AttributeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

fn mismatch<T: AttributeType>(key: &Key<T>) -> CoreError {
    CoreError::TypeMismatch {
        key: key.name().to_string(),
        expected: T::type_name(),
    }
}
