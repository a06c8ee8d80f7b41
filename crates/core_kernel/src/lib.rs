//! Core Kernel - Foundational types for the monetary API
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Typed attribute containers backing every context
//! - The generic context builder (copy-and-override construction)
//! - Locale and currency unit value objects

pub mod attributes;
pub mod context;
pub mod currency;
pub mod error;
pub mod locale;

pub use attributes::{AttributeContainer, AttributeKey, AttributeType, AttributeValue, Key, Scalar};
pub use context::{Context, ContextBuilder};
pub use currency::{CurrencyContext, CurrencyContextBuilder, CurrencyUnit};
pub use error::CoreError;
pub use locale::Locale;
