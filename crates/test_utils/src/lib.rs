//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! monetary context test suite.
//!
//! # Modules
//!
//! - `fixtures`: A test currency provider and pre-built contexts and locales
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use fixtures::*;
pub use generators::*;
