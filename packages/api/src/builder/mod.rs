//! Comparison builder modules
//!
//! Provides the fluent `expect(..).equals_path(..).validate(..)` chain used
//! to compare two resolved values and record the outcome.

pub mod core;
pub mod methods;

pub use self::core::*;
