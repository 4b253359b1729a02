//! Common types and utilities.

/// Model error type.
pub use crate::error::Error;

/// Model result type.
pub type Result<T> = core::result::Result<T, Error>;
