//! Credential hashing and token signing primitives for the acct service.
//!
//! - [`credential`]: salted HMAC-SHA512 password hashing and verification
//! - [`jwt`]: HS256 signing and validation of token claims

pub mod credential;
pub mod error;
pub mod jwt;
pub mod prelude;

/// Issuer claim placed in every token signed by acct.
pub const ISS: &str = "acct";
