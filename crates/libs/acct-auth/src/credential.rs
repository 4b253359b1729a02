//! Salted password hashing and verification using HMAC-SHA512.
//!
//! Every credential is keyed by its own random salt: the salt is the HMAC key
//! and the password is the message. The salt is stored next to the hash and
//! both are needed to verify a login attempt.
//!
//! # Usage
//!
//! The module provides two main functions:
//! - [`derive_credential`]: Create a fresh salt and the matching hash
//! - [`verify_credential`]: Check a password against a stored salt and hash
//!
//! # Examples
//!
//! ```rust
//! use acct_auth::credential::{derive_credential, verify_credential};
//!
//! let credential = derive_credential("user_password_123").unwrap();
//!
//! // Store `credential.hash` and `credential.salt` with the account.
//!
//! assert!(verify_credential(
//!     "user_password_123",
//!     Some(credential.hash.as_slice()),
//!     Some(credential.salt.as_slice()),
//! ));
//! assert!(!verify_credential(
//!     "wrong_password",
//!     Some(credential.hash.as_slice()),
//!     Some(credential.salt.as_slice()),
//! ));
//! ```
//!
//! # Security Notes
//!
//! [`verify_credential`] compares hashes byte by byte and stops at the first
//! mismatch, so its running time depends on the length of the matching
//! prefix. It is not constant time.

use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha512;

use crate::prelude::*;

type HmacSha512 = Hmac<Sha512>;

/// Size in bytes of a generated salt (the SHA-512 block size).
pub const SALT_LEN: usize = 128;

/// Size in bytes of a credential hash (the SHA-512 output size).
pub const HASH_LEN: usize = 64;

/// A password hash together with the salt it was keyed with.
///
/// The two halves are only ever produced together by [`derive_credential`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// HMAC-SHA512 of the password, [`HASH_LEN`] bytes.
    pub hash: Vec<u8>,
    /// Random HMAC key, [`SALT_LEN`] bytes.
    pub salt: Vec<u8>,
}

/// Generates a new random salt and hashes the password with it.
///
/// Two calls with the same password return different salts and therefore
/// different hashes.
///
/// # Arguments
///
/// * `pw` - The plaintext password to hash
///
/// # Returns
///
/// * `Ok(Credential)` - Hash and salt ready for storage
/// * `Err(Error)` - The salt was rejected as an HMAC key
pub fn derive_credential(pw: &str) -> Result<Credential> {
    let mut salt = vec![0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let hash = keyed_hash(pw, &salt)?;
    Ok(Credential { hash, salt })
}

/// Verifies a password against a stored hash and salt.
///
/// Returns `false` when either stored value is missing or empty, when the
/// recomputed hash has a different length than the stored one, or at the
/// first byte that differs.
///
/// # Example
///
/// ```rust
/// use acct_auth::credential::{derive_credential, verify_credential};
///
/// let credential = derive_credential("pw").unwrap();
/// assert!(!verify_credential("pw", Some(credential.hash.as_slice()), None));
/// ```
pub fn verify_credential(pw: &str, hash: Option<&[u8]>, salt: Option<&[u8]>) -> bool {
    let (Some(hash), Some(salt)) = (hash, salt) else {
        return false;
    };
    if hash.is_empty() || salt.is_empty() {
        return false;
    }

    let Ok(computed) = keyed_hash(pw, salt) else {
        return false;
    };
    if computed.len() != hash.len() {
        return false;
    }

    for i in 0..computed.len() {
        if computed[i] != hash[i] {
            return false;
        }
    }
    true
}

fn keyed_hash(pw: &str, salt: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(salt).map_err(|_| Error::InvalidKeyLength)?;
    mac.update(pw.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_produces_fixed_lengths() -> Result<()> {
        let credential = derive_credential("hunter2")?;
        assert_eq!(credential.hash.len(), HASH_LEN);
        assert_eq!(credential.salt.len(), SALT_LEN);
        Ok(())
    }

    #[test]
    fn derive_never_reuses_salt() -> Result<()> {
        let first = derive_credential("same password")?;
        let second = derive_credential("same password")?;
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.hash, second.hash);
        Ok(())
    }

    #[test]
    fn verify_accepts_original_password() -> Result<()> {
        for pw in ["pw123", "correct horse battery staple", "pässwörd ✓", " "] {
            let credential = derive_credential(pw)?;
            assert!(verify_credential(
                pw,
                Some(credential.hash.as_slice()),
                Some(credential.salt.as_slice())
            ));
        }
        Ok(())
    }

    #[test]
    fn verify_rejects_other_password() -> Result<()> {
        let credential = derive_credential("pw123")?;
        assert!(!verify_credential(
            "pw124",
            Some(credential.hash.as_slice()),
            Some(credential.salt.as_slice())
        ));
        assert!(!verify_credential(
            "PW123",
            Some(credential.hash.as_slice()),
            Some(credential.salt.as_slice())
        ));
        Ok(())
    }

    #[test]
    fn verify_rejects_salt_from_other_credential() -> Result<()> {
        let first = derive_credential("pw123")?;
        let second = derive_credential("pw123")?;
        assert!(!verify_credential(
            "pw123",
            Some(first.hash.as_slice()),
            Some(second.salt.as_slice())
        ));
        Ok(())
    }

    #[test]
    fn verify_missing_parts_is_false() -> Result<()> {
        let credential = derive_credential("pw123")?;
        assert!(!verify_credential("pw123", None, Some(credential.salt.as_slice())));
        assert!(!verify_credential("pw123", Some(credential.hash.as_slice()), None));
        assert!(!verify_credential("pw123", None, None));
        assert!(!verify_credential("pw123", Some(&[] as &[u8]), Some(credential.salt.as_slice())));
        assert!(!verify_credential("pw123", Some(credential.hash.as_slice()), Some(&[] as &[u8])));
        Ok(())
    }

    #[test]
    fn verify_length_mismatch_is_false() -> Result<()> {
        let credential = derive_credential("pw123")?;
        let truncated = &credential.hash[..HASH_LEN - 1];
        assert!(!verify_credential(
            "pw123",
            Some(truncated),
            Some(credential.salt.as_slice())
        ));

        let mut extended = credential.hash.clone();
        extended.push(0);
        assert!(!verify_credential(
            "pw123",
            Some(extended.as_slice()),
            Some(credential.salt.as_slice())
        ));
        Ok(())
    }

    #[test]
    fn verify_detects_single_byte_change() -> Result<()> {
        let credential = derive_credential("pw123")?;
        let mut tampered = credential.hash.clone();
        tampered[HASH_LEN - 1] ^= 0x01;
        assert!(!verify_credential(
            "pw123",
            Some(tampered.as_slice()),
            Some(credential.salt.as_slice())
        ));
        Ok(())
    }
}
