//! JWT signing and validation for acct access tokens.
//!
//! Tokens are signed with HS256 using a shared secret supplied by the
//! service configuration. Keys are built once with [`JwtKeys::new`] and
//! passed to [`jwt_encode`] and [`jwt_decode`].
//!
//! # Examples
//!
//! ```rust
//! use acct_auth::jwt::{JwtKeys, jwt_decode, jwt_encode};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     name: String,
//!     exp: usize,
//! }
//!
//! let keys = JwtKeys::new(b"MySuperSecret");
//! let claims = UserClaims {
//!     name: "alice".to_string(),
//!     exp: 4118335200,
//! };
//!
//! let token = jwt_encode(&keys, &claims).unwrap();
//! let decoded = jwt_decode::<UserClaims>(&keys, &token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use crate::prelude::*;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};

/// JWT signing algorithm used by acct.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair for JWT signing and verification.
#[derive(Clone)]
pub struct JwtKeys {
    /// Key used for signing new JWT tokens.
    encoding: EncodingKey,
    /// Key used for verifying existing JWT tokens.
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Creates a new key pair from the provided secret.
    ///
    /// # Arguments
    ///
    /// * `secret` - Raw bytes of the signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JwtKeys(REDACTED)")
    }
}

/// Creates a signed JWT token from the provided claims.
///
/// Claims are signed, not encrypted. Include an `exp` claim: [`jwt_decode`]
/// requires one.
pub fn jwt_encode<T>(keys: &JwtKeys, body: &T) -> Result<String>
where
    T: Serialize,
{
    let header = Header::new(ALGORITHM);
    Ok(encode(&header, body, &keys.encoding)?)
}

/// Validates and decodes a JWT token to extract claims.
///
/// Checks the signature, the algorithm and the `exp` claim. An expired token
/// yields [`Error::TokenExpired`]; a malformed token or a bad signature
/// yields [`Error::InvalidToken`].
pub fn jwt_decode<T>(keys: &JwtKeys, token: &str) -> Result<TokenData<T>>
where
    T: DeserializeOwned,
{
    decode(token, &keys.decoding, &Validation::new(ALGORITHM)).map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        ErrorKind::InvalidToken | ErrorKind::InvalidSignature | ErrorKind::Base64(_) => {
            Error::InvalidToken
        }
        _ => Error::Token(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Claims {
        sub: String,
        exp: i64,
    }

    const FAR_FUTURE: i64 = 4118335200;

    #[test]
    fn roundtrip() -> Result<()> {
        let keys = JwtKeys::new(b"secret");
        let claims = Claims {
            sub: String::from("bob"),
            exp: FAR_FUTURE,
        };
        let token = jwt_encode(&keys, &claims)?;
        assert_eq!(jwt_decode::<Claims>(&keys, &token)?.claims, claims);
        Ok(())
    }

    #[test]
    fn wrong_secret_is_invalid() -> Result<()> {
        let claims = Claims {
            sub: String::from("bob"),
            exp: FAR_FUTURE,
        };
        let token = jwt_encode(&JwtKeys::new(b"secret"), &claims)?;
        let result = jwt_decode::<Claims>(&JwtKeys::new(b"other"), &token);
        assert!(matches!(result, Err(Error::InvalidToken)));
        Ok(())
    }

    #[test]
    fn expired_token() -> Result<()> {
        let keys = JwtKeys::new(b"secret");
        let claims = Claims {
            sub: String::from("bob"),
            exp: 1_000_000,
        };
        let token = jwt_encode(&keys, &claims)?;
        let result = jwt_decode::<Claims>(&keys, &token);
        assert!(matches!(result, Err(Error::TokenExpired)));
        Ok(())
    }

    #[test]
    fn garbage_is_invalid() {
        let keys = JwtKeys::new(b"secret");
        let result = jwt_decode::<Claims>(&keys, "not-a-token");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }
}
