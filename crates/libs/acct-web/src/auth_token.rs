//! Access token issuance.

use acct_auth::{
    ISS,
    jwt::{JwtKeys, jwt_decode, jwt_encode},
};
use acct_models::account::Account;
use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::prelude::*;

/// Default lifetime of an access token.
pub const TOKEN_EXPIRATION_TIME: TimeDelta = TimeDelta::days(7);

/// Produces the opaque access token handed out on register and login.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> Result<String>;
}

/// JWT claims identifying an account.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    /// Subject (account ID).
    pub sub: Uuid,
    /// Username.
    pub name: String,
    /// Issuer.
    pub iss: String,
    /// Expiration time.
    pub exp: i64,
    /// Issued at time.
    pub iat: i64,
    /// Not before time.
    pub nbf: i64,
    /// JWT ID.
    pub jti: Uuid,
}

impl AuthToken {
    /// Creates the claims for an account, valid for `token_duration`.
    pub fn new(account: &Account, token_duration: TimeDelta) -> Result<Self> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(token_duration)
            .ok_or(Error::AuthTokenCreation)?;

        Ok(Self {
            sub: account.id,
            name: account.username.clone(),
            iss: String::from(ISS),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            jti: Uuid::new_v4(),
        })
    }
}

/// [`TokenIssuer`] signing [`AuthToken`] claims as HS256 JWTs.
///
/// # Examples
///
/// ```rust
/// use acct_web::auth_token::{JwtTokenIssuer, TOKEN_EXPIRATION_TIME};
///
/// let issuer = JwtTokenIssuer::new(b"MySuperSecret", TOKEN_EXPIRATION_TIME);
/// ```
#[derive(Debug, Clone)]
pub struct JwtTokenIssuer {
    keys: JwtKeys,
    token_duration: TimeDelta,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], token_duration: TimeDelta) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_duration,
        }
    }

    /// Validates a token issued by [`TokenIssuer::issue`] and returns its claims.
    pub fn decode(&self, token: &str) -> Result<AuthToken> {
        Ok(jwt_decode::<AuthToken>(&self.keys, token)?.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, account: &Account) -> Result<String> {
        let claims = AuthToken::new(account, self.token_duration)?;
        Ok(jwt_encode(&self.keys, &claims).map_err(|err| {
            error!("Failed to encode JWT {err}");
            err
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: String::from(username),
            password_hash: None,
            password_salt: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_identifies_account() -> Result<()> {
        let issuer = JwtTokenIssuer::new(b"secret", TOKEN_EXPIRATION_TIME);
        let account = account("bob");

        let claims = issuer.decode(&issuer.issue(&account)?)?;
        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.name, "bob");
        assert_eq!(claims.iss, ISS);
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRATION_TIME.num_seconds());
        Ok(())
    }

    #[test]
    fn tokens_are_unique() -> Result<()> {
        let issuer = JwtTokenIssuer::new(b"secret", TOKEN_EXPIRATION_TIME);
        let account = account("bob");
        assert_ne!(issuer.issue(&account)?, issuer.issue(&account)?);
        Ok(())
    }

    #[test]
    fn other_secret_is_rejected() -> Result<()> {
        let issuer = JwtTokenIssuer::new(b"secret", TOKEN_EXPIRATION_TIME);
        let other = JwtTokenIssuer::new(b"other", TOKEN_EXPIRATION_TIME);
        let token = issuer.issue(&account("bob"))?;
        assert!(matches!(
            other.decode(&token),
            Err(Error::Auth(acct_auth::error::Error::InvalidToken))
        ));
        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> Result<()> {
        let issuer = JwtTokenIssuer::new(b"secret", TimeDelta::hours(-2));
        let token = issuer.issue(&account("bob"))?;
        assert!(matches!(
            issuer.decode(&token),
            Err(Error::Auth(acct_auth::error::Error::TokenExpired))
        ));
        Ok(())
    }
}
