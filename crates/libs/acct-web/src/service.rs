//! Registration and login.
//!
//! [`AuthService`] checks username uniqueness, derives and verifies
//! credentials, and asks its [`TokenIssuer`] for an access token. Storage is
//! delegated to a [`UserStore`].
//!
//! The uniqueness check on register lower-cases the username; the lookup on
//! login does not. Unknown usernames and wrong passwords are reported as
//! different errors.

use std::sync::Arc;

use acct_auth::credential::{derive_credential, verify_credential};
use acct_models::{account::NewAccount, store::UserStore};
use tracing::{error, info, warn};

use crate::{auth_token::TokenIssuer, dto::UserDto, prelude::*};

/// Registers and authenticates accounts.
///
/// Cloning is cheap: the store and issuer are shared.
///
/// # Examples
///
/// ```rust
/// use acct_models::store::memory::MemoryUserStore;
/// use acct_web::{
///     auth_token::{JwtTokenIssuer, TOKEN_EXPIRATION_TIME},
///     service::AuthService,
/// };
///
/// let service = AuthService::new(
///     MemoryUserStore::new(),
///     JwtTokenIssuer::new(b"MySuperSecret", TOKEN_EXPIRATION_TIME),
/// );
///
/// let registered = service.register("bob", "pw123").unwrap();
/// let logged_in = service.login("bob", "pw123").unwrap();
/// assert_eq!(registered.username, logged_in.username);
/// assert_eq!(logged_in.photo_url.as_deref(), Some(""));
/// ```
pub struct AuthService<S, T> {
    store: Arc<S>,
    issuer: Arc<T>,
}

impl<S, T> Clone for AuthService<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            issuer: Arc::clone(&self.issuer),
        }
    }
}

impl<S, T> AuthService<S, T>
where
    S: UserStore,
    T: TokenIssuer,
{
    pub fn new(store: S, issuer: T) -> Self {
        Self {
            store: Arc::new(store),
            issuer: Arc::new(issuer),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an account and returns its username with a fresh token.
    ///
    /// Fails with [`Error::UsernameTaken`] when the lower-cased username is
    /// already stored, or when the store reports a duplicate on insert.
    pub fn register(&self, username: &str, password: &str) -> Result<UserDto> {
        if self.store.exists(&username.to_lowercase())? {
            warn!("Registration rejected, username '{username}' is taken");
            return Err(Error::UsernameTaken);
        }

        let credential = derive_credential(password)?;
        let account = self
            .store
            .create(NewAccount::new(username, credential))
            .map_err(|err| match err {
                acct_models::error::Error::DuplicateUsername(_) => Error::UsernameTaken,
                err => Error::from(err),
            })?;

        if account.username.is_empty() {
            error!("Account {} was stored without a username", account.id);
            return Err(Error::MissingUsername);
        }

        let token = self.issuer.issue(&account)?;
        info!("Registered account {} ({})", account.username, account.id);

        Ok(UserDto {
            username: account.username,
            token,
            photo_url: None,
        })
    }

    /// Checks a password and returns the username, a fresh token and the
    /// main photo URL.
    pub fn login(&self, username: &str, password: &str) -> Result<UserDto> {
        let Some(profile) = self.store.find_by_username(username)? else {
            warn!("Login rejected, unknown username '{username}'");
            return Err(Error::InvalidUsername);
        };

        let account = &profile.account;
        if !verify_credential(
            password,
            account.password_hash.as_deref(),
            account.password_salt.as_deref(),
        ) {
            warn!("Login rejected, wrong password for '{username}'");
            return Err(Error::InvalidPassword);
        }

        if account.username.is_empty() {
            error!("Account {} has no username", account.id);
            return Err(Error::MissingUsername);
        }

        let token = self.issuer.issue(account)?;
        info!("Account {} ({}) logged in", account.username, account.id);

        Ok(UserDto {
            username: account.username.clone(),
            token,
            photo_url: Some(profile.main_photo_url().to_string()),
        })
    }
}
