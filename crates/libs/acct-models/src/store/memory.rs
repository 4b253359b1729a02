//! In-process user store.

use std::sync::RwLock;

use chrono::Utc;

use super::UserStore;
use crate::account::{Account, AccountProfile, NewAccount};
use crate::photo::{NewPhoto, Photo};
use crate::prelude::*;

/// A [`UserStore`] kept in memory.
///
/// Writes are serialized behind a lock, so the duplicate check in
/// [`UserStore::create`] cannot race with another insert.
///
/// # Examples
///
/// ```rust
/// use acct_auth::credential::derive_credential;
/// use acct_models::{account::NewAccount, store::{UserStore, memory::MemoryUserStore}};
///
/// let store = MemoryUserStore::new();
/// let account = NewAccount::new("bob", derive_credential("pw123").unwrap());
/// store.create(account).unwrap();
///
/// assert!(store.exists("bob").unwrap());
/// assert!(!store.exists("Bob").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    profiles: RwLock<Vec<AccountProfile>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a photo to an existing account.
    pub fn attach_photo(&self, photo: NewPhoto) -> Result<Photo> {
        let mut profiles = self.profiles.write().map_err(|_| Error::LockPoisoned)?;
        let profile = profiles
            .iter_mut()
            .find(|profile| profile.account.id == photo.account_id)
            .ok_or(Error::AccountNotFound(photo.account_id))?;

        let photo = Photo {
            id: photo.id,
            account_id: photo.account_id,
            url: photo.url,
            is_main: photo.is_main,
            created_at: Utc::now(),
        };
        profile.photos.push(photo.clone());
        Ok(photo)
    }
}

impl UserStore for MemoryUserStore {
    fn exists(&self, username: &str) -> Result<bool> {
        let profiles = self.profiles.read().map_err(|_| Error::LockPoisoned)?;
        Ok(profiles
            .iter()
            .any(|profile| profile.account.username == username))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<AccountProfile>> {
        let profiles = self.profiles.read().map_err(|_| Error::LockPoisoned)?;
        Ok(profiles
            .iter()
            .find(|profile| profile.account.username == username)
            .cloned())
    }

    fn create(&self, account: NewAccount) -> Result<Account> {
        let mut profiles = self.profiles.write().map_err(|_| Error::LockPoisoned)?;
        if profiles
            .iter()
            .any(|profile| profile.account.username == account.username)
        {
            return Err(Error::DuplicateUsername(account.username));
        }

        let account = Account {
            id: account.id,
            username: account.username,
            password_hash: Some(account.password_hash),
            password_salt: Some(account.password_salt),
            created_at: Utc::now(),
        };
        profiles.push(AccountProfile {
            account: account.clone(),
            photos: Vec::new(),
        });
        Ok(account)
    }
}
