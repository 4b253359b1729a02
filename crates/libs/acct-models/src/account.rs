//! Account model.

use acct_auth::credential::Credential;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::photo::Photo;

/// A registered account.
///
/// `password_hash` and `password_salt` are nullable in storage. Accounts
/// created through [`NewAccount`] always carry both.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Eq)]
#[diesel(table_name = crate::schema::account)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account ID.
    pub id: Uuid,
    /// Username as it was registered.
    pub username: String,
    /// HMAC-SHA512 of the password.
    pub password_hash: Option<Vec<u8>>,
    /// Key the password hash was computed with.
    pub password_salt: Option<Vec<u8>>,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new account.
///
/// Can only be built from a [`Credential`], so hash and salt are always
/// stored together.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::account)]
pub struct NewAccount {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) password_hash: Vec<u8>,
    pub(crate) password_salt: Vec<u8>,
}

impl NewAccount {
    /// Creates a new account creation request.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acct_auth::credential::derive_credential;
    /// use acct_models::account::NewAccount;
    ///
    /// let credential = derive_credential("pw123").unwrap();
    /// let account = NewAccount::new("Bob", credential);
    /// assert_eq!(account.username(), "Bob");
    /// ```
    pub fn new(username: impl Into<String>, credential: Credential) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: credential.hash,
            password_salt: credential.salt,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// An account together with its photos, as returned by a username lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub account: Account,
    pub photos: Vec<Photo>,
}

impl AccountProfile {
    /// URL of the first photo flagged as main, or an empty string.
    pub fn main_photo_url(&self) -> &str {
        self.photos
            .iter()
            .find(|photo| photo.is_main)
            .map(|photo| photo.url.as_str())
            .unwrap_or_default()
    }
}
