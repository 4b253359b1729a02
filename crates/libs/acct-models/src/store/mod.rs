//! The user store capability.
//!
//! The authentication service only ever talks to a [`UserStore`]; the
//! PostgreSQL pool ([`DbConnection`](crate::db::connection::DbConnection))
//! and [`memory::MemoryUserStore`] both implement it.

use crate::account::{Account, AccountProfile, NewAccount};
use crate::prelude::*;

pub mod memory;
mod pg;

/// Persistence operations needed to register and authenticate accounts.
pub trait UserStore: Send + Sync {
    /// Whether an account with exactly this username exists.
    fn exists(&self, username: &str) -> Result<bool>;

    /// Fetches the account with exactly this username, with its photos.
    fn find_by_username(&self, username: &str) -> Result<Option<AccountProfile>>;

    /// Persists a new account.
    ///
    /// The write is committed when this returns. Fails with
    /// [`Error::DuplicateUsername`] if the username is already stored.
    fn create(&self, account: NewAccount) -> Result<Account>;
}
