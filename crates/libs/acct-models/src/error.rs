//! User store error types.

use uuid::Uuid;

/// User store operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(#[from] diesel::result::Error),

    /// Pending migrations could not be applied.
    #[error("Failed to run database migrations: {0}")]
    Migration(String),

    /// The store already holds an account with this exact username.
    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    /// No account with this id.
    #[error("Account {0} not found")]
    AccountNotFound(Uuid),

    /// A writer panicked while holding the in-memory store.
    #[error("User store lock poisoned")]
    LockPoisoned,
}
