//! Error types for the acct service.

/// Errors that can stop the acct service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Model(#[from] acct_models::error::Error),

    #[error("Env Variable '{0}' missing")]
    MissingEnv(&'static str),

    #[error("Env Variable '{var}' has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}
