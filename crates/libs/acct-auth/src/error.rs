#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token Expired")]
    TokenExpired,
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid credential key length")]
    InvalidKeyLength,
}
