//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] acct_models::error::Error),

    #[error(transparent)]
    Auth(#[from] acct_auth::error::Error),

    #[error("Username is taken")]
    UsernameTaken,

    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid password")]
    InvalidPassword,

    /// An account without a username reached the response stage.
    #[error("Account has no username")]
    MissingUsername,

    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Auth Token Creation")]
    AuthTokenCreation,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::UsernameTaken => (StatusCode::BAD_REQUEST, "Username is taken"),
            Error::MissingCredentials => (StatusCode::BAD_REQUEST, "Missing credentials"),
            Error::InvalidUsername => (StatusCode::UNAUTHORIZED, "Invalid username"),
            Error::InvalidPassword => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Error::MissingUsername
            | Error::AuthTokenCreation
            | Error::Auth(_)
            | Error::Models(_) => {
                error!("Creating API error response for error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
