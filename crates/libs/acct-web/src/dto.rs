//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by a successful register or login.
///
/// `photo_url` is only present on login, and is empty when the account has
/// no main photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub username: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl RegisterRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_credentials(&self.username, &self.password)
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_credentials(&self.username, &self.password)
    }
}

fn require_credentials(username: &str, password: &str) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::MissingCredentials);
    }
    Ok(())
}
