//! Registration and login for the acct service.
//!
//! [`service::AuthService`] holds the authentication logic and depends on two
//! capabilities: a [`acct_models::store::UserStore`] and an
//! [`auth_token::TokenIssuer`]. [`routes::routes`] exposes it over HTTP.

pub mod auth_token;
pub mod dto;
pub mod error;
pub mod prelude;
pub mod routes;
pub mod service;
