//! HTTP routes for registration and login.

use acct_models::store::UserStore;
use axum::{Json, Router, extract::State, routing::post};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    auth_token::TokenIssuer,
    dto::{LoginRequest, RegisterRequest, UserDto},
    prelude::*,
    service::AuthService,
};

fn accounts(path: &str) -> String {
    format!("/api/accounts/{path}")
}

/// Builds the router serving `POST /api/accounts/register` and
/// `POST /api/accounts/login`.
///
/// # Examples
///
/// ```rust
/// use acct_models::store::memory::MemoryUserStore;
/// use acct_web::{
///     auth_token::{JwtTokenIssuer, TOKEN_EXPIRATION_TIME},
///     routes::routes,
///     service::AuthService,
/// };
///
/// let service = AuthService::new(
///     MemoryUserStore::new(),
///     JwtTokenIssuer::new(b"MySuperSecret", TOKEN_EXPIRATION_TIME),
/// );
/// let app: axum::Router = routes(service);
/// ```
pub fn routes<S, T>(service: AuthService<S, T>) -> Router
where
    S: UserStore + 'static,
    T: TokenIssuer + 'static,
{
    Router::new()
        .route(&accounts("register"), post(register::<S, T>))
        .route(&accounts("login"), post(login::<S, T>))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn register<S, T>(
    State(service): State<AuthService<S, T>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserDto>>
where
    S: UserStore,
    T: TokenIssuer,
{
    payload.validate()?;
    Ok(Json(service.register(&payload.username, &payload.password)?))
}

async fn login<S, T>(
    State(service): State<AuthService<S, T>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserDto>>
where
    S: UserStore,
    T: TokenIssuer,
{
    payload.validate()?;
    Ok(Json(service.login(&payload.username, &payload.password)?))
}
