//! Service configuration read from the environment.

use std::net::SocketAddr;

use acct_models::db::config::DbConfig;
use acct_web::auth_token::TOKEN_EXPIRATION_TIME;
use chrono::TimeDelta;

use crate::prelude::*;

const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// Settings for one acctd instance.
pub struct ServerConfig {
    /// Where accounts are stored.
    pub db: DbConfig,
    /// HS256 secret for signing access tokens.
    pub jwt_secret: String,
    /// Address the HTTP server binds to.
    pub address: SocketAddr,
    /// How long an issued token stays valid.
    pub token_duration: TimeDelta,
}

impl ServerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `DATABASE_URL` | yes | |
    /// | `JWT_SECRET` | yes | |
    /// | `ACCTD_ADDRESS` | no | `127.0.0.1:3000` |
    /// | `TOKEN_DURATION_DAYS` | no | `7` |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |var: &'static str| lookup(var).ok_or(Error::MissingEnv(var));

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let address = lookup("ACCTD_ADDRESS").unwrap_or_else(|| String::from(DEFAULT_ADDRESS));
        let address: SocketAddr = address.parse().map_err(|_| Error::InvalidEnv {
            var: "ACCTD_ADDRESS",
            value: address.clone(),
        })?;

        let token_duration = match lookup("TOKEN_DURATION_DAYS") {
            None => TOKEN_EXPIRATION_TIME,
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .and_then(TimeDelta::try_days)
                .ok_or(Error::InvalidEnv {
                    var: "TOKEN_DURATION_DAYS",
                    value,
                })?,
        };

        Ok(Self {
            db: DbConfig::new(database_url),
            jwt_secret,
            address,
            token_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() -> Result<()> {
        let config = config(&[
            ("DATABASE_URL", "postgres://acct@localhost/acct"),
            ("JWT_SECRET", "secret"),
        ])?;
        assert_eq!(config.db.database_url, "postgres://acct@localhost/acct");
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.address.to_string(), DEFAULT_ADDRESS);
        assert_eq!(config.token_duration, TOKEN_EXPIRATION_TIME);
        Ok(())
    }

    #[test]
    fn overrides() -> Result<()> {
        let config = config(&[
            ("DATABASE_URL", "postgres://acct@localhost/acct"),
            ("JWT_SECRET", "secret"),
            ("ACCTD_ADDRESS", "0.0.0.0:8080"),
            ("TOKEN_DURATION_DAYS", "1"),
        ])?;
        assert_eq!(config.address.port(), 8080);
        assert_eq!(config.token_duration, TimeDelta::days(1));
        Ok(())
    }

    #[test]
    fn missing_required() {
        let result = config(&[("DATABASE_URL", "postgres://acct@localhost/acct")]);
        assert!(matches!(result, Err(Error::MissingEnv("JWT_SECRET"))));
    }

    #[test]
    fn invalid_values() {
        let base = [
            ("DATABASE_URL", "postgres://acct@localhost/acct"),
            ("JWT_SECRET", "secret"),
        ];
        for (var, value) in [
            ("ACCTD_ADDRESS", "localhost"),
            ("TOKEN_DURATION_DAYS", "0"),
            ("TOKEN_DURATION_DAYS", "week"),
        ] {
            let mut vars = base.to_vec();
            vars.push((var, value));
            assert!(matches!(
                config(&vars),
                Err(Error::InvalidEnv { var: v, .. }) if v == var
            ));
        }
    }
}
