use sqlx::postgres::PgConnectOptions;
use std::env;
use std::str::FromStr;

use crate::errors::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Service settings read from the environment.
///
/// Unset database fields fall back to the libpq defaults that
/// `PgConnectOptions::new` picks up (`PGHOST`, `PGUSER`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_user: Option<String>,
    pub db_host: Option<String>,
    pub db_name: Option<String>,
    pub db_password: Option<String>,
    pub db_port: Option<u16>,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Config {
            db_user: var("DB_USER"),
            db_host: var("DB_HOST"),
            db_name: var("DB_NAME"),
            db_password: var("DB_PASSWORD"),
            db_port: parse(&var, "DB_PORT")?,
            db_max_connections: parse(&var, "DB_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse(&var, "PORT")?.unwrap_or(DEFAULT_PORT),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.db_host {
            options = options.host(host);
        }
        if let Some(port) = self.db_port {
            options = options.port(port);
        }
        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }
        if let Some(name) = &self.db_name {
            options = options.database(name);
        }
        options
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse<T, F>(var: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_port, None);
        assert_eq!(config.db_user, None);
    }

    #[test]
    fn reads_database_settings() {
        let config = config(&[
            ("DB_USER", "hr"),
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "company"),
            ("DB_PASSWORD", "secret"),
            ("DB_PORT", "6543"),
            ("PORT", "8081"),
        ])
        .unwrap();
        assert_eq!(config.db_user.as_deref(), Some("hr"));
        assert_eq!(config.db_host.as_deref(), Some("db.internal"));
        assert_eq!(config.db_name.as_deref(), Some("company"));
        assert_eq!(config.db_password.as_deref(), Some("secret"));
        assert_eq!(config.db_port, Some(6543));
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 8081));

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "hr");
        assert_eq!(options.get_database(), Some("company"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = config(&[("PORT", ""), ("DB_USER", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_user, None);
    }

    #[test]
    fn rejects_non_numeric_port() {
        match config(&[("PORT", "http")]) {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "http");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_db_port() {
        assert!(config(&[("DB_PORT", "70000")]).is_err());
    }
}
