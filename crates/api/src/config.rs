use std::str::FromStr;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Pool ceiling (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A `*` entry allows every origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Insert sample work orders into an empty database on startup.
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `8000`                               |
    /// | `DATABASE_URL`         | `sqlite://work_orders.db?mode=rwc`   |
    /// | `DB_MAX_CONNECTIONS`   | `5`                                  |
    /// | `CORS_ORIGINS`         | `*`                                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `SEED_ON_STARTUP`      | `true`                               |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", "8000")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://work_orders.db?mode=rwc".into());
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", "5")?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30")?;
        let seed_on_startup = parse_var("SEED_ON_STARTUP", "true")?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            seed_on_startup,
        })
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Read `var` (or `default` when unset) and parse it.
fn parse_var<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(var).unwrap_or_else(|_| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_uses_default_when_unset() {
        let port: u16 = parse_var("PRODQUEUE_TEST_UNSET_PORT", "8000").unwrap();
        assert_eq!(port, 8000);
    }

    #[test]
    fn parse_var_reports_bad_default() {
        let err = parse_var::<u16>("PRODQUEUE_TEST_UNSET_PORT", "eighty").unwrap_err();
        assert_eq!(err.var, "PRODQUEUE_TEST_UNSET_PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn wildcard_origin_is_detected() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            cors_origins: vec!["http://localhost:3000".into(), "*".into()],
            request_timeout_secs: 30,
            seed_on_startup: false,
        };
        assert!(config.allows_any_origin());
    }
}
