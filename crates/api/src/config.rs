use std::str::FromStr;

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    /// `DATABASE_URL` was set but is not a valid PostgreSQL URL.
    #[error("DATABASE_URL is invalid: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Which origins may issue cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Store connection settings.
///
/// `url` wins when present; otherwise the discrete fields are used.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name))
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// Store connection settings.
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `HOST`                 | `0.0.0.0`            |
    /// | `PORT`                 | `5000`               |
    /// | `CORS_ORIGINS`         | `*`                  |
    /// | `DATABASE_URL`         | --                   |
    /// | `DB_HOST`              | `localhost`          |
    /// | `DB_PORT`              | `5432`               |
    /// | `DB_USER`              | `postgres`           |
    /// | `DB_PASSWORD`          | `postgres`           |
    /// | `DB_NAME`              | `player_performance` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "5000"), "a valid port number")?;
        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()),
            host: var("DB_HOST", "localhost"),
            port: parse_var("DB_PORT", var("DB_PORT", "5432"), "a valid port number")?,
            user: var("DB_USER", "postgres"),
            password: var("DB_PASSWORD", "postgres"),
            name: var("DB_NAME", "player_performance"),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            database,
        })
    }
}

fn parse_var<T: FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let parsed = value.trim().parse();
    parsed.map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
