/**
 * Server Configuration
 *
 * `ServerConfig` is read once at startup from the environment (after
 * `dotenv`) or assembled with `ServerConfig::builder()`. Both paths run the
 * same validation, so a config that exists is a config that is usable.
 *
 * | env var             | required | default                           |
 * |---------------------|----------|-----------------------------------|
 * | `DATABASE_URL`      | yes      |                                   |
 * | `JWT_SECRET`        | yes      | at least 32 characters            |
 * | `PORT`              | no       | `3000`                            |
 * | `TOKEN_TTL_SECS`    | no       | `2592000` (30 days)               |
 * | `BCRYPT_COST`       | no       | `bcrypt::DEFAULT_COST`            |
 * | `CHARACTER_API_URL` | no       | `https://rickandmortyapi.com/api` |
 */

use std::fmt;
use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;
pub const DEFAULT_CHARACTER_API_URL: &str = "https://rickandmortyapi.com/api";
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("insecure secret in {0}: must be at least 32 characters")]
    InsecureSecret(&'static str),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// `postgres://…` or `sqlite:…` (may contain a password)
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    pub port: u16,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    /// Root of the external character API
    pub character_api_url: String,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = lookup("PORT") {
            builder = builder.port(parse("PORT", &port)?);
        }
        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            let secs = parse("TOKEN_TTL_SECS", &ttl)?;
            let ttl = Duration::try_seconds(secs).ok_or_else(|| ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                message: "out of range".to_string(),
            })?;
            builder = builder.token_ttl(ttl);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }
        if let Some(url) = lookup("CHARACTER_API_URL") {
            builder = builder.character_api_url(url);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::InsecureSecret("JWT_SECRET"));
        }
        if self.token_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                message: "must be positive".to_string(),
            });
        }
        if !(PasswordHasher::MIN_COST..=PasswordHasher::MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!(
                    "must be between {} and {}",
                    PasswordHasher::MIN_COST,
                    PasswordHasher::MAX_COST
                ),
            });
        }
        if !(self.character_api_url.starts_with("http://")
            || self.character_api_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                key: "CHARACTER_API_URL",
                message: "must be an http(s) URL".to_string(),
            });
        }

        Ok(())
    }

    /// Address the server listens on (`0.0.0.0:<port>`)
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("port", &self.port)
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("character_api_url", &self.character_api_url)
            .finish()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    character_api_url: Option<String>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn character_api_url(mut self, url: impl Into<String>) -> Self {
        self.character_api_url = Some(url.into());
        self
    }

    /// Build the configuration, filling in defaults
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self
                .database_url
                .ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            token_ttl: self
                .token_ttl
                .unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_TTL_SECS)),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            character_api_url: self
                .character_api_url
                .unwrap_or_else(|| DEFAULT_CHARACTER_API_URL.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}
