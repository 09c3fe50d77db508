//! Configuration module with sub-modules per concern
//!
//! - `discord` - Bot credential, guild, roles and channels
//! - `mail` - Mail relay and sender credentials
//! - `verification` - Allowed root domain, role mapping file, code expiry
//! - `environment` - Environment detection and logging configuration
//!
//! Every value is read from the process environment (after an optional `.env`
//! file has been loaded by the binary). Missing mandatory values are a
//! [`ConfigError`], which the binary treats as fatal.

pub mod discord;
pub mod environment;
pub mod mail;
pub mod verification;

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub use discord::DiscordConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use verification::VerificationConfig;

/// Configuration errors, all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVar { name: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Could not read role mapping file {}: {source}", path.display())]
    RoleMappingUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse role mapping file {}: {source}", path.display())]
    RoleMappingMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub logging: LoggingConfig,
    pub discord: DiscordConfig,
    pub mail: MailConfig,
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// real process environment.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvVars::new(&lookup);
        let environment = vars.parse_or("APP_ENV", Environment::Development)?;

        Ok(Self {
            environment,
            logging: LoggingConfig::from_vars(&vars, environment)?,
            discord: DiscordConfig::from_vars(&vars)?,
            mail: MailConfig::from_vars(&vars)?,
            verification: VerificationConfig::from_vars(&vars)?,
        })
    }
}

/// Thin reader over an environment lookup
///
/// Blank values are treated the same as unset ones.
pub struct EnvVars<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> EnvVars<'a> {
    pub fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn required(&self, name: &str) -> ConfigResult<String> {
        self.optional(name).ok_or_else(|| ConfigError::MissingVar {
            name: name.to_string(),
        })
    }

    pub fn parse_optional<T>(&self, name: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    pub fn parse_or<T>(&self, name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.parse_optional(name)?.unwrap_or(default))
    }

    /// Read a mandatory Discord snowflake id
    pub fn required_snowflake(&self, name: &str) -> ConfigResult<u64> {
        let raw = self.required(name)?;
        parse_snowflake(name, &raw)
    }

    /// Read an optional Discord snowflake id
    pub fn optional_snowflake(&self, name: &str) -> ConfigResult<Option<u64>> {
        self.optional(name)
            .map(|raw| parse_snowflake(name, &raw))
            .transpose()
    }
}

/// Parse a Discord snowflake id; zero is never a valid id
pub fn parse_snowflake(name: &str, raw: &str) -> ConfigResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: "snowflake id must be non-zero".to_string(),
        }),
        Ok(id) => Ok(id),
        Err(e) => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("'{}' is not a snowflake id: {}", raw, e),
        }),
    }
}
