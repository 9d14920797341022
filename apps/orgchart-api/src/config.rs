//! Service configuration
//!
//! Read from the process environment, after `.env` has been loaded by
//! `dotenvy`. Every value has a default except `DATABASE_URL`, whose absence
//! selects the in-memory backend.

use std::str::FromStr;
use std::time::Duration;

use orgchart_domain::GatewayConfig;
use orgchart_orchestrator::{CallPolicy, OperationKind, PolicyTable};
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub policies: PolicyTable,
    pub gateway: GatewayConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_policy = CallPolicy::new(
            Duration::from_millis(parse(&lookup, "ORGCHART_TIMEOUT_MS", 1000u64)?),
            parse(&lookup, "ORGCHART_MAX_RETRIES", 4u32)?,
        );

        let mut policies = PolicyTable::uniform(default_policy);
        for kind in OperationKind::ALL {
            let prefix = format!("ORGCHART_{}", kind.as_str().to_ascii_uppercase());
            let timeout_key = format!("{}_TIMEOUT_MS", prefix);
            let retries_key = format!("{}_MAX_RETRIES", prefix);

            if lookup(&timeout_key).is_none() && lookup(&retries_key).is_none() {
                continue;
            }

            let timeout_ms = parse(&lookup, &timeout_key, default_policy.timeout_ms())?;
            let policy = CallPolicy::new(
                Duration::from_millis(timeout_ms),
                parse(&lookup, &retries_key, default_policy.max_retries)?,
            );
            policies = policies.with_override(kind, policy);
        }

        let host = lookup("ORGCHART_HOST");

        Ok(Self {
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse(&lookup, "ORGCHART_PORT", 8080u16)?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: parse(&lookup, "ORGCHART_DB_MAX_CONNECTIONS", 5u32)?,
            policies,
            gateway: GatewayConfig {
                max_name_length: parse(&lookup, "ORGCHART_MAX_NAME_LENGTH", 255usize)?,
            },
            log_format: parse(&lookup, "LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
