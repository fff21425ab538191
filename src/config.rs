//! Configuration loading and logging setup.
//!
//! Operational settings come from an optional TOML file with sensible
//! defaults; the three secrets come from the environment (a local `.env`
//! is honored via `dotenvy` in `main`). Missing secrets are fatal and are
//! reported together rather than one at a time.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Default homework status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between poll cycles, in seconds.
pub const DEFAULT_POLL_PERIOD_SECS: u64 = 600;

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Homework status API endpoint.
    pub endpoint: String,
    /// Pause between poll cycles, in seconds. Constant across all cycles,
    /// including after errors.
    pub poll_period_secs: u64,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load configuration from `path` if the file exists, defaults otherwise.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.poll_period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_period_secs",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            poll_period_secs: DEFAULT_POLL_PERIOD_SECS,
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// The three required secrets.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the homework status API.
    pub practicum_token: String,
    /// Telegram bot API token.
    pub telegram_token: String,
    /// Destination chat id.
    pub chat_id: i64,
}

impl Credentials {
    /// Read the secrets from the environment.
    ///
    /// Every missing (or empty) variable is collected so the fatal error
    /// names all of them at once. A chat id that does not parse as an
    /// integer is treated the same way as a missing one: fatal, never
    /// retried.
    pub fn from_env() -> Result<Self> {
        let practicum_token = non_empty_var(PRACTICUM_TOKEN_VAR);
        let telegram_token = non_empty_var(TELEGRAM_TOKEN_VAR);
        let chat_id_raw = non_empty_var(TELEGRAM_CHAT_ID_VAR);

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push(PRACTICUM_TOKEN_VAR);
        }
        if telegram_token.is_none() {
            missing.push(TELEGRAM_TOKEN_VAR);
        }
        if chat_id_raw.is_none() {
            missing.push(TELEGRAM_CHAT_ID_VAR);
        }

        let (Some(practicum_token), Some(telegram_token), Some(chat_id_raw)) =
            (practicum_token, telegram_token, chat_id_raw)
        else {
            return Err(ConfigError::MissingEnv { names: missing }.into());
        };

        let chat_id = chat_id_raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: TELEGRAM_CHAT_ID_VAR,
                reason: format!("expected an integer chat id, got {chat_id_raw:?}"),
            })?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
