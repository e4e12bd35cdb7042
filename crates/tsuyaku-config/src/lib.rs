use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::input::InputConfig;
use self::logging::{LogFormat, LoggingConfig};
use self::translator::{ProviderKind, TranslatorConfig};

pub mod input;
pub mod logging;
pub mod translator;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults overridden by `TSUYAKU_*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(list) = var("TSUYAKU_PROVIDERS") {
            config.translator.providers = list
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.parse::<ProviderKind>())
                .collect::<Result<_, _>>()
                .map_err(|reason| invalid("TSUYAKU_PROVIDERS", reason))?;
        }
        if let Some(url) = var("TSUYAKU_GOOGLE_URL") {
            config.translator.google_url = url;
        }
        if let Some(url) = var("TSUYAKU_LIBRETRANSLATE_URL") {
            config.translator.libretranslate_url = url;
        }
        if let Some(key) = var("TSUYAKU_LIBRETRANSLATE_API_KEY").filter(|k| !k.is_empty()) {
            config.translator.libretranslate_api_key = Some(key);
        }
        if let Some(url) = var("TSUYAKU_MYMEMORY_URL") {
            config.translator.mymemory_url = url;
        }
        if let Some(value) = var("TSUYAKU_TIMEOUT_SECONDS") {
            config.translator.timeout_seconds = value
                .parse()
                .map_err(|e| invalid("TSUYAKU_TIMEOUT_SECONDS", e))?;
        }

        if let Some(value) = var("TSUYAKU_MAX_CHARS") {
            config.input.max_chars = value
                .parse()
                .map_err(|e| invalid("TSUYAKU_MAX_CHARS", e))?;
        }
        if let Some(from) = var("TSUYAKU_DEFAULT_FROM") {
            config.input.default_from = from;
        }
        if let Some(to) = var("TSUYAKU_DEFAULT_TO") {
            config.input.default_to = to;
        }

        if let Some(level) = var("TSUYAKU_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = var("TSUYAKU_LOG_FORMAT") {
            config.logging.format = format
                .parse::<LogFormat>()
                .map_err(|reason| invalid("TSUYAKU_LOG_FORMAT", reason))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.max_chars == 0 {
            return Err(invalid("input.max_chars", "must be greater than zero"));
        }
        if self.input.default_to.trim().is_empty() {
            return Err(invalid("input.default_to", "must not be empty"));
        }
        if self.translator.timeout_seconds == 0 {
            return Err(invalid("translator.timeout_seconds", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
