use crate::error::{ConfigError, Result};
use crate::exception::{ErrorTranslator, MessageStyle};
use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const MESSAGE_STYLE_KEY: &str = "ERROR_MESSAGE_STYLE";
pub const REQUEST_TIMEOUT_KEY: &str = "REQUEST_TIMEOUT_MS";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration service
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Create a service seeded from the process environment
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parse the value under `key`, `Ok(None)` when it is not set
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| ConfigError::invalid_value(key, raw)),
            None => Ok(None),
        }
    }
}

/// Settings for error translation on a router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionConfig {
    pub message_style: MessageStyle,
    pub request_timeout: Duration,
}

impl Default for ExceptionConfig {
    fn default() -> Self {
        Self {
            message_style: MessageStyle::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ExceptionConfig {
    /// Read `ERROR_MESSAGE_STYLE` and `REQUEST_TIMEOUT_MS`, falling back to
    /// defaults for anything unset
    pub fn load(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();

        let message_style = config
            .get_parsed::<MessageStyle>(MESSAGE_STYLE_KEY)?
            .unwrap_or(defaults.message_style);

        let request_timeout = match config.get_parsed::<u64>(REQUEST_TIMEOUT_KEY)? {
            Some(0) => {
                return Err(ConfigError::NotPositive {
                    key: REQUEST_TIMEOUT_KEY.to_string(),
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.request_timeout,
        };

        tracing::debug!(%message_style, ?request_timeout, "exception handling configured");

        Ok(Self {
            message_style,
            request_timeout,
        })
    }

    pub fn translator(&self) -> ErrorTranslator {
        ErrorTranslator::new(self.message_style)
    }
}
