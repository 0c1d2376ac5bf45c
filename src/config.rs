use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

use crate::clock::Clock;
use crate::layout::RFC3339;
use crate::logger::Logger;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid logger config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Default logger already initialized")]
    AlreadyInitialized,
}

/// Settings for building a [`Logger`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Timestamp layout, e.g. `"2006-01-02T15:04:05Z07:00"`
    pub format: String,
    /// Stamp lines in UTC instead of local time
    pub utc: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: RFC3339.to_string(),
            utc: false,
        }
    }
}

impl LoggerConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build<W: Write>(&self, out: W) -> Logger<W> {
        let logger = Logger::new(out, self.format.as_str());
        if self.utc {
            logger.use_utc();
        }
        logger
    }

    pub fn build_with_clock<W: Write>(&self, out: W, clock: impl Clock + 'static) -> Logger<W> {
        let logger = Logger::with_clock(out, self.format.as_str(), clock);
        if self.utc {
            logger.use_utc();
        }
        logger
    }
}
