//! Centralised logging configuration handling.

use tracing::Level;

use naiveconv_env::{EnvVarError, LOG_LEVEL};

/// Errors that can occur while loading [`AppConfig`].
#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    /// A provided log level could not be parsed.
    #[error("invalid log level '{value}'")]
    InvalidLogLevel { value: String },
    /// A typed environment variable interaction failed unexpectedly.
    #[error("failed to access environment: {source}")]
    EnvVar {
        #[from]
        source: EnvVarError,
    },
}

/// Application configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The minimum tracing level for application logs.
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_level: Level::INFO }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppConfigError> {
        let log_level = match LOG_LEVEL.get() {
            Ok(Some(value)) => value,
            Ok(None) => Level::INFO,
            Err(EnvVarError::Parse { value, .. }) => return Err(AppConfigError::InvalidLogLevel { value }),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { log_level })
    }

    /// Raise the log level by `verbosity` steps (`-v`, `-vv`, ...), never lowering it.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        let requested = match verbosity {
            0 => return self,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        // tracing orders levels by verbosity: TRACE is the greatest.
        if requested > self.log_level {
            self.log_level = requested;
        }
        self
    }
}
