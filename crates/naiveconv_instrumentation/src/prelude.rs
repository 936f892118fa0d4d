//! Convenience re-exports for logging consumers.

pub use crate::config::{AppConfig, AppConfigError};
pub use crate::logging::init_tracing;

pub use naiveconv_env::{EnvVar, EnvVarError, EnvVarGuard, Environment, InstrumentEnvVar, LOG_LEVEL};

pub use tracing::{Level, debug, info, warn};
