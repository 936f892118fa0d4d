//! Logging configuration shared by the resolver driver and tooling.

pub mod config;
pub mod logging;
pub mod prelude;

pub use config::{AppConfig, AppConfigError};
pub use logging::init_tracing;
