use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AppConfig;

/// Install a stderr `fmt` subscriber filtered at the configured level.
///
/// `RUST_LOG` directives take precedence when present. Returns `false` when a
/// global subscriber was already installed, which is not an error.
pub fn init_tracing(config: &AppConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
