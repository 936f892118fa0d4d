//! CLI module for the naiveconv driver.
//! Parses a problem/context description and renders the resolved kernel.

pub mod config;
pub mod error;
pub mod render;

pub use config::{CliConfig, OutputFormat};
pub use error::CliError;
