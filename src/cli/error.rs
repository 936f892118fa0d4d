use thiserror::Error;

use naiveconv::ResolveError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when parsing command line arguments
    #[error("Failed to parse command line arguments: {0}")]
    ArgParseError(#[from] clap::Error),

    /// Problem or context could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Code-object version outside the supported range
    #[error("Unsupported code object version: {0} (expected 2..=5)")]
    CodeObjectVersion(u32),

    /// Tensor lengths inconsistent with the problem dimensionality
    #[error("Tensor lengths for {tensor} must have {expected} entries, got {actual}")]
    LengthsMismatch {
        tensor: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Failed to serialise the resolution
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}
