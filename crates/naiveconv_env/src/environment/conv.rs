//! Resolution-specific environment variable identifiers and descriptors.

use super::{
    EnvVar, Environment, value::{EnvVarFormatError, EnvVarParseError, TypedEnvVar}
};

/// Environment variables that steer kernel-variant resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConvEnvVar {
    /// Requests the packed naive kernels instead of the nonpacked ones (debug builds only).
    UsePackedKernels,
}

impl ConvEnvVar {
    /// Obtain the canonical environment variable key for the identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ConvEnvVar::UsePackedKernels => "NAIVECONV_DEBUG_USE_PACKED_KERNELS",
        }
    }

    /// Convert into the unscoped [`EnvVar`] variant.
    #[must_use]
    pub const fn into_env(self) -> EnvVar {
        EnvVar::Conv(self)
    }
}

/// Presence-only flag check: returns true if the variable exists in the process environment.
#[must_use]
pub fn is_set(var: ConvEnvVar) -> bool {
    Environment::get(var).is_some()
}

/// Typed descriptor for NAIVECONV_DEBUG_USE_PACKED_KERNELS.
pub const USE_PACKED_KERNELS: TypedEnvVar<bool> =
    TypedEnvVar::new(ConvEnvVar::UsePackedKernels.into_env(), parse_truthy_flag, format_bool);

fn parse_truthy_flag(value: &str) -> Result<bool, EnvVarParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }
    let lowered = trimmed.to_ascii_lowercase();
    Ok(!matches!(lowered.as_str(), "0" | "false" | "no" | "off" | "disable" | "disabled"))
}

fn format_bool(value: &bool) -> Result<String, EnvVarFormatError> {
    Ok(value.to_string())
}
