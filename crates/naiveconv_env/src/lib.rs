//! Shared process environment helpers for the naive convolution resolver.

pub mod environment;

pub use environment::{
    EnvVar, Environment, conv::{ConvEnvVar, USE_PACKED_KERNELS, is_set}, guard::EnvVarGuard, instrument::{InstrumentEnvVar, LOG_LEVEL}, value::{EnvVarError, EnvVarFormatError, EnvVarParseError, TypedEnvVar, TypedEnvVarGuard}
};
