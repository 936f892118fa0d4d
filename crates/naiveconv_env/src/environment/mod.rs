//! Process environment abstractions shared by the resolver and its driver.

pub mod conv;
pub mod guard;
pub mod instrument;
pub mod value;

use std::sync::{Mutex, MutexGuard, OnceLock};

use conv::ConvEnvVar;
use instrument::InstrumentEnvVar;

/// Namespaced environment variable identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvVar {
    /// Variables steering kernel-variant resolution.
    Conv(ConvEnvVar),
    /// Variables controlling logging.
    Instrument(InstrumentEnvVar),
}

impl From<ConvEnvVar> for EnvVar {
    fn from(value: ConvEnvVar) -> Self {
        Self::Conv(value)
    }
}

impl From<InstrumentEnvVar> for EnvVar {
    fn from(value: InstrumentEnvVar) -> Self {
        Self::Instrument(value)
    }
}

impl EnvVar {
    /// Retrieve the canonical environment variable key for the identifier.
    pub const fn key(self) -> &'static str {
        match self {
            EnvVar::Conv(inner) => inner.key(),
            EnvVar::Instrument(inner) => inner.key(),
        }
    }
}

/// Synchronised access to the process environment.
pub struct Environment;

impl Environment {
    pub(crate) fn lock() -> MutexGuard<'static, ()> {
        static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current UTF-8 value of `var`, if set.
    pub fn get(var: impl Into<EnvVar>) -> Option<String> {
        std::env::var(var.into().key()).ok()
    }

    /// Set `var` to `value`, or remove it when `value` is `None`.
    pub(crate) fn write_locked(var: EnvVar, value: Option<&str>, _lock: &mut MutexGuard<'static, ()>) {
        // SAFETY: holding the environment mutex serialises every write made through this crate.
        unsafe {
            match value {
                Some(value) => std::env::set_var(var.key(), value),
                None => std::env::remove_var(var.key()),
            }
        }
    }
}
