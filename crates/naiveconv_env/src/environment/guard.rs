//! Scoped environment overrides.

use super::{EnvVar, Environment};

/// Overrides one variable and puts back its previous value on drop.
pub struct EnvVarGuard {
    var: EnvVar,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub fn set(var: impl Into<EnvVar>, value: &str) -> Self {
        Self::replace(var.into(), Some(value))
    }

    pub fn unset(var: impl Into<EnvVar>) -> Self {
        Self::replace(var.into(), None)
    }

    fn replace(var: EnvVar, value: Option<&str>) -> Self {
        let mut lock = Environment::lock();
        let previous = Environment::get(var);
        Environment::write_locked(var, value, &mut lock);
        Self { var, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let mut lock = Environment::lock();
        Environment::write_locked(self.var, self.previous.as_deref(), &mut lock);
    }
}
