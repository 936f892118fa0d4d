use naiveconv_env::{ConvEnvVar, EnvVarError, EnvVarGuard, Environment, LOG_LEVEL, USE_PACKED_KERNELS, is_set};
use serial_test::serial;
use tracing::Level;

#[test]
#[serial]
fn set_guard_restores_previous_value() {
    let _outer = EnvVarGuard::set(ConvEnvVar::UsePackedKernels, "0");
    {
        let guard = USE_PACKED_KERNELS.set_guard(true).expect("set packed flag");
        assert!(*guard);
        assert_eq!(USE_PACKED_KERNELS.get().expect("parse"), Some(true));
    }
    assert_eq!(Environment::get(ConvEnvVar::UsePackedKernels).as_deref(), Some("0"));
    assert_eq!(USE_PACKED_KERNELS.get().expect("parse"), Some(false));
}

#[test]
#[serial]
fn unset_guard_hides_value_until_drop() {
    let _outer = EnvVarGuard::set(ConvEnvVar::UsePackedKernels, "1");
    {
        let _cleared = USE_PACKED_KERNELS.unset_guard();
        assert!(!is_set(ConvEnvVar::UsePackedKernels));
        assert_eq!(USE_PACKED_KERNELS.get().expect("parse"), None);
    }
    assert!(is_set(ConvEnvVar::UsePackedKernels));
}

#[test]
#[serial]
fn malformed_log_level_reports_key_and_value() {
    let _bad = EnvVarGuard::set(naiveconv_env::InstrumentEnvVar::LogLevel, "chatty");
    match LOG_LEVEL.get() {
        Err(EnvVarError::Parse { name, value, .. }) => {
            assert_eq!(name, "NAIVECONV_LOG_LEVEL");
            assert_eq!(value, "chatty");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(LOG_LEVEL.get_or(Level::WARN), Level::WARN);
}

#[test]
#[serial]
fn log_level_round_trips_through_environment() {
    let _clear = LOG_LEVEL.unset_guard();
    assert_eq!(LOG_LEVEL.get_or(Level::INFO), Level::INFO);
    let _level = LOG_LEVEL.set_guard(Level::TRACE).expect("set level");
    assert_eq!(LOG_LEVEL.get().expect("parse"), Some(Level::TRACE));
}

#[test]
#[serial]
fn typed_guard_over_unset_variable_removes_it_again() {
    let _clear = EnvVarGuard::unset(ConvEnvVar::UsePackedKernels);
    {
        let _packed = USE_PACKED_KERNELS.set_guard(false).expect("set packed flag");
        assert_eq!(Environment::get(ConvEnvVar::UsePackedKernels).as_deref(), Some("false"));
    }
    assert!(!is_set(ConvEnvVar::UsePackedKernels));
}
