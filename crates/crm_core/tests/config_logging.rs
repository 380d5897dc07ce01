//! Logging is process-global, so this binary holds a single test.

use crm_core::{default_log_level, logging_status, Backend, StoreConfig};

#[test]
fn configured_log_dir_starts_logging_with_default_level() {
    let log_dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        backend: Backend::Memory { seeded: false },
        log_level: None,
        log_dir: Some(log_dir.path().to_path_buf()),
    };

    assert!(config.init_logging().unwrap());
    let active = logging_status().unwrap();
    assert_eq!(active.level, default_log_level());
    assert_eq!(active.log_dir, log_dir.path());

    // Same settings again is a no-op; a different level is refused.
    let explicit = StoreConfig {
        log_level: Some(default_log_level().to_string()),
        ..config.clone()
    };
    assert!(explicit.init_logging().unwrap());

    let other_level = if default_log_level() == "info" { "warn" } else { "info" };
    let conflicting = StoreConfig {
        log_level: Some(other_level.to_string()),
        ..config
    };
    assert!(conflicting.init_logging().is_err());
}
