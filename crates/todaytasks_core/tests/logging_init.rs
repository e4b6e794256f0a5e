use todaytasks_core::{default_log_level, init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().expect("create temp dir");
    let other_dir = tempfile::tempdir().expect("create second temp dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp path");
    let other_dir_str = other_dir.path().to_str().expect("utf-8 temp path");

    assert!(logging_status().is_none());

    init_logging("info", log_dir_str).expect("first init should succeed");
    init_logging(" INFO ", log_dir_str).expect("same config should be idempotent");

    let level_err = init_logging("debug", log_dir_str).expect_err("level conflict");
    assert!(matches!(level_err, LoggingError::LevelConflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", other_dir_str).expect_err("directory conflict");
    assert!(matches!(dir_err, LoggingError::DirConflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());
}

#[test]
fn default_level_matches_build_mode() {
    let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
    assert_eq!(default_log_level(), expected);
}
