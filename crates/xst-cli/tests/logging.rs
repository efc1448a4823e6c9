//! Integration tests for the logging bootstrap.

use xst_cli::logging::{LogConfig, LogFormat, init_logging};

#[test]
fn file_logging_captures_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio.log");
    let config = LogConfig::from_verbosity(1)
        .with_format(LogFormat::Compact)
        .with_log_file(Some(path.clone()));
    init_logging(&config).unwrap();

    tracing::warn!("archive export exercised");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("archive export exercised"));
}
