//! End-to-end checks for the logging initializer against real sinks.

use std::fs;

use logging::{LoggingConfig, setup_logging_with};
use tracing::Level;

/// The global subscriber installs once per process, so the whole lifecycle
/// runs as a single sequenced test.
#[test]
fn initializer_lifecycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = LoggingConfig {
        file_path: dir.path().join("output.log"),
        ..LoggingConfig::default()
    };

    // First call installs the sinks with production verbosity.
    let logger = setup_logging_with("alpha", &config, false).expect("setup");
    assert_eq!(logger.name(), "alpha");
    assert_eq!(logger.level(), Level::INFO);

    logger.debug("hidden debug");
    logger.info("hello");

    let contents = fs::read_to_string(&config.file_path).expect("log file");
    assert!(!contents.contains("hidden debug"));
    let line = contents
        .lines()
        .find(|line| line.contains("[INFO] alpha: hello"))
        .expect("info line in file sink");
    assert_timestamp(&line[..19]);

    // A second call must not fail, and its development flag wins.
    let logger = setup_logging_with("alpha", &config, true).expect("second setup");
    assert_eq!(logger.level(), Level::DEBUG);
    logger.debug("now visible");

    let contents = fs::read_to_string(&config.file_path).expect("log file");
    assert!(contents.contains("[DEBUG] alpha: now visible"));

    // Dropping back to production verbosity silences debug again.
    let logger = setup_logging_with("alpha", &config, false).expect("third setup");
    logger.debug("hidden again");

    let contents = fs::read_to_string(&config.file_path).expect("log file");
    assert!(!contents.contains("hidden again"));
}

fn assert_timestamp(timestamp: &str) {
    for (index, byte) in timestamp.bytes().enumerate() {
        let ok = match index {
            4 | 7 => byte == b'-',
            10 => byte == b' ',
            13 | 16 => byte == b':',
            _ => byte.is_ascii_digit(),
        };
        assert!(ok, "malformed timestamp: {timestamp:?}");
    }
}
