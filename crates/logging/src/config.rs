//! Declarative description of the process-wide logging sinks.

use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;

/// Log file written next to the process working directory.
const DEFAULT_LOG_FILE: &str = "output.log";
/// Rotation threshold for the file sink (10 MiB).
const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
/// Rotated generations kept next to the live file.
const DEFAULT_MAX_BACKUPS: usize = 5;
/// Logger name the entrypoint binding applies to.
const DEFAULT_ENTRYPOINT: &str = "server";

/// Static configuration applied by [`setup_logging`](crate::setup_logging).
///
/// A record is emitted by a sink only if it clears both the logger binding
/// for its name and the sink's own minimum level; the stricter of the two
/// wins. The root binding (`root_level`) covers every logger name without a
/// more specific binding.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Path of the rotating log file.
    pub file_path: PathBuf,
    /// Size threshold that triggers rotation. Zero disables rotation.
    pub max_bytes: u64,
    /// Number of rotated generations to retain (`<file>.1` … `<file>.N`).
    pub max_backups: usize,
    /// Minimum level of the stdout sink.
    pub console_level: LevelFilter,
    /// Minimum level of the file sink.
    pub file_level: LevelFilter,
    /// Binding applied to logger names without a more specific binding.
    pub root_level: LevelFilter,
    /// Logger name prefix of the process entrypoint.
    pub entrypoint: String,
    /// Binding applied to the entrypoint's records.
    pub entrypoint_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            max_bytes: DEFAULT_MAX_BYTES,
            max_backups: DEFAULT_MAX_BACKUPS,
            console_level: LevelFilter::INFO,
            file_level: LevelFilter::INFO,
            root_level: LevelFilter::DEBUG,
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            entrypoint_level: LevelFilter::INFO,
        }
    }
}
