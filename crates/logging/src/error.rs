use std::io;
use std::path::PathBuf;

/// Error returned when applying the logging configuration fails.
///
/// Configuration application is all-or-nothing; callers are expected to treat
/// this as fatal at process startup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install the global subscriber: {0}")]
    InstallSubscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to reload the sink filters: {0}")]
    ReloadFilter(#[from] tracing_subscriber::reload::Error),
}
