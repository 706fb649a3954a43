//! Logging initialization and the name-bound handle it returns.

use std::fmt::Display;
use std::io;
use std::sync::{Mutex, PoisonError};

use tracing::Level;
use tracing_log::AsLog;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload};

use crate::config::LoggingConfig;
use crate::error::SetupError;
use crate::format::LineFormat;
use crate::rolling::RollingWriter;

/// Environment variable selecting development verbosity.
const DEVELOPMENT_VAR: &str = "DEVELOPMENT";

/// Reload handles for the per-sink filters, kept so that later setup calls
/// re-resolve levels instead of installing a second set of sinks.
struct SinkHandles {
    console: reload::Handle<Targets, Registry>,
    file: reload::Handle<Targets, Registry>,
}

static RUNTIME: Mutex<Option<SinkHandles>> = Mutex::new(None);

/// Configures the process-wide sinks and returns a handle bound to
/// `logger_name`.
///
/// Callers pass their own component identifier (e.g. `module_path!()`) so
/// emitted records carry an accurate origin name; any string is accepted
/// verbatim. Uses [`LoggingConfig::default`] and resolves verbosity from the
/// `DEVELOPMENT` environment variable.
pub fn setup_logging(logger_name: &str) -> Result<LoggerHandle, SetupError> {
    setup_logging_with(logger_name, &LoggingConfig::default(), development_from_env())
}

/// [`setup_logging`] with the configuration and development flag as explicit
/// inputs, so callers and tests decide where they come from.
///
/// The first call opens the rotating file, installs the `log` bridge and the
/// global subscriber; later calls only reload the sink filters, so the most
/// recent flag wins and sinks are never duplicated. The sink layout itself
/// (paths, rotation) is fixed by whichever call ran first.
pub fn setup_logging_with(
    logger_name: &str,
    config: &LoggingConfig,
    development: bool,
) -> Result<LoggerHandle, SetupError> {
    let console = sink_targets(config, config.console_level, logger_name, development);
    let file = sink_targets(config, config.file_level, logger_name, development);

    let mut runtime = RUNTIME.lock().unwrap_or_else(PoisonError::into_inner);
    match runtime.as_ref() {
        Some(handles) => {
            handles.console.reload(console)?;
            handles.file.reload(file)?;
        }
        None => {
            *runtime = Some(install(config, console, file)?);
        }
    }
    drop(runtime);

    let level = if development { Level::DEBUG } else { Level::INFO };
    Ok(LoggerHandle { name: logger_name.to_string(), level })
}

/// Reads the `DEVELOPMENT` flag from the process environment.
///
/// Only the literal value `"True"` selects development verbosity; any other
/// value, including `"true"` and `"1"`, does not.
pub fn development_from_env() -> bool {
    is_development(std::env::var(DEVELOPMENT_VAR).ok().as_deref())
}

fn is_development(value: Option<&str>) -> bool {
    value == Some("True")
}

/// Opens the sinks and installs the global subscriber. Runs at most once per
/// process.
fn install(
    config: &LoggingConfig,
    console: Targets,
    file: Targets,
) -> Result<SinkHandles, SetupError> {
    let writer = RollingWriter::open(&config.file_path, config.max_bytes, config.max_backups)
        .map_err(|source| SetupError::OpenLogFile { path: config.file_path.clone(), source })?;

    let (console_filter, console_handle) = reload::Layer::new(console);
    let (file_filter, file_handle) = reload::Layer::new(file);

    let layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = vec![
        fmt::layer()
            .event_format(LineFormat)
            .with_writer(io::stdout)
            .with_filter(console_filter)
            .boxed(),
        fmt::layer().event_format(LineFormat).with_writer(writer).with_filter(file_filter).boxed(),
    ];
    // try_init also installs the `log` bridge (tracing-log feature), which is
    // what carries LoggerHandle records into these layers.
    tracing_subscriber::registry().with(layers).try_init()?;
    log::set_max_level(log::LevelFilter::Trace);

    Ok(SinkHandles { console: console_handle, file: file_handle })
}

/// Builds one sink's filter from the logger bindings and the sink's own
/// minimum level; for every target the stricter of the two applies.
///
/// In development the sink floor drops to DEBUG, otherwise the caller's DEBUG
/// records could never be observed anywhere.
fn sink_targets(
    config: &LoggingConfig,
    sink_level: LevelFilter,
    logger_name: &str,
    development: bool,
) -> Targets {
    let sink_level =
        if development { sink_level.max(LevelFilter::DEBUG) } else { sink_level };
    let caller_level = if development { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let mut targets = Targets::new().with_default(config.root_level.min(sink_level));
    if config.entrypoint != logger_name {
        targets = targets
            .with_target(config.entrypoint.clone(), config.entrypoint_level.min(sink_level));
    }
    targets.with_target(logger_name, caller_level.min(sink_level))
}

/// Handle bound to a logger name, returned by [`setup_logging`].
///
/// Records below the handle's resolved minimum level are dropped silently.
/// Emission goes through the `log` facade so the dynamic name survives as the
/// record's target.
#[derive(Debug, Clone)]
pub struct LoggerHandle {
    name: String,
    level: Level,
}

impl LoggerHandle {
    /// The name this handle was bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn debug(&self, message: impl Display) {
        self.emit(Level::DEBUG, message);
    }

    pub fn info(&self, message: impl Display) {
        self.emit(Level::INFO, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(Level::WARN, message);
    }

    pub fn error(&self, message: impl Display) {
        self.emit(Level::ERROR, message);
    }

    fn emit(&self, level: Level, message: impl Display) {
        if level > self.level {
            return;
        }
        log::log!(target: self.name.as_str(), level.as_log(), "{message}");
    }
}
