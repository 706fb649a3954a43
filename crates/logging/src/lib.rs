//! Logging configuration and initialization for the scaffold services.
//!
//! [`setup_logging`] brings the process-wide logging runtime into a known
//! state: a stdout sink and a rotating `output.log` sink, both described by a
//! single declarative [`LoggingConfig`], then returns a [`LoggerHandle`]
//! bound to the caller-supplied name. The `DEVELOPMENT` environment variable
//! (literal value `"True"`) switches the caller's verbosity from INFO to
//! DEBUG.
//!
//! The sinks are installed exactly once per process; repeated calls only
//! re-resolve verbosity, so setup from several modules never accumulates
//! duplicate sinks.

mod config;
mod error;
mod format;
mod logger;
mod rolling;

pub use config::LoggingConfig;
pub use error::SetupError;
pub use logger::{LoggerHandle, development_from_env, setup_logging, setup_logging_with};
pub use rolling::{RollingFile, RollingWriter};
