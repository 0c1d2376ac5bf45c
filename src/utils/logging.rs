//! The process-wide default logger.
//!
//! It writes to standard error with the [`RFC3339`] layout and is created on
//! first use. To configure it, call [`init_default`] before anything logs:
//! once the default logger exists it cannot be replaced.

use std::fmt::{self, Display};
use std::io::{self, Stderr};
use once_cell::sync::OnceCell;

use crate::config::{ConfigError, LoggerConfig};
use crate::layout::RFC3339;
use crate::logger::Logger;

static DEFAULT_LOGGER: OnceCell<Logger<Stderr>> = OnceCell::new();

/// Returns the default logger, creating it if nothing has yet.
pub fn default_logger() -> &'static Logger<Stderr> {
    DEFAULT_LOGGER.get_or_init(|| Logger::new(io::stderr(), RFC3339))
}

/// Installs a default logger built from `config`.
///
/// Fails with [`ConfigError::AlreadyInitialized`] if the default logger was
/// already installed or used.
pub fn init_default(config: &LoggerConfig) -> Result<(), ConfigError> {
    DEFAULT_LOGGER
        .set(config.build(io::stderr()))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

pub fn use_utc() {
    default_logger().use_utc()
}

pub fn output(message: &str) -> io::Result<()> {
    default_logger().output(message)
}

pub fn print(args: &[&dyn Display]) {
    default_logger().print(args)
}

pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args)
}

pub fn println(args: &[&dyn Display]) {
    default_logger().println(args)
}

/// Logs through the default logger, then exits the process with status 1.
pub fn fatal(args: &[&dyn Display]) -> ! {
    default_logger().fatal(args)
}

/// Logs through the default logger, then exits the process with status 1.
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

/// Logs through the default logger, then exits the process with status 1.
pub fn fatalln(args: &[&dyn Display]) -> ! {
    default_logger().fatalln(args)
}
