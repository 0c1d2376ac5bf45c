//! A minimal timestamped logger.
//!
//! Every line is written as `<timestamp> <message>\n` in a single write to the
//! sink, with the timestamp rendered from a reference-date layout such as
//! [`layout::RFC3339`].

pub mod clock;
pub mod config;
pub mod layout;
pub mod logger;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LoggerConfig};
pub use layout::{Layout, LayoutTimer, Timestamp};
pub use logger::{sprint, sprintf, sprintln, Logger};
pub use utils::logging::{
    default_logger, fatal, fatalf, fatalln, init_default, output, print, printf, println, use_utc,
};

/// Logs a `format!`-style message through the default logger.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::printf(::std::format_args!($($arg)*))
    };
}

/// Logs a `format!`-style message through the default logger, then exits the
/// process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::fatalf(::std::format_args!($($arg)*))
    };
}
