//! Logging infrastructure for the bookings library.
//!
//! Library code logs through the `log` facade. This module provides a
//! stderr backend for it with three verbosity levels.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level when no CLI flag does.
pub const LOG_MODE_ENV: &str = "BOOKINGS_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use bookings::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookings::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level shown at this setting.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr backend for the `log` facade.
///
/// Quiet shows nothing, Normal shows errors and warnings, Verbose adds info
/// and debug messages. Trace records are never shown.
///
/// # Examples
///
/// ```
/// use bookings::{Logger, LogLevel};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Warn).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Installs this logger as the global `log` backend.
    ///
    /// Only the first installation in a process takes effect; later calls
    /// return `false` and leave the existing logger in place.
    pub fn install(self) -> bool {
        let filter = self.level.filter();
        if log::set_boxed_logger(Box::new(self)).is_err() {
            return false;
        }
        log::set_max_level(filter);
        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        eprintln!("{label}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Builds a logger from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `BOOKINGS_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
/// The returned logger still has to be [installed](Logger::install).
///
/// # Examples
///
/// ```
/// use bookings::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    // CLI flags take precedence
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
