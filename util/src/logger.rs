//! Generic logger utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use std::path::Path;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use conquer_once::OnceCell;
use log::{self, info};
use thiserror::Error;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// STATICS
// ---------------------------------------------------------------------------

/// The instant the logger was initialised, used to timestamp records.
static LOG_EPOCH: OnceCell<DateTime<Utc>> = OnceCell::uninit();

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level less than `INFO`, found `{0}`")]
    InvalidMinLogLevel(log::LevelFilter),

    #[error("Error initialising the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// Records are written to stdout and, if `log_file` is given, appended to that
/// file as well.
///
/// # Notes
///
/// - `min_level` must be greater than `log::Level::Info`.
///
/// # Safety
///
/// - This function must only be called once to prevent corrupting logs. A
///   second call returns `LoggerInitError::FernInitError`.
pub fn logger_init(
    min_level: self::LevelFilter,
    log_file: Option<&Path>
) -> Result<(), LoggerInitError> {

    if min_level < log::Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level))
    }

    // Only the first call sets the epoch, later calls keep the original one
    let _ = LOG_EPOCH.try_init_once(Utc::now);

    // Setup the logger using fern's builder pattern
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {

            // If debug or trace include the target, otherwise don't include it
            if record.level() > log::Level::Info {
                out.finish(format_args!(
                    "[{:10.6} {}] {}: {}",
                    get_elapsed_seconds(),
                    level_to_str(record.level()),
                    record.target(),
                    message
                ))
            }
            else {
                out.finish(format_args!(
                    "[{:10.6} {}] {}",
                    get_elapsed_seconds(),
                    level_to_str(record.level()),
                    message
                ))
            }

        })
        .level(min_level)
        .chain(std::io::stdout());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(
            fern::log_file(path).map_err(LoggerInitError::LogFileInitError)?
        );
    }

    dispatch.apply().map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Log level: {:?}", min_level);
    info!("    Log file path: {:?}", log_file);

    Ok(())
}

/// Get the number of seconds elapsed since the logger was initialised.
///
/// Returns zero if the logger has not been initialised yet.
pub fn get_elapsed_seconds() -> f64 {
    match LOG_EPOCH.get() {
        Some(epoch) => match (Utc::now() - *epoch).num_microseconds() {
            Some(us) => us as f64 * 1e-6,
            None => 0.0
        },
        None => 0.0
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the string representation of a log level
fn level_to_str(level: log::Level) -> ColoredString {
    match level {
        log::Level::Trace => "TRC".dimmed().italic(),
        log::Level::Debug => "DBG".dimmed(),
        log::Level::Info  => "INF".normal(),
        log::Level::Warn  => "WRN".yellow(),
        log::Level::Error => "ERR".red().bold()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_logger_init() {
        assert_eq!(get_elapsed_seconds() >= 0.0, true);

        // Levels below info are rejected before anything is installed
        match logger_init(LevelFilter::Warn, None) {
            Err(LoggerInitError::InvalidMinLogLevel(l)) => assert_eq!(l, LevelFilter::Warn),
            _ => panic!("Expected the minimum level to be rejected")
        }

        let log_path = std::env::temp_dir().join("traj_util_logger_test.log");
        logger_init(LevelFilter::Debug, Some(log_path.as_path())).unwrap();
        log::debug!("logger test record");

        // The global logger can only be installed once
        assert!(matches!(
            logger_init(LevelFilter::Debug, None),
            Err(LoggerInitError::FernInitError(_))
        ));

        assert!(log_path.exists());
    }
}
