use std::fs::File;
use std::path::{Path, PathBuf};

use crate::constants::LOG_FILE_NAME;

/// Shortens file paths in log lines: crate sources keep their `src/...`
/// suffix and dependency sources drop the cargo registry prefix.
fn simplify_file_path(file_path: &str) -> String {
    if let Some((_, suffix)) = file_path.split_once(".cargo/registry/src/") {
        return match suffix.find('/') {
            Some(first_slash) => suffix[(first_slash + 1)..].to_string(),
            None => suffix.to_string(),
        };
    }

    match file_path.rfind("/src/") {
        Some(pos) => file_path[(pos + 1)..].to_string(),
        None => file_path.to_string(),
    }
}

/// Lets this crate's records through at any level; dependencies only below
/// `verbose_level`.
fn is_relevant(metadata: &log::Metadata, verbose_level: log::LevelFilter) -> bool {
    metadata.target().starts_with("lola") || metadata.level() < verbose_level
}

/// Compact colored format for the console: `HH:MM:SS.mmm [L] file:line msg`
pub fn console_log_formatter(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &log::Record,
) {
    let level = record.level();
    let level_color = match level {
        log::Level::Error => "\x1B[31m", // red
        log::Level::Warn => "\x1B[33m",  // yellow
        log::Level::Info => "\x1B[32m",  // green
        log::Level::Debug => "\x1B[0m",  // normal
        log::Level::Trace => "\x1B[35m", // purple
    };
    let reset = "\x1B[0m";

    out.finish(format_args!(
        "{}{}[{}] {}:{} {}{}",
        level_color,
        chrono::Local::now().format("%H:%M:%S.%3f "),
        get_level(level),
        simplify_file_path(record.file().unwrap_or("")),
        record.line().unwrap_or(0),
        message,
        reset,
    ))
}

/// Detailed format for the log file, with the full date.
pub fn file_log_formatter(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &log::Record,
) {
    out.finish(format_args!(
        "{}[{}] {}:{} {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        get_level(record.level()),
        simplify_file_path(record.file().unwrap_or("")),
        record.line().unwrap_or(0),
        message
    ))
}

/// Installs the global logger: debug to stdout, info and up to
/// `<log_dir>/lola.log`. The file is truncated on every launch.
///
/// Returns the path of the log file.
pub fn init_logger(log_dir: &Path) -> Result<PathBuf, fern::InitError> {
    std::fs::create_dir_all(log_dir)?;
    let log_file_path = log_dir.join(LOG_FILE_NAME);
    File::create(&log_file_path)?;

    let stdout_dispatcher = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .filter(|metadata| is_relevant(metadata, log::LevelFilter::Debug))
        .format(console_log_formatter)
        .chain(std::io::stdout());

    let file_dispatcher = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .filter(|metadata| is_relevant(metadata, log::LevelFilter::Info))
        .format(file_log_formatter)
        .chain(fern::log_file(&log_file_path)?);

    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(stdout_dispatcher)
        .chain(file_dispatcher)
        .apply()?;

    Ok(log_file_path)
}

/// Sets up the application logger in the platform log directory.
#[cfg(feature = "desktop")]
pub fn setup_logger(app: &tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    use rust_i18n::t;
    use tauri::Manager;

    let log_dir = app.path().app_log_dir().map_err(|e| {
        t!("main.failed_to_retrieve_log_directory", error = e).to_string()
    })?;
    let log_file_path = init_logger(&log_dir)?;

    log::debug!(
        "Logger initialized successfully, log file path: {:?}",
        log_file_path
    );
    Ok(())
}

fn get_level(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "E",
        log::Level::Warn => "W",
        log::Level::Info => "I",
        log::Level::Debug => "D",
        log::Level::Trace => "T",
    }
}

#[cfg(test)]
use log::SetLoggerError;

/// Every record the test logger has seen, as `(level, message)`.
#[cfg(test)]
static CAPTURED_LOGS: parking_lot::Mutex<Vec<(log::Level, String)>> =
    parking_lot::Mutex::new(Vec::new());

/// Console logger for tests that also keeps each record for inspection.
#[cfg(test)]
pub fn setup_test_logger() -> Result<(), SetLoggerError> {
    let stdout_dispatcher = fern::Dispatch::new()
        .format(console_log_formatter)
        .chain(std::io::stdout());

    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .filter(|metadata| is_relevant(metadata, log::LevelFilter::Debug))
        .chain(stdout_dispatcher)
        .chain(fern::Output::call(|record| {
            CAPTURED_LOGS
                .lock()
                .push((record.level(), record.args().to_string()));
        }))
        .apply()?;

    log::debug!("Test logger initialized successfully");
    Ok(())
}

/// Records captured so far. Tests share one logger, so callers should look
/// for a message unique to them.
#[cfg(test)]
pub fn captured_logs() -> Vec<(log::Level, String)> {
    CAPTURED_LOGS.lock().clone()
}
