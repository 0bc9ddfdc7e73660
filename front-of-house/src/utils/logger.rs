//! Logging Infrastructure
//!
//! Structured logging on stderr, so stdout stays reserved for view output.

use std::path::Path;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// When `log_dir` exists, logs roll daily into `front-of-house.<date>`
/// inside it instead of going to stderr.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "front-of-house");
            let result = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            report_init(result);
            return;
        }
    }

    report_init(subscriber.with_writer(std::io::stderr).try_init());
}

// A second init (tests, embedding) keeps the first subscriber
fn report_init<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        tracing::debug!(error = %e, "Logger already initialized, keeping existing subscriber");
    }
}
