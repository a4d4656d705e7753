use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;

/// File the daily rolling appender writes to, suffixed with the date.
const LOG_FILE_PREFIX: &str = "mazecarve.log";

/// Installs a global subscriber that writes to a daily log file under `config.log_dir`.
///
/// The terminal is owned by the UI, so nothing is logged to stdout or stderr. The
/// returned guard flushes buffered lines when dropped and must outlive all logging.
pub fn init(config: &Config) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Already installed, e.g. by an embedding binary
        eprintln!("A global tracing subscriber is already set, keeping it");
    }
    guard
}
