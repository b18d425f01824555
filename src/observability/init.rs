//! Tracing subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "formshell.log";

/// Installs the global subscriber writing to the rotating log file.
///
/// The level comes from `config.trace_level` and defaults to `info`; invalid
/// directives fall back to `info` as well. Setup gives up silently when the
/// data directory cannot be created, and repeated calls are no-ops.
///
/// # Example
///
/// ```rust
/// use formshell::observability::init_tracing;
/// use formshell::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
