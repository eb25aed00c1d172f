//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! All logging is routed through `tracing` spans for consistent observability.
//!
//! # Log Levels
//!
//! - `error`: Fatal errors
//! - `warn`: Missing columns, non-fatal issues
//! - `info`: Stage progress, summary counts
//! - `debug`: Column types, pipeline totals
//! - `trace`: Row-level data (raw values require `--log-data`)
//!
//! # Usage
//!
//! ```ignore
//! use slph_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig::default().with_timestamps(true);
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use slph_core::redact::set_log_data_enabled;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Workspace crates whose events follow the configured level.
const WORKSPACE_TARGETS: &[&str] = &["slph_cli", "slph_core", "slph_ingest", "slph_output"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter for workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override the configured level.
    pub use_env_filter: bool,
    /// Prefix pretty and compact lines with a timestamp. JSON always has one.
    pub timestamps: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
    /// Whether raw phone values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON lines for machine parsing, with span close events.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            timestamps: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Enable or disable row-level logging of raw phone values.
    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    set_log_data_enabled(config.log_data);
    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            // Log files never carry color codes.
            format_layer(&config.clone().with_ansi(false), Mutex::new(file))
        }
        None => format_layer(config, io::stderr),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(build_env_filter(config)))
        .try_init()
        .map_err(io::Error::other)
}

/// Build the formatting layer for `config`, writing to `writer`.
pub fn format_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false);
    match (config.format, config.timestamps) {
        (LogFormat::Json, _) => base
            .json()
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        (LogFormat::Compact, true) => base.compact().boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => base.boxed(),
        (LogFormat::Pretty, false) => base.without_time().boxed(),
    }
}

/// Default filter directives: workspace crates at `level`, others no louder than warn.
pub fn default_directives(level: LevelFilter) -> String {
    let external = level.min(LevelFilter::WARN);
    let mut directives = external.to_string().to_lowercase();
    for target in WORKSPACE_TARGETS {
        directives.push_str(&format!(",{target}={}", level.to_string().to_lowercase()));
    }
    directives
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_directives_info() {
        assert_eq!(
            default_directives(LevelFilter::INFO),
            "warn,slph_cli=info,slph_core=info,slph_ingest=info,slph_output=info"
        );
    }

    #[test]
    fn test_default_directives_quiet() {
        assert_eq!(
            default_directives(LevelFilter::ERROR),
            "error,slph_cli=error,slph_core=error,slph_ingest=error,slph_output=error"
        );
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::DEBUG)
            .with_format(LogFormat::Json)
            .with_timestamps(true)
            .with_ansi(false);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.timestamps);
        assert!(!config.with_ansi);
        assert!(!config.log_data);
    }

    // The only test in this crate that installs the global subscriber.
    #[test]
    fn test_init_logging_appends_json_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slph.log");
        let mut config = LogConfig::default()
            .with_format(LogFormat::Json)
            .with_log_file(Some(path.clone()));
        config.use_env_filter = false;

        init_logging(&config).unwrap();
        tracing::warn!(rows = 3, "column check");
        tracing::debug!("below the configured level");

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"message\":\"column check\""));
        assert!(text.contains("\"rows\":3"));
        assert!(!text.contains("below the configured level"));
        assert!(init_logging(&config).is_err());
    }
}
