//! Logging setup: human-readable logs on stderr, JSONL logs in a file.
//!
//! Stdout is reserved for command output and the MCP transport, so nothing
//! here ever writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "seo-editor.jsonl";
const ENV_LOG_PATH: &str = "SEO_EDITOR_LOG_PATH";
const ENV_LOG_DIR: &str = "SEO_EDITOR_LOG_DIR";

/// Where the JSONL log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, never rotated.
    File(PathBuf),
    /// A directory of daily-rolled files.
    Directory(PathBuf),
    /// No file logging.
    Disabled,
}

/// Resolved observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// JSONL log destination.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// Precedence: `SEO_EDITOR_LOG_PATH`, then `SEO_EDITOR_LOG_DIR`, then the
    /// config file's `log_dir`, then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let env = |key: &str| std::env::var_os(key).filter(|v| !v.is_empty());
        let target = if let Some(path) = env(ENV_LOG_PATH) {
            LogTarget::File(PathBuf::from(path))
        } else if let Some(dir) = env(ENV_LOG_DIR) {
            LogTarget::Directory(PathBuf::from(dir))
        } else if let Some(dir) = config_log_dir {
            LogTarget::Directory(dir)
        } else {
            seo_editor_core::config::user_data_dir()
                .map(|dir| LogTarget::Directory(dir.join("logs").into_std_path_buf()))
                .unwrap_or(LogTarget::Disabled)
        };
        Self { target }
    }
}

/// Build the level filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` means
/// debug, `-vv` and beyond mean trace, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_appender(&config.target)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(target: &LogTarget) -> anyhow::Result<Option<rolling::RollingFileAppender>> {
    match target {
        LogTarget::Disabled => Ok(None),
        LogTarget::Directory(dir) => {
            ensure_dir(dir)?;
            Ok(Some(rolling::daily(dir, LOG_FILE_PREFIX)))
        }
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            ensure_dir(dir)?;
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            Ok(Some(rolling::never(dir, name)))
        }
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
