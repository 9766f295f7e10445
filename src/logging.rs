use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";

/// Keeps the non-blocking writer flushing until dropped.
pub struct LogGuard(#[allow(dead_code)] Option<WorkerGuard>);

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub dir: Option<PathBuf>,
    pub filter: Option<String>,
}

fn resolve_log_dir(data_dir: &Path, dir: Option<PathBuf>) -> PathBuf {
    let log_dir = dir.unwrap_or_else(|| data_dir.join("logs"));
    match fs::create_dir_all(&log_dir) {
        Ok(()) => log_dir,
        Err(_) => std::env::temp_dir().join("tvguide-ratui-logs"),
    }
}

fn resolve_filter(filter: Option<String>) -> EnvFilter {
    match filter {
        Some(s) if !s.trim().is_empty() => EnvFilter::new(s),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Daily rolling file log. The terminal belongs to the TUI, so nothing goes
/// to stdout or stderr.
pub fn init(data_dir: &Path, cfg: LogConfig) -> LogGuard {
    let log_dir = resolve_log_dir(data_dir, cfg.dir);
    let _ = fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tvguide-ratui.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer);

    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(cfg.filter))
        .with(file_layer);

    let _ = subscriber.try_init();
    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    LogGuard(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_defaults_under_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_dir = resolve_log_dir(dir.path(), None);
        assert_eq!(log_dir, dir.path().join("logs"));
        assert!(log_dir.is_dir());
    }

    #[test]
    fn explicit_filter_wins() {
        let filter = resolve_filter(Some("debug".to_owned()));
        assert_eq!(filter.to_string(), "debug");
    }
}
