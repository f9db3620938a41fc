//! File logging for the console client.
//!
//! The console owns stdout, so tracing output goes to a per-session log file
//! only.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/adventure/logs`
/// - Linux: `~/.cache/adventure/logs` (or `$XDG_CACHE_HOME/adventure/logs`)
/// - Windows: `%LOCALAPPDATA%\adventure\logs`
/// - Fallback: `<tmp>/adventure/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "adventure")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("adventure"))
        .join("logs")
}

/// Session id from config, or one derived from the current time.
pub fn session_id(config: &ClientConfig) -> String {
    config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    })
}

/// Directory the given session writes its log into.
pub fn session_log_dir(config: &ClientConfig, session_id: &str) -> PathBuf {
    config
        .log_dir
        .clone()
        .unwrap_or_else(default_log_dir)
        .join(session_id)
}

/// Installs the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// Returns the log file path.
pub fn setup_logging(config: &ClientConfig) -> Result<PathBuf> {
    let session_id = session_id(config);
    let log_dir = session_log_dir(config, &session_id);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = log_file(&log_dir);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

fn log_file(log_dir: &Path) -> PathBuf {
    log_dir.join("client.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_session_and_dir_are_used() {
        let config = ClientConfig {
            session_id: Some("run-7".into()),
            log_dir: Some(PathBuf::from("/tmp/adventure-test")),
            ..ClientConfig::default()
        };
        let id = session_id(&config);
        assert_eq!(id, "run-7");
        assert_eq!(
            session_log_dir(&config, &id),
            PathBuf::from("/tmp/adventure-test/run-7")
        );
    }

    #[test]
    fn generated_session_ids_are_prefixed() {
        assert!(session_id(&ClientConfig::default()).starts_with("session_"));
    }
}
