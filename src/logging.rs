//! Process-wide `tracing` setup.
//!
//! The TUI owns the terminal, so it logs to a daily-rolling file; one-shot
//! commands log to stderr. `RUST_LOG` overrides the configured level.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "prepdesk.log";

pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// Keeps the background writer alive; drop it last.
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

pub fn init(level: &str, target: LogTarget<'_>) -> Result<LogGuard> {
    match target {
        LogTarget::File(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log dir {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!("install log subscriber: {}", err))?;
            tracing::info!(version = env!("CARGO_PKG_VERSION"), dir = %dir.display(), "logging started");
            Ok(LogGuard {
                _worker: Some(guard),
            })
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|err| anyhow::anyhow!("install log subscriber: {}", err))?;
            Ok(LogGuard { _worker: None })
        }
    }
}
