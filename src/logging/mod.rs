//! File-backed logging. The terminal belongs to the dashboard UI, so
//! tracing output goes to the configured log directory and never to
//! stdout.

use std::fs::{create_dir_all, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use crate::config::{athletica_home, LogSettings};
use crate::Result;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Keeps the non-blocking file sink alive for the process lifetime.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    log_file_path: PathBuf,
}

impl LoggingGuard {
    /// Returns the log file path backed by the file sink.
    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }
}

/// Initialize the tracing subscriber with a non-blocking file sink.
///
/// `RUST_LOG` takes precedence over the configured level. Errors when
/// invoked more than once per process.
pub fn init(settings: &LogSettings) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("failed to configure tracing level")?;
    let log_file_path = log_file_path(settings)?;
    let (writer, file_guard) = file_writer(&log_file_path, settings.enable_file)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_file_path,
    })
}

/// Where the file sink writes for the given settings.
fn log_file_path(settings: &LogSettings) -> Result<PathBuf> {
    Ok(resolve_log_dir(settings)?.join("athletica.log"))
}

fn file_writer(log_file: &Path, enabled: bool) -> Result<(BoxMakeWriter, Option<WorkerGuard>)> {
    if !enabled {
        return Ok((BoxMakeWriter::new(io::sink), None));
    }
    ensure_log_dir(log_file)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    Ok((BoxMakeWriter::new(non_blocking), Some(guard)))
}

fn ensure_log_dir(log_file: &Path) -> Result<()> {
    let directory = log_file
        .parent()
        .ok_or_else(|| anyhow!("log file path {} has no parent directory", log_file.display()))?;
    create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;
    Ok(())
}

/// Relative directories resolve under the athletica home.
fn resolve_log_dir(settings: &LogSettings) -> Result<PathBuf> {
    match &settings.dir {
        Some(custom) if custom.is_absolute() => Ok(custom.clone()),
        Some(custom) => Ok(athletica_home()?.join(custom)),
        None => Ok(athletica_home()?.join("logs")),
    }
}
