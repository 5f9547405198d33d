//! Audit log: a rotating JSON log file fed by scan events.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use file_rotate::{ContentLimit, FileRotate, compression::Compression, suffix::AppendCount};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::scan::{MatchResult, ScanError, ScanEvents};

/// Name of the active log file. Rotated copies get a `.1`, `.2`, ... suffix.
pub const LOG_FILE_NAME: &str = "stringscan.log";

/// Filter directive variable for the audit log, e.g. `STRINGSCAN_LOG=debug`.
pub const LOG_FILTER_ENV: &str = "STRINGSCAN_LOG";

const BYTES_PER_MB: usize = 1024 * 1024;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub dir: PathBuf,
    /// Rotated files kept besides the active one.
    pub max_backups: usize,
    /// The active file is rotated once it reaches this many bytes.
    pub max_size_bytes: usize,
    /// Rotated files last modified longer ago than this are removed.
    pub max_age: Duration,
}

impl LogSettings {
    pub fn new(dir: PathBuf, max_backups: usize, max_size_mb: usize, max_age_days: u64) -> Self {
        Self {
            dir,
            max_backups,
            max_size_bytes: max_size_mb.saturating_mul(BYTES_PER_MB),
            max_age: Duration::from_secs(max_age_days.saturating_mul(SECONDS_PER_DAY)),
        }
    }
}

/// Keeps the background writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    _guard: WorkerGuard,
    dir: PathBuf,
}

impl LogGuard {
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Open the size-rotated log file, dropping expired backups first.
pub fn open_log_file(settings: &LogSettings) -> Result<FileRotate<AppendCount>> {
    fs::create_dir_all(&settings.dir).with_context(|| {
        format!("Failed to create log directory: {}", settings.dir.display())
    })?;
    remove_expired_backups(&settings.dir, settings.max_age).with_context(|| {
        format!("Failed to clean up old logs in {}", settings.dir.display())
    })?;

    Ok(FileRotate::new(
        settings.dir.join(LOG_FILE_NAME),
        AppendCount::new(settings.max_backups),
        ContentLimit::Bytes(settings.max_size_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    ))
}

/// Delete rotated log files (`stringscan.log.N`) not modified within `max_age`.
///
/// The active log is never removed. Returns how many files were deleted.
pub fn remove_expired_backups(dir: &Path, max_age: Duration) -> io::Result<usize> {
    let backup_prefix = format!("{}.", LOG_FILE_NAME);
    let mut removed = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_backup = name
            .to_str()
            .and_then(|n| n.strip_prefix(backup_prefix.as_str()))
            .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()));
        if !is_backup {
            continue;
        }

        let age = entry.metadata()?.modified()?.elapsed().unwrap_or_default();
        if age > max_age {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Install the global subscriber writing to the rotating log in `settings.dir`.
pub fn init(settings: &LogSettings) -> Result<LogGuard> {
    let (writer, guard) = tracing_appender::non_blocking(open_log_file(settings)?);

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install audit logger")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Audit log started");

    Ok(LogGuard {
        _guard: guard,
        dir: settings.dir.clone(),
    })
}

/// Forwards scan events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuditLog;

impl ScanEvents for AuditLog {
    fn scan_started(&mut self, root: &Path) {
        info!(root = %root.display(), "Scan started");
    }

    fn dir_skipped(&mut self, path: &Path) {
        info!(path = %path.display(), "Skipping folder");
    }

    fn file_matched(&mut self, path: &Path) {
        info!(path = %path.display(), "Matched entry in file");
    }

    fn scan_finished(&mut self, root: &Path, result: &MatchResult) {
        info!(
            root = %root.display(),
            matches = result.len(),
            files_checked = result.files_checked,
            skipped_dirs = result.skipped_dirs,
            "Scan finished"
        );
    }

    fn scan_failed(&mut self, root: &Path, error: &ScanError) {
        error!(root = %root.display(), error = %error, "Scan failed");
    }
}
