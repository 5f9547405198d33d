//! Report formatting and printing utilities.
//!
//! Separate from the scanning core so stringscan can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::config::CONFIG_FILE_NAME;
use crate::scan::{MatchResult, ScanError};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Print the welcome header shown before the interactive prompt.
pub fn print_welcome_to<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        "stringscan".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    )?;
    writeln!(
        writer,
        "Point me at a directory and I will find the files that still carry translation markers."
    )?;
    writeln!(writer)
}

/// Print a scan summary to stdout.
pub fn print_result(result: &MatchResult, list: bool, log_dir: Option<&Path>) {
    let _ = print_result_to(result, list, log_dir, &mut io::stdout().lock());
}

/// Print a scan summary to a custom writer.
///
/// The count line always appears; the names only with `list`. When an audit
/// log is being written the reader is pointed at it for per-file detail.
pub fn print_result_to<W: Write>(
    result: &MatchResult,
    list: bool,
    log_dir: Option<&Path>,
    writer: &mut W,
) -> io::Result<()> {
    let count = result.len();
    let headline = format!(
        "{} {} found with translation content",
        count,
        plural(count, "file", "files")
    );
    let mark = if count == 0 {
        SUCCESS_MARK.green()
    } else {
        SUCCESS_MARK.yellow()
    };
    writeln!(writer, "{} {}", mark, headline.bold())?;

    let mut stats = format!(
        "Checked {} {}",
        result.files_checked,
        plural(result.files_checked, "file", "files")
    );
    if result.skipped_dirs > 0 {
        stats.push_str(&format!(
            ", skipped {} {}",
            result.skipped_dirs,
            plural(result.skipped_dirs, "folder", "folders")
        ));
    }
    writeln!(writer, "  {}", stats.dimmed())?;

    if list {
        for name in &result.files {
            writeln!(writer, "  {} {}", "-".blue(), name)?;
        }
    }

    if let Some(dir) = log_dir {
        writeln!(
            writer,
            "  {} see the log in {} for details",
            "note:".bold(),
            dir.display().to_string().cyan()
        )?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    #[serde(flatten)]
    result: &'a MatchResult,
}

/// Print the scan result as pretty JSON to stdout.
pub fn print_json(root: &Path, result: &MatchResult) -> Result<()> {
    print_json_to(root, result, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(root: &Path, result: &MatchResult, writer: &mut W) -> Result<()> {
    let report = JsonReport {
        root: root.display().to_string(),
        result,
    };
    serde_json::to_writer_pretty(&mut *writer, &report).context("Failed to write JSON report")?;
    writeln!(writer)?;
    Ok(())
}

/// Print a scan failure to stderr.
pub fn print_scan_error(error: &ScanError) {
    let _ = print_scan_error_to(error, &mut io::stderr().lock());
}

pub fn print_scan_error_to<W: Write>(error: &ScanError, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        error
    )
}

pub fn print_init_success() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}
