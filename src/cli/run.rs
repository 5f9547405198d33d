//! Dispatches parsed arguments to the matching command.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::{Arguments, Command, LogArgs, OutputFormat, ScanCommand},
    exit_status::ExitStatus,
    interactive::{SessionOptions, run_session},
    progress::create_spinner,
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    logging::{self, AuditLog, LogGuard, LogSettings},
    scan::{MatchResult, ScanError, ScanEvents, ScanPolicy, scan_with},
};

pub fn run(Arguments { command, log }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd, &log),
        Some(Command::Init) => {
            init()?;
            report::print_init_success();
            Ok(ExitStatus::Success)
        }
        None => interactive(&ScanCommand::default(), &log),
    }
}

fn scan(cmd: ScanCommand, log: &LogArgs) -> Result<ExitStatus> {
    let Some(root) = cmd.path.as_deref() else {
        return interactive(&cmd, log);
    };

    let guard = start_audit_log(log)?;
    let mut events = CliEvents::new(guard.is_some(), cmd.verbose);

    let spinner = create_spinner("Scanning...");
    let outcome = scan_with(root, &ScanPolicy::default(), &mut events);
    spinner.finish_and_clear();

    let status = ExitStatus::from_scan(&outcome, cmd.check);
    match (&outcome, cmd.format) {
        (Err(err), _) => report::print_scan_error(err),
        (Ok(result), OutputFormat::Text) => {
            report::print_result(result, cmd.list, guard.as_ref().map(LogGuard::dir))
        }
        (Ok(result), OutputFormat::Json) => report::print_json(root, result)?,
    }

    Ok(status)
}

fn interactive(cmd: &ScanCommand, log: &LogArgs) -> Result<ExitStatus> {
    let guard = start_audit_log(log)?;
    let mut events = CliEvents::new(guard.is_some(), cmd.verbose);
    let options = SessionOptions {
        list: cmd.list,
        log_dir: guard.as_ref().map(LogGuard::dir),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_session(
        &mut input,
        &mut output,
        &ScanPolicy::default(),
        &mut events,
        &options,
    )?;

    Ok(ExitStatus::Success)
}

/// Open the audit log unless `--no-log` was given.
///
/// `--log-dir` wins over the config file, which wins over the default.
fn start_audit_log(log: &LogArgs) -> Result<Option<LogGuard>> {
    if log.no_log {
        return Ok(None);
    }

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd)?.config;
    let dir = log
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.log_dir));

    let settings = LogSettings::new(
        dir,
        config.max_log_files,
        config.max_log_size_mb,
        config.max_log_age_days,
    );
    logging::init(&settings).map(Some)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    Ok(())
}

/// Routes scan events to the audit log and, with `--verbose`, to stderr.
struct CliEvents {
    audit: Option<AuditLog>,
    verbose: bool,
}

impl CliEvents {
    fn new(audit: bool, verbose: bool) -> Self {
        Self {
            audit: audit.then_some(AuditLog),
            verbose,
        }
    }
}

impl ScanEvents for CliEvents {
    fn scan_started(&mut self, root: &Path) {
        if let Some(audit) = &mut self.audit {
            audit.scan_started(root);
        }
    }

    fn dir_skipped(&mut self, path: &Path) {
        if let Some(audit) = &mut self.audit {
            audit.dir_skipped(path);
        }
        if self.verbose {
            eprintln!("{} Skipping folder: {}", "note:".bold().cyan(), path.display());
        }
    }

    fn file_matched(&mut self, path: &Path) {
        if let Some(audit) = &mut self.audit {
            audit.file_matched(path);
        }
    }

    fn scan_finished(&mut self, root: &Path, result: &MatchResult) {
        if let Some(audit) = &mut self.audit {
            audit.scan_finished(root, result);
        }
    }

    fn scan_failed(&mut self, root: &Path, error: &ScanError) {
        if let Some(audit) = &mut self.audit {
            audit.scan_failed(root, error);
        }
    }
}
