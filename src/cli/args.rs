//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - (none): interactive session that prompts for a directory
//! - `scan`: scan a directory for files carrying translation markers
//! - `init`: initialize the stringscan configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LOG_DIR_ENV;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Audit log arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Directory for the audit log (overrides config file)
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    /// Do not write an audit log
    #[arg(long, global = true)]
    pub no_log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Args)]
pub struct ScanCommand {
    /// Directory to scan (prompts for one when omitted)
    pub path: Option<PathBuf>,

    /// Print the name of every matched file
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when any file still carries translation markers
    #[arg(long)]
    pub check: bool,

    /// Print skipped folders to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a directory for files with translation markers
    Scan(ScanCommand),
    /// Initialize a new .stringscanrc.json configuration file
    Init,
}
