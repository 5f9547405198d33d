use anyhow::Result;

mod args;
mod exit_status;
mod interactive;
mod progress;
mod report;
mod run;
mod session;

pub use args::{Arguments, Command, LogArgs, OutputFormat, ScanCommand};
pub use exit_status::ExitStatus;
pub use interactive::{SessionOptions, run_session};
pub use session::{Session, SessionEvent, SessionState};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
