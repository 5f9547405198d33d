use std::process::ExitCode;

use crate::scan::{MatchResult, ScanError};

/// How a `stringscan` invocation ended.
///
/// A scan that finds marked files is still a success unless `--check` asks
/// for them to be treated as a failure, which lets CI gate on leftovers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit code 0.
    Success,
    /// Exit code 1: `--check` and at least one file still carries a marker.
    Failure,
    /// Exit code 2: unreadable directory or file, bad config, log setup failure.
    Error,
}

impl ExitStatus {
    /// Map a finished scan to an exit status.
    pub fn from_scan(outcome: &Result<MatchResult, ScanError>, check: bool) -> Self {
        match outcome {
            Err(_) => ExitStatus::Error,
            Ok(result) if check && !result.is_empty() => ExitStatus::Failure,
            Ok(_) => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code: u8 = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
