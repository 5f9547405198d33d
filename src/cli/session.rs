//! State machine behind the interactive prompt.
//!
//! ```text
//! AwaitingInput --Submit(path)--> Scanning --ScanCompleted--> Done
//!       ^                            |                          |
//!       |                            +------ScanFailed-----> Failed
//!       +-----------------Reset-------------------------------+
//! ```

use std::path::{Path, PathBuf};

use crate::scan::{MatchResult, ScanError};

#[derive(Debug)]
pub enum SessionState {
    AwaitingInput,
    Scanning { root: PathBuf },
    Done { root: PathBuf, result: MatchResult },
    Failed { root: PathBuf, error: ScanError },
}

#[derive(Debug)]
pub enum SessionEvent {
    /// The user entered a path. Surrounding whitespace is ignored.
    Submit(String),
    ScanCompleted(MatchResult),
    ScanFailed(ScanError),
    /// Start over after a finished or failed scan.
    Reset,
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The root of the scan being run or last run, if any.
    pub fn root(&self) -> Option<&Path> {
        match &self.state {
            SessionState::AwaitingInput => None,
            SessionState::Scanning { root }
            | SessionState::Done { root, .. }
            | SessionState::Failed { root, .. } => Some(root),
        }
    }

    /// Apply `event`. Events that make no sense in the current state are ignored.
    ///
    /// Returns the directory to scan when the session moves into `Scanning`.
    pub fn handle(&mut self, event: SessionEvent) -> Option<PathBuf> {
        let current = std::mem::replace(&mut self.state, SessionState::AwaitingInput);

        let (next, start) = match (current, event) {
            (SessionState::AwaitingInput, SessionEvent::Submit(input)) => {
                let input = input.trim();
                if input.is_empty() {
                    (SessionState::AwaitingInput, None)
                } else {
                    let root = PathBuf::from(input);
                    (
                        SessionState::Scanning { root: root.clone() },
                        Some(root),
                    )
                }
            }
            (SessionState::Scanning { root }, SessionEvent::ScanCompleted(result)) => {
                (SessionState::Done { root, result }, None)
            }
            (SessionState::Scanning { root }, SessionEvent::ScanFailed(error)) => {
                (SessionState::Failed { root, error }, None)
            }
            (SessionState::Done { .. } | SessionState::Failed { .. }, SessionEvent::Reset) => {
                (SessionState::AwaitingInput, None)
            }
            (state, _) => (state, None),
        };

        self.state = next;
        start
    }
}
