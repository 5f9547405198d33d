//! Line-based interactive session: prompt for a path, scan, show the result, repeat.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Result;

use super::{
    progress::create_spinner,
    report,
    session::{Session, SessionEvent, SessionState},
};
use crate::scan::{ScanEvents, ScanPolicy, scan_with};

const PATH_PROMPT: &str = "Enter directory path: ";
const AGAIN_PROMPT: &str = "Press Enter to scan again, or q to quit: ";

#[derive(Debug, Default, Clone)]
pub struct SessionOptions<'a> {
    /// Print matched file names, not just the count.
    pub list: bool,
    /// Where the audit log is being written, if anywhere.
    pub log_dir: Option<&'a Path>,
}

/// Drive a [`Session`] from `input` until the user quits or input ends.
pub fn run_session<R, W, E>(
    input: &mut R,
    output: &mut W,
    policy: &ScanPolicy,
    events: &mut E,
    options: &SessionOptions<'_>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: ScanEvents + ?Sized,
{
    let mut session = Session::new();
    report::print_welcome_to(output)?;

    loop {
        match session.state() {
            SessionState::AwaitingInput => {
                let Some(line) = prompt(input, output, PATH_PROMPT)? else {
                    return Ok(());
                };
                session.handle(SessionEvent::Submit(line));
            }
            SessionState::Scanning { root } => {
                let root = root.clone();
                let spinner = create_spinner("Please wait while the elves sort..");
                let outcome = scan_with(&root, policy, events);
                spinner.finish_and_clear();

                session.handle(match outcome {
                    Ok(result) => SessionEvent::ScanCompleted(result),
                    Err(error) => SessionEvent::ScanFailed(error),
                });
            }
            SessionState::Done { result, .. } => {
                report::print_result_to(result, options.list, options.log_dir, output)?;
                if !ask_again(input, output)? {
                    return Ok(());
                }
                session.handle(SessionEvent::Reset);
            }
            SessionState::Failed { error, .. } => {
                writeln!(output, "An error was encountered: {}", error)?;
                if !ask_again(input, output)? {
                    return Ok(());
                }
                session.handle(SessionEvent::Reset);
            }
        }
    }
}

/// Write `message` and read one line. `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(output)?;
    let answer = prompt(input, output, AGAIN_PROMPT)?;
    Ok(answer.is_some_and(|a| !a.trim().eq_ignore_ascii_case("q")))
}
