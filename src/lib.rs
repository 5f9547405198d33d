//! stringscan - find source files that still carry translation markers
//!
//! stringscan walks a project tree and reports the `.js` and `.html` files whose
//! contents contain a translation marker (`data-mc-translate` or `<Message id=`),
//! so a developer can audit which files still need translation work.
//!
//! ## Module Structure
//!
//! - `scan`: Scanning core (policy, content matcher, tree walker)
//! - `cli`: Command-line interface layer (interactive session, reporting)
//! - `config`: Configuration file loading and parsing
//! - `logging`: Rotating audit log fed by scan events
//!
//! ```no_run
//! let result = stringscan::scan::scan("./web")?;
//! println!("{} files need translation work", result.len());
//! # Ok::<(), stringscan::scan::ScanError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod scan;
