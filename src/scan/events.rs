//! Hooks through which a scan reports what it is doing.

use std::path::Path;

use super::{error::ScanError, walker::MatchResult};

/// Receives progress notices from a scan.
///
/// Every method has an empty default, so a sink only implements what it cares
/// about. Sinks observe the scan; they cannot change its result.
pub trait ScanEvents {
    fn scan_started(&mut self, _root: &Path) {}

    /// A directory on the skip list was pruned without being listed.
    fn dir_skipped(&mut self, _path: &Path) {}

    fn file_matched(&mut self, _path: &Path) {}

    fn scan_finished(&mut self, _root: &Path, _result: &MatchResult) {}

    fn scan_failed(&mut self, _root: &Path, _error: &ScanError) {}
}

/// A sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl ScanEvents for NoEvents {}
