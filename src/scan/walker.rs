//! Depth-first directory walk that collects files carrying translation markers.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use super::{
    error::ScanError,
    events::{NoEvents, ScanEvents},
    matcher::contains_marker,
    policy::ScanPolicy,
};

/// Files that matched during one scan.
///
/// `files` holds base names, not paths, in traversal order. Directory listings
/// are sorted by file name, so two scans of an unchanged tree agree on order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub files: Vec<String>,
    /// Number of candidate files whose contents were read.
    pub files_checked: usize,
    pub skipped_dirs: usize,
}

impl MatchResult {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan `root` with the built-in policy and no event sink.
pub fn scan(root: impl AsRef<Path>) -> Result<MatchResult, ScanError> {
    scan_with(root.as_ref(), &ScanPolicy::default(), &mut NoEvents)
}

/// Scan `root` with an explicit policy, reporting progress to `events`.
///
/// The first unreadable directory or candidate file aborts the whole scan;
/// no partial result is returned alongside the error.
pub fn scan_with<E>(
    root: &Path,
    policy: &ScanPolicy,
    events: &mut E,
) -> Result<MatchResult, ScanError>
where
    E: ScanEvents + ?Sized,
{
    events.scan_started(root);
    match walk(root, policy, events) {
        Ok(result) => {
            events.scan_finished(root, &result);
            Ok(result)
        }
        Err(err) => {
            events.scan_failed(root, &err);
            Err(err)
        }
    }
}

fn walk<E>(root: &Path, policy: &ScanPolicy, events: &mut E) -> Result<MatchResult, ScanError>
where
    E: ScanEvents + ?Sized,
{
    let mut result = MatchResult::default();
    let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|err| ScanError::from_walk(err, root))?;
        let file_type = entry.file_type();

        if entry.depth() == 0 {
            if !file_type.is_dir() {
                return Err(ScanError::directory_read(
                    entry.path(),
                    io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                ));
            }
            continue;
        }

        if file_type.is_dir() {
            if is_skipped(&entry, policy) {
                events.dir_skipped(entry.path());
                result.skipped_dirs += 1;
                entries.skip_current_dir();
            }
            continue;
        }

        // Symlinks are read through, so a dangling one surfaces as a read error.
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }

        let path = entry.path();
        if !policy.is_candidate(path) {
            continue;
        }

        let contents = read_contents(path)?;
        result.files_checked += 1;

        if contains_marker(&contents, &policy.markers) {
            events.file_matched(path);
            result
                .files
                .push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(result)
}

fn is_skipped(entry: &DirEntry, policy: &ScanPolicy) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| policy.is_skipped_dir(name))
}

fn read_contents(path: &Path) -> Result<Vec<u8>, ScanError> {
    fs::read(path).map_err(|err| ScanError::file_read(PathBuf::from(path), err))
}
