//! The fixed vocabulary a scan works with.

use std::path::Path;

/// Directory names that are never descended into.
pub const SKIP_DIRS: &[&str] = &["node_modules", "build", "public"];

/// Extensions (including the leading dot) of files whose contents are inspected.
pub const INCLUDE_EXTENSIONS: &[&str] = &[".js", ".html"];

/// Any path containing this substring is treated as a test file and left alone.
pub const TEST_FILE_MARKER: &str = "_spec";

/// Literal substrings that flag a file as carrying translatable content.
pub const TRANSLATION_MARKERS: &[&str] = &["data-mc-translate", "<Message id="];

/// Skip, include and match rules for one scan.
///
/// `ScanPolicy::default()` is the fixed configuration; tests build their own
/// to exercise the walker with other vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPolicy {
    pub skip_dirs: Vec<String>,
    pub include_extensions: Vec<String>,
    pub test_file_marker: String,
    pub markers: Vec<String>,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            skip_dirs: SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            include_extensions: INCLUDE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            test_file_marker: TEST_FILE_MARKER.to_string(),
            markers: TRANSLATION_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanPolicy {
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }

    /// Whether a regular file at `path` should be handed to the content matcher.
    ///
    /// The exclusion marker is checked against the whole path, not just the file name,
    /// so a `_spec` directory anywhere above the file excludes it too.
    pub fn is_candidate(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        let has_extension = file_extension(&name)
            .is_some_and(|ext| self.include_extensions.iter().any(|e| e == ext));

        has_extension && !path.to_string_lossy().contains(self.test_file_marker.as_str())
    }
}

/// The suffix of `name` starting at its last `.`, e.g. `".js"` for `"app.min.js"`.
///
/// Unlike [`Path::extension`], a leading dot counts: `".js"` has extension `".js"`.
pub fn file_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}
