//! The scanning core: policy, content matcher and tree walker.
//!
//! [`scan`] is the single entry point; [`matches`] is the pure decision
//! function it applies to each candidate file. Both are independent of how the
//! root path is obtained and how results are shown.

mod error;
mod events;
mod matcher;
mod policy;
mod walker;

pub use error::ScanError;
pub use events::{NoEvents, ScanEvents};
pub use matcher::{contains_marker, matches};
pub use policy::{
    INCLUDE_EXTENSIONS, SKIP_DIRS, ScanPolicy, TEST_FILE_MARKER, TRANSLATION_MARKERS,
    file_extension,
};
pub use walker::{MatchResult, scan, scan_with};
