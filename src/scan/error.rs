//! Errors that abort a scan.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// The first I/O failure hit during a scan. Either kind ends the scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("error reading directory: {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn directory_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Map a traversal failure onto a directory read error.
    ///
    /// walkdir reports the path it failed on; when it has none the failure
    /// belongs to the directory currently being listed, `fallback`.
    pub fn from_walk(err: walkdir::Error, fallback: &Path) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| fallback.to_path_buf());
        Self::directory_read(path, io::Error::from(err))
    }

    /// The path that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryRead { path, .. } | Self::FileRead { path, .. } => path,
        }
    }
}
