use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to list the root directory.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn directory_access(
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        ScanError::DirectoryAccess {
            path: path.into(),
            source,
        }
    }
}

/// Failure to read one selected file as text. Never escapes generation; it is
/// turned into a placeholder block.
#[derive(Error, Debug)]
pub enum FileReadError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    NotText { path: PathBuf },
}
