use std::{fs, path::Path};

use walkdir::WalkDir;

use crate::context::types::Entry;
use crate::error::ScanError;

/// Lists the immediate children of `root` as unselected entries, dropping
/// folders that fail [`has_files`]. Order follows the directory listing.
pub fn list(root: &Path) -> Result<Vec<Entry>, ScanError> {
    let read = fs::read_dir(root).map_err(|e| ScanError::directory_access(root, e))?;

    let mut entries = Vec::new();
    for child in read {
        let child = match child {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!("Could not read entry in {:?}: {e}", root);
                continue;
            }
        };
        let path = child.path();
        if path.is_dir() && !has_files(&path) {
            tracing::debug!("skipping empty folder {:?}", path);
            continue;
        }
        let name = child.file_name().to_string_lossy().into_owned();
        entries.push(Entry::new(name, path));
    }

    tracing::debug!("listed {} entries in {:?}", entries.len(), root);
    Ok(entries)
}

/// True if any level of the walk under `dir` has files or subdirectories.
///
/// A folder holding only empty folders passes; only a folder with no
/// children at all (or one that cannot be read) fails. Deeper levels exist
/// only below a non-empty first level, so the first child settles it.
pub fn has_files(dir: &Path) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .next()
        .is_some()
}
