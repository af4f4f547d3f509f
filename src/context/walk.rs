use std::{
    collections::{HashMap, HashSet},
    ffi::OsString,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// One visited directory: its path plus the names of its immediate
/// subdirectories and files, in directory-listing order.
#[derive(Debug, Clone)]
pub struct Level {
    pub dir: PathBuf,
    pub subdirs: Vec<OsString>,
    pub files: Vec<OsString>,
}

impl Level {
    fn new(dir: PathBuf) -> Self {
        Level {
            dir,
            subdirs: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subdirs.is_empty() && self.files.is_empty()
    }
}

/// Top-down directory walk.
///
/// Every directory is yielded before any of its descendants, and
/// subdirectories are visited in listing order. A child counts as a
/// subdirectory when its metadata (following symlinks) says so; everything
/// else, broken symlinks included, counts as a file. Symlinked directories are
/// reported but not descended into. Directories that cannot be listed are
/// skipped silently, so an unreadable `top` yields nothing.
pub struct Walk {
    levels: std::vec::IntoIter<Level>,
}

pub fn walk(top: &Path) -> Walk {
    let mut levels: Vec<Level> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();
    let mut unreadable: HashSet<PathBuf> = HashSet::new();

    // walkdir descends into a directory as soon as it is seen, so children of
    // one directory may be interleaved with deeper entries. Grouping by parent
    // restores per-directory levels; walkdir's pre-order fixes their order.
    for item in WalkDir::new(top).follow_links(false) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                if let Some(path) = e.path() {
                    unreadable.insert(path.to_path_buf());
                }
                continue;
            }
        };

        let path = entry.path();
        if entry.depth() > 0 {
            let slot = path.parent().and_then(|parent| index.get(parent).copied());
            if let Some(slot) = slot {
                let name = entry.file_name().to_os_string();
                if path.is_dir() {
                    levels[slot].subdirs.push(name);
                } else {
                    levels[slot].files.push(name);
                }
            }
        }

        // Symlinks report their own type here, so linked directories get no level.
        if entry.file_type().is_dir() {
            index.insert(path.to_path_buf(), levels.len());
            levels.push(Level::new(path.to_path_buf()));
        }
    }

    levels.retain(|level| !(level.is_empty() && unreadable.contains(&level.dir)));
    Walk {
        levels: levels.into_iter(),
    }
}

impl Iterator for Walk {
    type Item = Level;

    fn next(&mut self) -> Option<Level> {
        self.levels.next()
    }
}
