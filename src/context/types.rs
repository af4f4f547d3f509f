use std::path::PathBuf;

/// One selectable child of the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub selected: bool,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Entry {
            name: name.into(),
            path: path.into(),
            selected: false,
        }
    }
}
