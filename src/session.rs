use std::path::{Path, PathBuf};

use crate::context::generate::{generate_contents, generate_paths};
use crate::context::scanner;
use crate::context::types::Entry;
use crate::error::ScanError;

/// Operations the host shell can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    ChooseDirectory(PathBuf),
    GeneratePaths,
    GenerateContents,
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The checklist was rebuilt with this many entries.
    Listed(usize),
    Generated(String),
}

/// The current root directory and its checklist.
#[derive(Debug, Clone)]
pub struct Session {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl Session {
    /// Opens `root` and scans it.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let root = root.into();
        let entries = scanner::list(&root)?;
        tracing::info!("opened {:?} with {} entries", root, entries.len());
        Ok(Session { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Flips the selection of the entry at `idx`; out of range is a no-op.
    pub fn toggle(
        &mut self,
        idx: usize,
    ) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.selected = !entry.selected;
        }
    }

    pub fn set_selected(
        &mut self,
        idx: usize,
        selected: bool,
    ) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.selected = selected;
        }
    }

    /// Selects every entry whose name satisfies `pred`.
    pub fn select_where(
        &mut self,
        pred: impl Fn(&Entry) -> bool,
    ) {
        for entry in &mut self.entries {
            if pred(entry) {
                entry.selected = true;
            }
        }
    }

    /// Rescans the root. On failure the previous checklist is kept.
    pub fn refresh(&mut self) -> Result<usize, ScanError> {
        let entries = scanner::list(&self.root)?;
        self.entries = entries;
        Ok(self.entries.len())
    }

    /// Switches to `dir` and scans it. On failure root and checklist are
    /// left as they were.
    pub fn choose_directory(
        &mut self,
        dir: &Path,
    ) -> Result<usize, ScanError> {
        let joined = self.root.join(dir);
        let root = dunce::canonicalize(&joined)
            .map_err(|e| ScanError::directory_access(&joined, e))?;
        let entries = scanner::list(&root)?;
        tracing::info!("switched root to {:?}", root);
        self.root = root;
        self.entries = entries;
        Ok(self.entries.len())
    }

    pub fn generate_paths(&self) -> String {
        generate_paths(&self.root, self.selected())
    }

    pub fn generate_contents(&self) -> String {
        generate_contents(&self.root, self.selected())
    }

    pub fn execute(
        &mut self,
        command: Command,
    ) -> Result<Outcome, ScanError> {
        tracing::debug!("executing {:?}", command);
        match command {
            Command::Refresh => self.refresh().map(Outcome::Listed),
            Command::ChooseDirectory(dir) => self.choose_directory(&dir).map(Outcome::Listed),
            Command::GeneratePaths => Ok(Outcome::Generated(self.generate_paths())),
            Command::GenerateContents => Ok(Outcome::Generated(self.generate_contents())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn toggle_out_of_range_is_noop() -> anyhow::Result<()> {
        let td = tempfile::tempdir()?;
        fs::write(td.path().join("a.txt"), "hello")?;
        let mut session = Session::open(td.path())?;
        session.toggle(5);
        assert_eq!(session.selected_count(), 0);
        session.toggle(0);
        assert_eq!(session.selected_count(), 1);
        Ok(())
    }

    #[test]
    fn refresh_clears_selection() -> anyhow::Result<()> {
        let td = tempfile::tempdir()?;
        fs::write(td.path().join("a.txt"), "hello")?;
        let mut session = Session::open(td.path())?;
        session.toggle(0);
        assert_eq!(session.execute(Command::Refresh)?, Outcome::Listed(1));
        assert_eq!(session.selected_count(), 0);
        Ok(())
    }
}
