use chrono::Local;
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::session::{Command, Outcome, Session};
use crate::tokenizer;

/// Lines the output pane moves per PgUp/PgDn.
pub const OUTPUT_PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filter,
    ChooseDirectory,
}

/// Shared UI state for the browser TUI
pub struct UiState {
    pub session: Session,
    pub mode: Mode,
    pub search_input: String,
    pub dir_input: String,
    /// Indices into `session.entries()` that pass the search, in display order.
    pub filtered: Vec<usize>,
    pub selected_idx: usize,
    pub scroll_offset: usize,
    pub output: String,
    pub output_scroll: u16,
    pub status: String,
}

impl UiState {
    pub fn new(session: Session) -> Self {
        let status = format!(
            "{} entries in {}",
            session.entries().len(),
            session.root().display()
        );
        let mut state = UiState {
            session,
            mode: Mode::Browse,
            search_input: String::new(),
            dir_input: String::new(),
            filtered: Vec::new(),
            selected_idx: 0,
            scroll_offset: 0,
            output: String::new(),
            output_scroll: 0,
            status,
        };
        state.refilter();
        state
    }

    /// Recompute `filtered` from the search input and clamp the cursor.
    pub fn refilter(&mut self) {
        let entries = self.session.entries();
        self.filtered = if self.search_input.is_empty() {
            (0..entries.len()).collect()
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(usize, i64)> = entries
                .iter()
                .enumerate()
                .filter_map(|(i, e)| {
                    matcher
                        .fuzzy_match(&e.name, &self.search_input)
                        .map(|score| (i, score))
                })
                .collect();
            // Stable sort keeps listing order among equal scores.
            scored.sort_by_key(|&(_, score)| -score);
            scored.into_iter().map(|(i, _)| i).collect()
        };
        if self.filtered.is_empty() {
            self.selected_idx = 0;
        } else if self.selected_idx >= self.filtered.len() {
            self.selected_idx = self.filtered.len() - 1;
        }
    }

    /// Entry index under the cursor, if any.
    pub fn current(&self) -> Option<usize> {
        self.filtered.get(self.selected_idx).copied()
    }

    pub fn move_up(&mut self) {
        self.selected_idx = self.selected_idx.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_idx + 1 < self.filtered.len() {
            self.selected_idx += 1;
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(idx) = self.current() {
            self.session.toggle(idx);
        }
    }

    /// Select all visible entries, or clear them if all are already selected.
    pub fn toggle_all_visible(&mut self) {
        let entries = self.session.entries();
        let all_selected = self.filtered.iter().all(|&i| entries[i].selected);
        for &idx in &self.filtered {
            self.session.set_selected(idx, !all_selected);
        }
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(OUTPUT_PAGE);
    }

    pub fn scroll_output_down(&mut self) {
        let max = u16::try_from(self.output.lines().count()).unwrap_or(u16::MAX);
        self.output_scroll = self.output_scroll.saturating_add(OUTPUT_PAGE).min(max);
    }

    /// Start the directory chooser pre-filled with the current root.
    pub fn begin_choose_directory(&mut self) {
        self.dir_input = self.session.root().display().to_string();
        self.mode = Mode::ChooseDirectory;
    }

    /// Run a session command and reflect the outcome in the status line.
    pub fn run(
        &mut self,
        command: Command,
    ) {
        match self.session.execute(command) {
            Ok(Outcome::Listed(n)) => {
                self.selected_idx = 0;
                self.scroll_offset = 0;
                self.refilter();
                self.set_status(format!(
                    "{n} entries in {}",
                    self.session.root().display()
                ));
            }
            Ok(Outcome::Generated(text)) => {
                let summary = match tokenizer::count(&text) {
                    Some(tokens) => format!(
                        "Generated from {} selected, {tokens} tokens",
                        self.session.selected_count()
                    ),
                    None => format!("Generated from {} selected", self.session.selected_count()),
                };
                self.output = text;
                self.output_scroll = 0;
                self.set_status(summary);
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.set_status(format!("Error: {e}"));
            }
        }
    }

    pub fn set_status(
        &mut self,
        msg: impl AsRef<str>,
    ) {
        self.status = format!("[{}] {}", Local::now().format("%H:%M:%S"), msg.as_ref());
    }
}

/// Adjust scroll offset and compute visible range
pub fn adjust_scroll_and_slice(
    selected_idx: &mut usize,
    scroll_offset: &mut usize,
    max_lines: usize,
    data_len: usize,
) -> (usize, usize) {
    if *selected_idx < *scroll_offset {
        *scroll_offset = *selected_idx;
    } else if *selected_idx >= *scroll_offset + max_lines {
        *scroll_offset = selected_idx.saturating_sub(max_lines).saturating_add(1);
    }
    let end_idx = (*scroll_offset + max_lines).min(data_len);
    // A zero-height pane pushes the offset past the data.
    ((*scroll_offset).min(end_idx), end_idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn state_with(names: &[&str]) -> (tempfile::TempDir, UiState) {
        let td = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(td.path().join(name), "x").unwrap();
        }
        let session = Session::open(td.path()).unwrap();
        (td, UiState::new(session))
    }

    #[test]
    fn search_narrows_entries() {
        let (_td, mut state) = state_with(&["main.rs", "notes.md"]);
        state.search_input = "md".into();
        state.refilter();
        assert_eq!(state.filtered.len(), 1);
        let idx = state.current().unwrap();
        assert_eq!(state.session.entries()[idx].name, "notes.md");
    }

    #[test]
    fn toggle_all_flips_between_all_and_none() {
        let (_td, mut state) = state_with(&["a.txt", "b.txt"]);
        state.toggle_all_visible();
        assert_eq!(state.session.selected_count(), 2);
        state.toggle_all_visible();
        assert_eq!(state.session.selected_count(), 0);
    }

    #[test]
    fn failed_directory_change_keeps_listing() {
        let (td, mut state) = state_with(&["a.txt"]);
        state.run(Command::ChooseDirectory(td.path().join("missing")));
        assert!(state.status.contains("Error: cannot read directory"), "{}", state.status);
        assert_eq!(state.session.root(), td.path());
        assert_eq!(state.session.entries().len(), 1);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut offset = 0;
        let mut idx = 7;
        assert_eq!(adjust_scroll_and_slice(&mut idx, &mut offset, 5, 10), (3, 8));
        idx = 1;
        assert_eq!(adjust_scroll_and_slice(&mut idx, &mut offset, 5, 10), (1, 6));
    }

    #[test]
    fn zero_height_pane_yields_empty_window() {
        let (mut offset, mut idx) = (0, 0);
        let (start, end) = adjust_scroll_and_slice(&mut idx, &mut offset, 0, 0);
        assert!(start <= end);
        assert_eq!(end, 0);

        let (mut offset, mut idx) = (0, 3);
        let (start, end) = adjust_scroll_and_slice(&mut idx, &mut offset, 0, 10);
        assert!(start <= end && end <= 10);
    }
}
