use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Command;
use crate::ui::tui_state::{Mode, UiState};

/// Requests the event loop acts on after a key has been applied to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    Run(Command),
    Copy,
}

/// Apply one terminal event to `state`.
pub fn handle_event(
    state: &mut UiState,
    evt: Event,
) -> Option<UiMsg> {
    let Event::Key(key) = evt else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiMsg::Quit);
    }

    match state.mode {
        Mode::Browse => browse_key(state, key),
        Mode::Filter => {
            filter_key(state, key);
            None
        }
        Mode::ChooseDirectory => directory_key(state, key),
    }
}

fn browse_key(
    state: &mut UiState,
    key: KeyEvent,
) -> Option<UiMsg> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(UiMsg::Quit),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Char(' ') => state.toggle_current(),
        KeyCode::Char('a') => state.toggle_all_visible(),
        KeyCode::Char('/') => state.mode = Mode::Filter,
        KeyCode::Char('o') => state.begin_choose_directory(),
        KeyCode::Char('r') | KeyCode::F(5) => return Some(UiMsg::Run(Command::Refresh)),
        KeyCode::Char('p') => return Some(UiMsg::Run(Command::GeneratePaths)),
        KeyCode::Char('g') => return Some(UiMsg::Run(Command::GenerateContents)),
        KeyCode::Char('y') => return Some(UiMsg::Copy),
        KeyCode::PageUp => state.scroll_output_up(),
        KeyCode::PageDown => state.scroll_output_down(),
        _ => {}
    }
    None
}

fn filter_key(
    state: &mut UiState,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            state.search_input.clear();
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => state.mode = Mode::Browse,
        KeyCode::Up => state.move_up(),
        KeyCode::Down => state.move_down(),
        KeyCode::Backspace => {
            state.search_input.pop();
        }
        KeyCode::Char(c) => state.search_input.push(c),
        _ => return,
    }
    state.refilter();
}

fn directory_key(
    state: &mut UiState,
    key: KeyEvent,
) -> Option<UiMsg> {
    match key.code {
        KeyCode::Esc => state.mode = Mode::Browse,
        KeyCode::Enter => {
            state.mode = Mode::Browse;
            let input = state.dir_input.trim();
            if !input.is_empty() {
                return Some(UiMsg::Run(Command::ChooseDirectory(PathBuf::from(input))));
            }
        }
        KeyCode::Backspace => {
            state.dir_input.pop();
        }
        KeyCode::Char(c) => state.dir_input.push(c),
        _ => {}
    }
    None
}
