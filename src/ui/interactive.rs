use std::{io, panic};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

use crate::io::clipboard;
use crate::session::Session;
use crate::ui::{tui_events, tui_render, tui_state::UiState};

/// Opens the browser TUI on `session` and runs until the user quits.
pub fn run_tui(session: Session) -> Result<()> {
    // Setup panic hook to restore terminal state on panic
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let mut state = UiState::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state, event::read);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

/// Draw, read one event, apply it; repeat until a quit message.
pub fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut UiState,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|f| tui_render::render(f, state))?;

        let evt = next_event()?;
        match tui_events::handle_event(state, evt) {
            Some(tui_events::UiMsg::Quit) => return Ok(()),
            Some(tui_events::UiMsg::Run(command)) => state.run(command),
            Some(tui_events::UiMsg::Copy) => copy_output(state),
            None => {}
        }
    }
}

fn copy_output(state: &mut UiState) {
    if state.output.is_empty() {
        state.set_status("Nothing to copy");
        return;
    }
    match clipboard::copy_to_clipboard(&state.output, true) {
        Ok(()) => state.set_status("Copied output to clipboard"),
        Err(e) => {
            tracing::warn!("{e}");
            state.set_status(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::{collections::VecDeque, fs};

    #[test]
    fn scripted_session_generates_contents_then_quits() -> anyhow::Result<()> {
        let td = tempfile::tempdir()?;
        fs::write(td.path().join("a.txt"), "hello")?;
        let mut state = UiState::new(Session::open(td.path())?);

        let mut keys: VecDeque<Event> = [' ', 'g', 'q']
            .into_iter()
            .map(|c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
            .collect();
        let mut terminal = Terminal::new(TestBackend::new(80, 20))?;
        event_loop(&mut terminal, &mut state, || {
            keys.pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        })?;

        assert_eq!(
            state.output,
            format!("File: a.txt\n\nhello\n{}\n", "-".repeat(80))
        );
        Ok(())
    }
}
