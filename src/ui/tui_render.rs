use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::ui::tui_state::{Mode, UiState, adjust_scroll_and_slice};

/// Renders the TUI given the current state, updating scroll offsets.
pub fn render(
    frame: &mut Frame,
    state: &mut UiState,
) {
    // Input bar, body, status line, help bar
    let [input_area, body, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let (title, input) = match state.mode {
        Mode::ChooseDirectory => (
            "Choose directory (Enter to open, Esc to cancel)".to_owned(),
            state.dir_input.clone(),
        ),
        Mode::Filter => (
            "Fuzzy Search (Enter to keep, Esc to clear)".to_owned(),
            state.search_input.clone(),
        ),
        Mode::Browse => (
            format!("Root ({} selected)", state.session.selected_count()),
            state.session.root().display().to_string(),
        ),
    };
    let bar = Paragraph::new(input).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(bar, input_area);

    let [list_area, output_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(body);

    let max_lines = list_area.height.saturating_sub(2) as usize;
    let (offset, end) = adjust_scroll_and_slice(
        &mut state.selected_idx,
        &mut state.scroll_offset,
        max_lines,
        state.filtered.len(),
    );
    let entries = state.session.entries();
    let items: Vec<ListItem> = state.filtered[offset..end]
        .iter()
        .map(|&idx| {
            let entry = &entries[idx];
            let mark = if entry.selected { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(entry.name.clone()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if !state.filtered.is_empty() {
        list_state.select(Some(state.selected_idx.saturating_sub(offset)));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Entries"))
        .highlight_style(Style::default().bg(Color::Blue));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let output = Paragraph::new(state.output.as_str())
        .block(Block::default().borders(Borders::ALL).title("Output"))
        .scroll((state.output_scroll, 0));
    frame.render_widget(output, output_area);

    frame.render_widget(
        Paragraph::new(state.status.as_str()).style(Style::default().fg(Color::Green)),
        status_area,
    );

    let help_text = vec![
        Span::styled("Space: Toggle  ", Style::default().fg(Color::Yellow)),
        Span::styled("a: All  ", Style::default().fg(Color::Yellow)),
        Span::styled("/: Search  ", Style::default().fg(Color::Yellow)),
        Span::styled("o: Open  ", Style::default().fg(Color::Yellow)),
        Span::styled("r: Refresh  ", Style::default().fg(Color::Yellow)),
        Span::styled("p: Paths  ", Style::default().fg(Color::Yellow)),
        Span::styled("g: Contents  ", Style::default().fg(Color::Yellow)),
        Span::styled("y: Copy  ", Style::default().fg(Color::Yellow)),
        Span::styled("q: Quit", Style::default().fg(Color::Yellow)),
    ];
    frame.render_widget(Paragraph::new(Line::from(help_text)), help_area);
}
