use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::super::app::{App, Focus};

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut rows = Vec::with_capacity(app.sidebar_len());
    rows.push(ListItem::new("Home"));
    for c in app.store.categories() {
        rows.push(ListItem::new(format!("  {}", c.name)));
    }
    rows.push(ListItem::new("Settings"));

    let mut state = ListState::default();
    state.select(Some(app.sidebar_selected.min(rows.len().saturating_sub(1))));

    let highlight = if app.focus == Focus::Sidebar {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let list = List::new(rows)
        .block(Block::default().borders(Borders::RIGHT))
        .highlight_style(highlight);
    frame.render_stateful_widget(list, area, &mut state);
}
