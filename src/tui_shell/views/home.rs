use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::super::app::{App, Focus};
use super::render_view_chrome;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let inner = render_view_chrome(frame, "Home", area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let mut intro = vec![Line::from("Welcome to Medley.")];
    if let Some(err) = app.store.categories_error() {
        intro.push(Line::styled(
            format!("could not load categories: {}", err),
            Style::default().fg(Color::Red),
        ));
    } else {
        intro.push(Line::from("Pick a category to browse its folders."));
    }
    frame.render_widget(Paragraph::new(intro), parts[0]);

    let categories = app.store.categories();
    let mut rows: Vec<ListItem> = categories
        .iter()
        .map(|c| ListItem::new(format!("{}  (#{})", c.name, c.id)))
        .collect();
    if rows.is_empty() {
        rows.push(ListItem::new("(no categories yet; press 'a' to add one)"));
    }

    let mut state = ListState::default();
    if !categories.is_empty() {
        state.select(Some(
            app.content_selected.min(categories.len().saturating_sub(1)),
        ));
    }

    let highlight = if app.focus == Focus::Content {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let list = List::new(rows)
        .block(Block::default().borders(Borders::TOP).title("Categories"))
        .highlight_style(highlight);
    frame.render_stateful_widget(list, parts[1], &mut state);
}
