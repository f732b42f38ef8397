use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::super::app::{App, Focus};
use super::render_view_chrome;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let inner = render_view_chrome(frame, "Settings", area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(inner);

    render_server_block(frame, parts[0], app);
    render_categories_block(frame, parts[1], app);
}

fn render_server_block(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let status = app.store.server_status();
    let status_style = if status.is_running() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let action = if app.toggle_in_flight {
        "(waiting for the server...)"
    } else if status.is_running() {
        "press 't' to stop"
    } else {
        "press 't' to start"
    };

    // The form below is presentational; only the toggle is wired.
    let lines = vec![
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(status.to_string(), status_style),
            Span::raw("  "),
            Span::styled(action, Style::default().fg(Color::Gray)),
        ]),
        Line::from(format!("Remote: {}", app.base_url)),
        Line::from("Port: 3000"),
        Line::from("Quality: original"),
        Line::from("Transcoding: off"),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Streaming Server"),
        ),
        area,
    );
}

fn render_categories_block(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let categories = app.store.categories();
    let mut rows: Vec<ListItem> = categories
        .iter()
        .map(|c| ListItem::new(format!("#{}  {}", c.id, c.name)))
        .collect();
    if rows.is_empty() {
        rows.push(ListItem::new("(no categories)"));
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
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Manage Categories  (a: add  d: remove)"),
        )
        .highlight_style(highlight);
    frame.render_stateful_widget(list, area, &mut state);
}
