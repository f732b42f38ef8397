use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::catalog::CategoryView;

use super::super::app::{App, Focus};
use super::render_view_chrome;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    match app.store.view() {
        CategoryView::None | CategoryView::Loading { .. } => {
            let inner = render_view_chrome(frame, "Category", area);
            frame.render_widget(Paragraph::new("loading..."), inner);
        }
        CategoryView::Failed { error, .. } => {
            let inner = render_view_chrome(frame, "Category", area);
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!("could not open category: {}", error),
                    Style::default().fg(Color::Red),
                ))
                .wrap(Wrap { trim: false }),
                inner,
            );
        }
        CategoryView::Ready { category, folders } => {
            let inner = render_view_chrome(frame, &format!("{} Library", category.name), area);

            let mut rows: Vec<ListItem> = folders
                .iter()
                .map(|f| ListItem::new(f.path.clone()))
                .collect();
            if rows.is_empty() {
                rows.push(ListItem::new("(no folders yet; press 'a' to add one)"));
            }

            let mut state = ListState::default();
            if !folders.is_empty() {
                state.select(Some(
                    app.content_selected.min(folders.len().saturating_sub(1)),
                ));
            }

            let highlight = if app.focus == Focus::Content {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let list = List::new(rows)
                .block(Block::default().borders(Borders::NONE).title("Folders"))
                .highlight_style(highlight);
            frame.render_stateful_widget(list, inner, &mut state);
        }
    }
}
