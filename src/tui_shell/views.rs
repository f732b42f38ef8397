use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

pub(super) mod category;
pub(super) mod home;
pub(super) mod settings;
pub(super) mod sidebar;

fn render_view_chrome(frame: &mut ratatui::Frame, title: &str, area: Rect) -> Rect {
    let header = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    ));
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
