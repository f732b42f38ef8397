use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let status = app.store.server_status();
    let status_style = if status.is_running() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Medley", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::raw(app.base_url.as_str()),
        Span::raw("  server: "),
        Span::styled(status.to_string(), status_style),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Sidebar + content
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(chunks[1]);

    views::sidebar::render(frame, body[0], app);
    match app.route {
        Route::Home => views::home::render(frame, body[1], app),
        Route::Category(_) => views::category::render(frame, body[1], app),
        Route::Settings => views::settings::render(frame, body[1], app),
    }

    // Notice + key hints
    let mut footer = Vec::new();
    if let Some((notice, ts)) = &app.notice {
        let style = match notice.level {
            NoticeLevel::Info => Style::default().fg(Color::White),
            NoticeLevel::Error => Style::default().fg(Color::Red),
        };
        footer.push(Line::from(vec![
            Span::styled(
                format!("{} ", fmt_ts_ui(ts)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(notice.text.as_str(), style),
        ]));
    } else {
        footer.push(Line::from(""));
    }
    footer.push(Line::from(Span::styled(
        hints(app),
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(
        Paragraph::new(footer).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    if app.modal.is_some() {
        modal::draw_modal(frame, app);
    }
}

fn hints(app: &App) -> &'static str {
    if app.modal.is_some() {
        return "Enter: confirm  Esc: cancel";
    }
    match app.route {
        Route::Home => "Enter: open  a: add category  d: remove  r: refresh  q: quit",
        Route::Category(_) => "a: add folder  d: remove folder  Esc: home  q: quit",
        Route::Settings => "t: start/stop server  a: add category  d: remove  Esc: home",
    }
}
