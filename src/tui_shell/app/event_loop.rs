use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply resolved remote calls in arrival order before drawing.
        while let Ok(ev) = app.events.try_recv() {
            app.handle_catalog_event(ev);
        }

        terminal.draw(|f| render::draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => key_dispatch::handle_key(app, k),
                _ => {}
            }
        }
    }
}
