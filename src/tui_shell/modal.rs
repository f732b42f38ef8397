use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::app::App;
use super::input::Input;

pub(super) enum Modal {
    AddCategory { input: Input },
    AddFolder { category_id: i64, input: Input },
    ConfirmRemoveCategory { id: i64, name: String },
    ConfirmRemoveFolder { id: i64, path: String },
}

enum ModalAction {
    None,
    Close,
    AddCategory { name: String },
    AddFolder { category_id: i64, path: String },
    RemoveCategory { id: i64 },
    RemoveFolder { id: i64 },
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::AddCategory { name } => {
            app.modal = None;
            app.intent_add_category(&name);
        }
        ModalAction::AddFolder { category_id, path } => {
            app.modal = None;
            app.intent_add_folder(category_id, &path);
        }
        ModalAction::RemoveCategory { id } => {
            app.modal = None;
            app.intent_remove_category(id);
        }
        ModalAction::RemoveFolder { id } => {
            app.modal = None;
            app.intent_remove_folder(id);
        }
    }
}

fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match modal {
        Modal::AddCategory { input } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => ModalAction::AddCategory {
                name: input.buf.clone(),
            },
            _ => {
                apply_input_edit_key(input, key);
                ModalAction::None
            }
        },

        Modal::AddFolder { category_id, input } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => ModalAction::AddFolder {
                category_id: *category_id,
                path: input.buf.clone(),
            },
            _ => {
                apply_input_edit_key(input, key);
                ModalAction::None
            }
        },

        Modal::ConfirmRemoveCategory { id, .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') => ModalAction::RemoveCategory { id: *id },
            _ => ModalAction::None,
        },

        Modal::ConfirmRemoveFolder { id, .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') => ModalAction::RemoveFolder { id: *id },
            _ => ModalAction::None,
        },
    }
}

fn apply_input_edit_key(input: &mut Input, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };

    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = 7u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match modal {
        Modal::AddCategory { input } => draw_prompt(frame, inner, "Name: ", input),
        Modal::AddFolder { input, .. } => draw_prompt(frame, inner, "Path: ", input),
        Modal::ConfirmRemoveCategory { name, .. } => {
            let lines = vec![
                Line::from(format!("Remove category \"{}\"?", name)),
                Line::from(""),
                Line::from(Span::styled(
                    "y/Enter: remove  n/Esc: keep",
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        Modal::ConfirmRemoveFolder { path, .. } => {
            let lines = vec![
                Line::from(format!("Remove folder \"{}\"?", path)),
                Line::from(""),
                Line::from(Span::styled(
                    "y/Enter: remove  n/Esc: keep",
                    Style::default().fg(Color::Gray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
    }
}

fn draw_prompt(frame: &mut ratatui::Frame, inner: Rect, prompt: &str, input: &Input) {
    let line = Line::from(vec![
        Span::styled(prompt.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(input.buf.clone()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
    let x = prompt.len() as u16 + input.cursor as u16;
    frame.set_cursor_position((inner.x + x, inner.y));
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let title = match modal {
        Modal::AddCategory { .. } => "Add category",
        Modal::AddFolder { .. } => "Add folder",
        Modal::ConfirmRemoveCategory { .. } => "Remove category",
        Modal::ConfirmRemoveFolder { .. } => "Remove folder",
    };
    Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  ".to_string()),
        Span::styled("Esc".to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  ".to_string()),
        Span::styled("Enter".to_string(), Style::default().fg(Color::Gray)),
    ])
}
