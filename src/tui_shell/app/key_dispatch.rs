use super::*;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Esc => {
            if app.route == Route::Home {
                app.quit = true;
            } else {
                app.goto(Route::Home);
            }
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Sidebar => Focus::Content,
                Focus::Content => Focus::Sidebar,
            };
        }
        KeyCode::Left => app.focus = Focus::Sidebar,
        KeyCode::Right => app.focus = Focus::Content,
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Char('r') => app.refresh_route(),
        KeyCode::Char('a') => handle_add(app),
        KeyCode::Char('d') => handle_remove(app),
        KeyCode::Char('t') if app.route == Route::Settings => app.intent_toggle_server(),
        _ => {}
    }
}

fn handle_add(app: &mut App) {
    match app.route {
        Route::Settings | Route::Home => {
            app.modal = Some(Modal::AddCategory {
                input: Input::default(),
            });
        }
        Route::Category(id) => {
            app.modal = Some(Modal::AddFolder {
                category_id: id,
                input: Input::default(),
            });
        }
    }
}

fn handle_remove(app: &mut App) {
    match app.route {
        // Category removal lives on the management screens.
        Route::Home | Route::Settings => {
            if let Some(c) = app.store.categories().get(app.content_selected) {
                app.modal = Some(Modal::ConfirmRemoveCategory {
                    id: c.id,
                    name: c.name.clone(),
                });
            }
        }
        Route::Category(_) => {
            if let crate::catalog::CategoryView::Ready { folders, .. } = app.store.view()
                && let Some(f) = folders.get(app.content_selected)
            {
                app.modal = Some(Modal::ConfirmRemoveFolder {
                    id: f.id,
                    path: f.path.clone(),
                });
            }
        }
    }
}
