use super::*;

impl App {
    /// Enter a screen and trigger the fetches it needs. Home and Settings
    /// refresh the category list; a category screen fetches its record and
    /// folder list, superseding any in-flight selection. Server status is
    /// never polled on entry.
    pub(in crate::tui_shell) fn goto(&mut self, route: Route) {
        self.route = route;
        self.content_selected = 0;
        match route {
            Route::Home | Route::Settings => {
                self.store.clear_view();
                self.tasks.spawn_refresh();
            }
            Route::Category(id) => {
                let ticket = self.store.begin_select(id);
                self.tasks.spawn_select(ticket);
            }
        }
        self.sync_sidebar_selection();
    }

    /// Re-trigger the current screen's fetches.
    pub(super) fn refresh_route(&mut self) {
        self.goto(self.route);
    }

    pub(super) fn activate_selection(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                if let Some(route) = self.sidebar_route(self.sidebar_selected) {
                    self.goto(route);
                }
            }
            Focus::Content => match self.route {
                Route::Home | Route::Settings => {
                    if let Some(c) = self.store.categories().get(self.content_selected) {
                        let id = c.id;
                        self.goto(Route::Category(id));
                    }
                }
                Route::Category(_) => {}
            },
        }
    }

    fn sync_sidebar_selection(&mut self) {
        let categories = self.store.categories();
        self.sidebar_selected = match self.route {
            Route::Home => 0,
            Route::Category(id) => categories
                .iter()
                .position(|c| c.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
            Route::Settings => categories.len() + 1,
        };
    }
}
