use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Sidebar,
    Content,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) store: CatalogStore,
    pub(in crate::tui_shell) tasks: CatalogTasks,
    pub(in crate::tui_shell) events: Receiver<CatalogEvent>,

    pub(in crate::tui_shell) route: Route,
    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) sidebar_selected: usize,
    pub(in crate::tui_shell) content_selected: usize,

    pub(in crate::tui_shell) modal: Option<Modal>,

    // Last notice with its timestamp; the transient notification line.
    pub(in crate::tui_shell) notice: Option<(Notice, String)>,

    // The toggle trigger is disabled while a toggle call is outstanding.
    pub(in crate::tui_shell) toggle_in_flight: bool,

    pub(in crate::tui_shell) base_url: String,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(super) fn handle_catalog_event(&mut self, event: CatalogEvent) {
        if matches!(event, CatalogEvent::ServerToggled(..)) {
            self.toggle_in_flight = false;
        }
        if let Some(notice) = self.store.apply(event) {
            self.notice = Some((notice, now_ts()));
        }
        self.clamp_selections();
    }

    pub(super) fn push_error(&mut self, text: impl Into<String>) {
        self.notice = Some((
            Notice {
                level: NoticeLevel::Error,
                text: text.into(),
            },
            now_ts(),
        ));
    }

    /// Number of sidebar entries: Home, one per category, Settings.
    pub(in crate::tui_shell) fn sidebar_len(&self) -> usize {
        self.store.categories().len() + 2
    }

    /// Route behind sidebar entry `idx`, mirroring the rendered order.
    pub(in crate::tui_shell) fn sidebar_route(&self, idx: usize) -> Option<Route> {
        if idx == 0 {
            return Some(Route::Home);
        }
        let categories = self.store.categories();
        if idx <= categories.len() {
            return Some(Route::Category(categories[idx - 1].id));
        }
        if idx == categories.len() + 1 {
            return Some(Route::Settings);
        }
        None
    }

    /// Rows selectable in the content pane of the current screen.
    pub(in crate::tui_shell) fn content_len(&self) -> usize {
        match self.route {
            Route::Home | Route::Settings => self.store.categories().len(),
            Route::Category(_) => match self.store.view() {
                crate::catalog::CategoryView::Ready { folders, .. } => folders.len(),
                _ => 0,
            },
        }
    }

    pub(super) fn clamp_selections(&mut self) {
        self.sidebar_selected = self
            .sidebar_selected
            .min(self.sidebar_len().saturating_sub(1));
        self.content_selected = self
            .content_selected
            .min(self.content_len().saturating_sub(1));
    }

    pub(super) fn move_up(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar_selected = self.sidebar_selected.saturating_sub(1),
            Focus::Content => self.content_selected = self.content_selected.saturating_sub(1),
        }
    }

    pub(super) fn move_down(&mut self) {
        match self.focus {
            Focus::Sidebar => {
                let max = self.sidebar_len().saturating_sub(1);
                self.sidebar_selected = (self.sidebar_selected + 1).min(max);
            }
            Focus::Content => {
                let max = self.content_len().saturating_sub(1);
                self.content_selected = (self.content_selected + 1).min(max);
            }
        }
    }
}
