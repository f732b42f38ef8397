//! User intents: each produces at most one remote call, and the snapshot
//! only changes when the confirmed response comes back.

use super::*;

impl App {
    pub(in crate::tui_shell) fn intent_add_category(&mut self, name: &str) {
        // Blank names are rejected locally; no round trip.
        match self.store.prepare_add_category(name) {
            Ok(name) => self.tasks.spawn_add_category(name),
            Err(err) => self.push_error(format!("add category: {}", err)),
        }
    }

    pub(in crate::tui_shell) fn intent_remove_category(&mut self, id: i64) {
        self.tasks.spawn_remove_category(id);
    }

    /// `path` comes from the add-folder prompt; an empty one falls through
    /// to the backend picker, which reports Cancelled when nothing is
    /// staged there either.
    pub(in crate::tui_shell) fn intent_add_folder(&mut self, category_id: i64, path: &str) {
        let ticket = self.store.begin_add_folder(category_id);
        let path = path.trim();
        let staged = (!path.is_empty()).then(|| path.to_string());
        self.tasks.spawn_add_folder(ticket, staged);
    }

    pub(in crate::tui_shell) fn intent_remove_folder(&mut self, id: i64) {
        self.tasks.spawn_remove_folder(id);
    }

    pub(super) fn intent_toggle_server(&mut self) {
        if self.toggle_in_flight {
            return;
        }
        self.toggle_in_flight = true;
        let ticket = self.store.begin_toggle();
        self.tasks.spawn_toggle(ticket);
    }
}
