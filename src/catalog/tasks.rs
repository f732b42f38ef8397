//! Background drivers for the store's remote calls.
//!
//! One thread per call; the view stays interactive while a call is
//! outstanding and completions land on the UI thread as [`CatalogEvent`]s.
//! In-flight calls are never cancelled, only ignored at application time
//! when their ticket has gone stale.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::remote::CatalogClient;

use super::events::CatalogEvent;
use super::store::{FolderTicket, SelectTicket, ToggleTicket};
use crate::model::ServerStatus;

pub struct CatalogTasks {
    client: Arc<CatalogClient>,
    tx: Sender<CatalogEvent>,
}

impl CatalogTasks {
    pub fn new(client: CatalogClient) -> (Self, Receiver<CatalogEvent>) {
        let (tx, rx) = channel();
        (
            Self {
                client: Arc::new(client),
                tx,
            },
            rx,
        )
    }

    pub fn spawn_refresh(&self) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let _ = tx.send(CatalogEvent::CategoriesRefreshed(client.list_categories()));
        });
    }

    /// Fetch the category record and its folder list as one unit.
    pub fn spawn_select(&self, ticket: SelectTicket) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let res = client.get_category(ticket.id).and_then(|category| {
                let folders = client.list_folders(ticket.id)?;
                Ok((category, folders))
            });
            let _ = tx.send(CatalogEvent::CategorySelected(ticket, res));
        });
    }

    pub fn spawn_add_category(&self, name: String) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let _ = tx.send(CatalogEvent::CategoryAdded(client.create_category(&name)));
        });
    }

    pub fn spawn_remove_category(&self, id: i64) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let _ = tx.send(CatalogEvent::CategoryRemoved(id, client.delete_category(id)));
        });
    }

    /// Run the backend-side picking flow. When the client collected a path
    /// itself (the TUI's path prompt) it is staged first; `None` relies on
    /// whatever the backend has staged.
    pub fn spawn_add_folder(&self, ticket: FolderTicket, staged_path: Option<String>) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let res = match staged_path {
                Some(path) => client
                    .select_folder_source(&path)
                    .and_then(|()| client.create_folder_source(ticket.category_id)),
                None => client.create_folder_source(ticket.category_id),
            };
            let _ = tx.send(CatalogEvent::FolderAdded(ticket, res));
        });
    }

    pub fn spawn_remove_folder(&self, id: i64) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let _ = tx.send(CatalogEvent::FolderRemoved(id, client.delete_folder(id)));
        });
    }

    /// Exactly one remote call per toggle intent; no auto-retry on failure.
    pub fn spawn_toggle(&self, ticket: ToggleTicket) {
        let (client, tx) = (self.client.clone(), self.tx.clone());
        thread::spawn(move || {
            let res = match ticket.target {
                ServerStatus::Running => client.start_server(),
                ServerStatus::Stopped => client.stop_server(),
            };
            let _ = tx.send(CatalogEvent::ServerToggled(ticket, res));
        });
    }
}
