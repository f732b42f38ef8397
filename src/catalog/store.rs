use crate::model::{Category, Folder, ServerStatus};
use crate::remote::CatalogError;

use super::events::CatalogEvent;

/// Identifies one category-selection fetch. A response is applied only if
/// its ticket generation is still the latest one issued, which is what
/// discards a slow response arriving after the user navigated away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectTicket {
    pub id: i64,
    seq: u64,
}

/// Identifies one add-folder call; the result is applied only if the
/// category is still the active one when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FolderTicket {
    pub category_id: i64,
}

/// Carries the state a server toggle is requesting, decided from the local
/// status at issue time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleTicket {
    pub target: ServerStatus,
}

/// What the category screen currently has to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryView {
    #[default]
    None,
    Loading {
        id: i64,
    },
    Ready {
        category: Category,
        folders: Vec<Folder>,
    },
    Failed {
        id: i64,
        error: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient user-visible outcome of an applied event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// The authoritative client-side catalog snapshot.
///
/// Mutations happen strictly from confirmed backend responses: nothing is
/// inserted speculatively, because entity identity is backend-assigned. On
/// any failure the snapshot is left exactly as it was.
#[derive(Debug, Default)]
pub struct CatalogStore {
    categories: Vec<Category>,
    categories_error: Option<String>,
    view: CategoryView,
    server: ServerStatus,
    select_seq: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn categories_error(&self) -> Option<&str> {
        self.categories_error.as_deref()
    }

    pub fn view(&self) -> &CategoryView {
        &self.view
    }

    pub fn server_status(&self) -> ServerStatus {
        self.server
    }

    /// Local guard for the add-category intent: a blank name is rejected
    /// here and never reaches the backend.
    pub fn prepare_add_category(&self, name: &str) -> Result<String, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "category name is empty".to_string(),
            ));
        }
        Ok(name.to_string())
    }

    /// Enter the loading state for `id` and invalidate any in-flight
    /// selection. Re-selecting while a fetch is outstanding supersedes it.
    pub fn begin_select(&mut self, id: i64) -> SelectTicket {
        self.select_seq += 1;
        self.view = CategoryView::Loading { id };
        SelectTicket {
            id,
            seq: self.select_seq,
        }
    }

    /// Drop the category view (navigation away); any in-flight selection
    /// response becomes stale.
    pub fn clear_view(&mut self) {
        self.select_seq += 1;
        self.view = CategoryView::None;
    }

    pub fn begin_add_folder(&self, category_id: i64) -> FolderTicket {
        FolderTicket { category_id }
    }

    /// Decide start vs stop from the current local status.
    pub fn begin_toggle(&self) -> ToggleTicket {
        ToggleTicket {
            target: self.server.toggled(),
        }
    }

    /// Apply a resolved remote call. Returns the notice the UI should
    /// surface, if any.
    pub fn apply(&mut self, event: CatalogEvent) -> Option<Notice> {
        match event {
            CatalogEvent::CategoriesRefreshed(res) => self.apply_refresh(res),
            CatalogEvent::CategorySelected(ticket, res) => self.apply_select(ticket, res),
            CatalogEvent::CategoryAdded(res) => self.apply_category_added(res),
            CatalogEvent::CategoryRemoved(id, res) => self.apply_category_removed(id, res),
            CatalogEvent::FolderAdded(ticket, res) => self.apply_folder_added(ticket, res),
            CatalogEvent::FolderRemoved(id, res) => self.apply_folder_removed(id, res),
            CatalogEvent::ServerToggled(ticket, res) => self.apply_toggle(ticket, res),
        }
    }

    /// Refreshes apply in arrival order: the last-resolving call wins,
    /// whatever order the calls were started in.
    fn apply_refresh(&mut self, res: Result<Vec<Category>, CatalogError>) -> Option<Notice> {
        match res {
            Ok(categories) => {
                self.categories = categories;
                self.categories_error = None;
                None
            }
            Err(err) => {
                self.categories_error = Some(err.to_string());
                Some(Notice::error(format!("load categories: {}", err)))
            }
        }
    }

    fn apply_select(
        &mut self,
        ticket: SelectTicket,
        res: Result<(Category, Vec<Folder>), CatalogError>,
    ) -> Option<Notice> {
        if ticket.seq != self.select_seq {
            // Stale: a newer selection (or navigation away) superseded it.
            return None;
        }
        match res {
            Ok((category, folders)) => {
                self.view = CategoryView::Ready { category, folders };
                None
            }
            Err(err) => {
                self.view = CategoryView::Failed {
                    id: ticket.id,
                    error: err.to_string(),
                };
                Some(Notice::error(format!("open category: {}", err)))
            }
        }
    }

    fn apply_category_added(&mut self, res: Result<Category, CatalogError>) -> Option<Notice> {
        match res {
            Ok(category) => {
                if self.categories.iter().any(|c| c.id == category.id) {
                    return None;
                }
                let name = category.name.clone();
                self.categories.push(category);
                Some(Notice::info(format!("added category {}", name)))
            }
            Err(err) => Some(Notice::error(format!("add category: {}", err))),
        }
    }

    fn apply_category_removed(
        &mut self,
        id: i64,
        res: Result<(), CatalogError>,
    ) -> Option<Notice> {
        match res {
            Ok(()) => {
                self.categories.retain(|c| c.id != id);
                if self.viewed_category_id() == Some(id) {
                    self.clear_view();
                }
                Some(Notice::info("removed category"))
            }
            Err(err) => Some(Notice::error(format!("remove category: {}", err))),
        }
    }

    fn apply_folder_added(
        &mut self,
        ticket: FolderTicket,
        res: Result<Folder, CatalogError>,
    ) -> Option<Notice> {
        match res {
            Ok(folder) => {
                // Only append while the originating category is still on
                // screen; a response landing after navigation is dropped.
                let CategoryView::Ready { category, folders } = &mut self.view else {
                    return None;
                };
                if category.id != ticket.category_id {
                    return None;
                }
                if folders.iter().any(|f| f.id == folder.id) {
                    return None;
                }
                let path = folder.path.clone();
                folders.push(folder);
                Some(Notice::info(format!("added folder {}", path)))
            }
            Err(CatalogError::Cancelled) => Some(Notice::info("folder selection cancelled")),
            Err(err) => Some(Notice::error(format!("add folder: {}", err))),
        }
    }

    fn apply_folder_removed(&mut self, id: i64, res: Result<(), CatalogError>) -> Option<Notice> {
        match res {
            Ok(()) => {
                if let CategoryView::Ready { folders, .. } = &mut self.view {
                    folders.retain(|f| f.id != id);
                }
                Some(Notice::info("removed folder"))
            }
            Err(err) => Some(Notice::error(format!("remove folder: {}", err))),
        }
    }

    fn apply_toggle(&mut self, ticket: ToggleTicket, res: Result<(), CatalogError>) -> Option<Notice> {
        match res {
            Ok(()) => {
                self.server = ticket.target;
                Some(Notice::info(match ticket.target {
                    ServerStatus::Running => "server started",
                    ServerStatus::Stopped => "server stopped",
                }))
            }
            Err(err) => Some(Notice::error(format!("toggle server: {}", err))),
        }
    }

    fn viewed_category_id(&self) -> Option<i64> {
        match &self.view {
            CategoryView::None => None,
            CategoryView::Loading { id } | CategoryView::Failed { id, .. } => Some(*id),
            CategoryView::Ready { category, .. } => Some(category.id),
        }
    }
}

#[cfg(test)]
#[path = "../tests/catalog/store_tests.rs"]
mod tests;
