use crate::model::{Category, Folder};
use crate::remote::CatalogError;

use super::store::{FolderTicket, SelectTicket, ToggleTicket};

/// A resolved remote call, delivered to the UI thread in arrival order.
#[derive(Debug)]
pub enum CatalogEvent {
    CategoriesRefreshed(Result<Vec<Category>, CatalogError>),

    /// Category record and folder list, fetched together; either failure
    /// fails the pair so a partial folder list is never shown.
    CategorySelected(SelectTicket, Result<(Category, Vec<Folder>), CatalogError>),

    CategoryAdded(Result<Category, CatalogError>),
    CategoryRemoved(i64, Result<(), CatalogError>),

    FolderAdded(FolderTicket, Result<Folder, CatalogError>),
    FolderRemoved(i64, Result<(), CatalogError>),

    ServerToggled(ToggleTicket, Result<(), CatalogError>),
}
