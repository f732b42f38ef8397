//! The catalog operations: categories, folders, and the streaming-server
//! toggle. Each is a single-shot call taking primitives and returning a
//! record, a list of records, or nothing.

use reqwest::Method;

use crate::model::{Category, Folder};

use super::types::CreateCategoryRequest;
use super::{CatalogClient, CatalogError};

impl CatalogClient {
    pub fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let resp = self.send_ok(self.request(Method::GET, "/categories"), "list categories")?;
        resp.json()
            .map_err(|e| CatalogError::transport("parse categories", e))
    }

    pub fn get_category(&self, id: i64) -> Result<Category, CatalogError> {
        let resp = self.send_ok(
            self.request(Method::GET, &format!("/categories/{}", id)),
            "get category",
        )?;
        resp.json()
            .map_err(|e| CatalogError::transport("parse category", e))
    }

    pub fn create_category(&self, name: &str) -> Result<Category, CatalogError> {
        let resp = self.send_ok(
            self.request(Method::POST, "/categories")
                .json(&CreateCategoryRequest { name }),
            "create category",
        )?;
        resp.json()
            .map_err(|e| CatalogError::transport("parse created category", e))
    }

    /// Not idempotent: deleting an already-deleted id fails with NotFound.
    pub fn delete_category(&self, id: i64) -> Result<(), CatalogError> {
        self.send_ok(
            self.request(Method::DELETE, &format!("/categories/{}", id)),
            "delete category",
        )?;
        Ok(())
    }

    pub fn list_folders(&self, category_id: i64) -> Result<Vec<Folder>, CatalogError> {
        let resp = self.send_ok(
            self.request(Method::GET, &format!("/categories/{}/folders", category_id)),
            "list folders",
        )?;
        resp.json()
            .map_err(|e| CatalogError::transport("parse folders", e))
    }

    /// Runs the backend-side folder-picking flow and registers the picked
    /// path under the category. Fails with Cancelled when the user aborts
    /// the selection.
    pub fn create_folder_source(&self, category_id: i64) -> Result<Folder, CatalogError> {
        let resp = self.send_ok(
            self.request(Method::POST, &format!("/categories/{}/folders", category_id)),
            "create folder source",
        )?;
        resp.json()
            .map_err(|e| CatalogError::transport("parse created folder", e))
    }

    pub fn delete_folder(&self, id: i64) -> Result<(), CatalogError> {
        self.send_ok(
            self.request(Method::DELETE, &format!("/folders/{}", id)),
            "delete folder",
        )?;
        Ok(())
    }

    /// Stage the next folder pick, standing in for the OS directory dialog.
    pub fn select_folder_source(&self, path: &str) -> Result<(), CatalogError> {
        self.send_ok(
            self.request(Method::POST, "/picker/select")
                .json(&serde_json::json!({ "path": path })),
            "select folder source",
        )?;
        Ok(())
    }

    /// Fails with Conflict if the streaming server is already running.
    pub fn start_server(&self) -> Result<(), CatalogError> {
        self.send_ok(self.request(Method::POST, "/server/start"), "start server")?;
        Ok(())
    }

    /// Fails with Conflict if the streaming server is already stopped.
    pub fn stop_server(&self) -> Result<(), CatalogError> {
        self.send_ok(self.request(Method::POST, "/server/stop"), "stop server")?;
        Ok(())
    }
}
