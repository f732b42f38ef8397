use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct CreateCategoryRequest {
    name: String,
}

pub(super) async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    let data = state.catalog.read().await;
    Json(data.categories.clone())
}

pub(super) async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, Response> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(invalid_argument("category name is required"));
    }

    let mut data = state.catalog.write().await;
    if data
        .categories
        .iter()
        .any(|c| c.name.eq_ignore_ascii_case(&name))
    {
        return Err(conflict(&format!("category \"{}\" already exists", name)));
    }

    let id = data.next_category_id;
    data.next_category_id += 1;
    let category = Category { id, name };
    data.categories.push(category.clone());

    persist_catalog(&state, &data).map_err(internal_error)?;
    Ok(Json(category))
}

pub(super) async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, Response> {
    let data = state.catalog.read().await;
    match data.categories.iter().find(|c| c.id == id) {
        Some(category) => Ok(Json(category.clone())),
        None => Err(not_found(&format!("category {} not found", id))),
    }
}

pub(super) async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut data = state.catalog.write().await;
    let before = data.categories.len();
    data.categories.retain(|c| c.id != id);
    if data.categories.len() == before {
        return Err(not_found(&format!("category {} not found", id)));
    }

    persist_catalog(&state, &data).map_err(internal_error)?;
    Ok(Json(serde_json::json!({})))
}

pub(super) async fn list_folders(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<Folder>>, Response> {
    let data = state.catalog.read().await;
    if !data.categories.iter().any(|c| c.id == category_id) {
        return Err(not_found(&format!("category {} not found", category_id)));
    }
    let folders: Vec<Folder> = data
        .folders
        .iter()
        .filter(|f| f.category_id == category_id)
        .cloned()
        .collect();
    Ok(Json(folders))
}

/// Attach the next staged picker path to the category. No staged path
/// means the user backed out of the dialog.
pub(super) async fn create_folder(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
) -> Result<Json<Folder>, Response> {
    let mut data = state.catalog.write().await;
    if !data.categories.iter().any(|c| c.id == category_id) {
        return Err(not_found(&format!("category {} not found", category_id)));
    }

    let Some(path) = state.picker.lock().await.pop_front() else {
        return Err(cancelled());
    };

    if data
        .folders
        .iter()
        .any(|f| f.category_id == category_id && f.path == path)
    {
        return Err(conflict(&format!(
            "folder \"{}\" is already in this category",
            path
        )));
    }

    let id = data.next_folder_id;
    data.next_folder_id += 1;
    let folder = Folder {
        id,
        category_id,
        path,
    };
    data.folders.push(folder.clone());

    persist_catalog(&state, &data).map_err(internal_error)?;
    Ok(Json(folder))
}

pub(super) async fn delete_folder(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut data = state.catalog.write().await;
    let before = data.folders.len();
    data.folders.retain(|f| f.id != id);
    if data.folders.len() == before {
        return Err(not_found(&format!("folder {} not found", id)));
    }

    persist_catalog(&state, &data).map_err(internal_error)?;
    Ok(Json(serde_json::json!({})))
}
