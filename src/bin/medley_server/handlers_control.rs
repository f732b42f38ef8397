use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct SelectFolderRequest {
    path: String,
}

/// Stage a folder path for the next folder-create call.
pub(super) async fn select_folder(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectFolderRequest>,
) -> Result<Json<serde_json::Value>, Response> {
    let path = payload.path.trim().to_string();
    if path.is_empty() {
        return Err(invalid_argument("path is required"));
    }
    state.picker.lock().await.push_back(path);
    Ok(Json(serde_json::json!({"staged": true})))
}

pub(super) async fn start_server(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut slot = state.stream.lock().await;
    if slot.is_some() {
        return Err(conflict("streaming server already running"));
    }

    let handle = stream::start(state.clone(), state.stream_addr)
        .await
        .map_err(internal_error)?;
    let addr = handle.addr;
    *slot = Some(handle);
    Ok(Json(
        serde_json::json!({"status": "running", "addr": addr.to_string()}),
    ))
}

pub(super) async fn stop_server(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, Response> {
    let mut slot = state.stream.lock().await;
    match slot.take() {
        Some(handle) => {
            handle.shutdown();
            Ok(Json(serde_json::json!({"status": "stopped"})))
        }
        None => Err(conflict("streaming server is not running")),
    }
}
