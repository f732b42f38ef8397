//! The read-only listener media players hit while the streaming server
//! is up. Serves the catalog; never mutates it.

use super::*;

pub(super) struct StreamHandle {
    pub(super) addr: SocketAddr,
    task: tokio::task::JoinHandle<()>,
}

impl StreamHandle {
    pub(super) fn shutdown(self) {
        self.task.abort();
    }
}

pub(super) async fn start(state: Arc<AppState>, addr: SocketAddr) -> Result<StreamHandle> {
    let app = Router::new()
        .route("/categories", get(stream_categories))
        .route("/folders/:category_id", get(stream_folders))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind stream address {}", addr))?;
    let local_addr = listener.local_addr().context("read stream local addr")?;

    let task = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(StreamHandle {
        addr: local_addr,
        task,
    })
}

async fn stream_categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    let data = state.catalog.read().await;
    Json(data.categories.clone())
}

async fn stream_folders(
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
