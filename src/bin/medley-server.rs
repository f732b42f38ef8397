use std::collections::VecDeque;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use tokio::sync::{Mutex, RwLock};

use medley::model::{Category, Folder};

#[path = "medley_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "medley_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "medley_server/handlers_catalog.rs"]
mod handlers_catalog;
use self::handlers_catalog::*;
#[path = "medley_server/handlers_control.rs"]
mod handlers_control;
use self::handlers_control::*;
#[path = "medley_server/stream.rs"]
mod stream;

/// Everything the catalog persists, as one JSON document.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct CatalogData {
    #[serde(default = "default_next_id")]
    next_category_id: i64,

    #[serde(default = "default_next_id")]
    next_folder_id: i64,

    #[serde(default)]
    categories: Vec<Category>,

    #[serde(default)]
    folders: Vec<Folder>,
}

fn default_next_id() -> i64 {
    1
}

impl Default for CatalogData {
    fn default() -> Self {
        CatalogData {
            next_category_id: 1,
            next_folder_id: 1,
            categories: Vec::new(),
            folders: Vec::new(),
        }
    }
}

struct AppState {
    data_dir: PathBuf,

    // Plain-compare development token; None disables auth.
    dev_token: Option<String>,

    stream_addr: SocketAddr,

    catalog: RwLock<CatalogData>,

    // Paths staged by POST /picker/select, consumed in order by folder
    // creation. Stands in for the desktop folder dialog.
    picker: Mutex<VecDeque<String>>,

    stream: Mutex<Option<stream::StreamHandle>>,
}

#[derive(Parser)]
#[command(name = "medley-server")]
#[command(about = "Medley catalog backend (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:6464")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Data directory
    #[arg(long, default_value = "./medley-data")]
    data_dir: PathBuf,

    /// Development bearer token; when unset the API is open
    #[arg(long)]
    dev_token: Option<String>,

    /// Address the streaming listener binds when started
    #[arg(long, default_value = "127.0.0.1:3000")]
    stream_addr: SocketAddr,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;

    let catalog = load_catalog(&args.data_dir).context("load catalog")?;

    let state = Arc::new(AppState {
        data_dir: args.data_dir,
        dev_token: args.dev_token,
        stream_addr: args.stream_addr,
        catalog: RwLock::new(catalog),
        picker: Mutex::new(VecDeque::new()),
        stream: Mutex::new(None),
    });

    let api = Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).delete(delete_category),
        )
        .route(
            "/categories/:id/folders",
            get(list_folders).post(create_folder),
        )
        .route("/folders/:id", axum::routing::delete(delete_folder))
        .route("/picker/select", post(select_folder))
        .route("/server/start", post(start_server))
        .route("/server/stop", post(stop_server))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(api)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("medley-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(expected) = state.dev_token.as_deref() else {
        return next.run(req).await;
    };

    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };
    if token != expected {
        return unauthorized();
    }

    next.run(req).await
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
