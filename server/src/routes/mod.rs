//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three JSON flow endpoints under `/api`, a health probe, and a static
//! fallback that serves the built client bundle. CORS is wide open: the
//! API carries no credentials and the client may be served from elsewhere
//! during development.

pub mod flows;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the directory holding the built client bundle.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("client/dist"))
}

/// Full application router: API routes + static client files.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/chat", post(flows::chat))
        .route("/api/analyze-image", post(flows::analyze_image))
        .route("/api/summarize-article", post(flows::summarize_article))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
