//! API routes for the extraction server

pub mod extract;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Extraction - with larger body limit for file uploads
        .route(
            "/extract",
            post(extract::extract_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "jobdraft",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Document ingestion for the job-description editor",
        "formats": ["pdf", "docx"],
        "endpoints": {
            "POST /api/extract": "Upload a PDF or DOCX and receive normalized text",
            "GET /api/info": "Service metadata"
        }
    }))
}
