//! Document extraction endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::ExtractResponse;

/// POST /api/extract - Upload a file and get its normalized text
///
/// The first field of the multipart body is treated as the upload; the UI
/// serializes uploads, so additional fields are ignored.
pub async fn extract_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>> {
    if let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("Failed to read multipart field: {}", e)))?
    {
        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("upload_{}.bin", Uuid::new_v4()));

        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| Error::internal(format!("Failed to read file: {}", e)))?;

        tracing::info!("Extracting text from {} ({} bytes)", filename, data.len());

        let doc = state.pipeline().extract(&filename, &data)?;

        tracing::info!(
            "Extracted {} characters from {} ({})",
            doc.text.len(),
            filename,
            doc.kind.display_name()
        );

        return Ok(Json(ExtractResponse::from_document(filename, doc)));
    }

    Err(Error::unsupported("request contained no file"))
}
