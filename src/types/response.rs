//! Response types for the extraction API

use serde::{Deserialize, Serialize};

use crate::ingestion::{ExtractedDocument, FileKind};

/// Response body for a successful extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Uploaded filename
    pub filename: String,
    /// Detected document format
    pub kind: FileKind,
    /// Normalized extracted text
    pub text: String,
    /// Page count (PDF only)
    pub page_count: Option<u32>,
    /// SHA-256 of the normalized text, for re-upload dedup
    pub content_hash: String,
    /// Size of the uploaded file in bytes
    pub bytes: usize,
}

impl ExtractResponse {
    /// Build a response from an extracted document
    pub fn from_document(filename: impl Into<String>, doc: ExtractedDocument) -> Self {
        Self {
            filename: filename.into(),
            kind: doc.kind,
            text: doc.text,
            page_count: doc.page_count,
            content_hash: doc.content_hash,
            bytes: doc.byte_size,
        }
    }
}
