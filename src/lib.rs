//! jobdraft: backend for a job-description editing tool
//!
//! The core of this crate is the document ingestion pipeline: it takes an
//! uploaded PDF or DOCX file, verifies the format by content, extracts plain
//! text, and returns a normalized string ready to be edited side-by-side with
//! the refined version.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use ingestion::{extract_text, ExtractedDocument, ExtractionPipeline, FileKind};
pub use types::{
    job::{JobData, Length, Tone},
    response::ExtractResponse,
};
