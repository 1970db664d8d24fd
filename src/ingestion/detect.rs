//! File format detection from declared name and content

use serde::{Deserialize, Serialize};
use std::io::Cursor;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const DOCX_MARKER: &str = "word/document.xml";

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
}

impl FileKind {
    /// Detect file kind from extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolve the declared type of a filename, via MIME mapping first and
    /// raw extension second
    pub fn from_declared(filename: &str) -> Option<Self> {
        if let Some(mime) = mime_guess::from_path(filename).first() {
            match mime.essence_str() {
                "application/pdf" => return Some(Self::Pdf),
                DOCX_MIME => return Some(Self::Docx),
                _ => {}
            }
        }
        let ext = filename.rsplit('.').next().unwrap_or("");
        Self::from_extension(ext)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
        }
    }
}

/// Detect the actual format from the content itself.
///
/// The declared extension is never trusted on its own: a renamed file is
/// dispatched by what its bytes say it is.
pub fn detect(filename: &str, data: &[u8]) -> Result<FileKind> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(FileKind::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return detect_zip(filename, data);
    }
    Err(Error::unsupported(
        "content does not match any supported format (expected PDF or DOCX)",
    ))
}

/// A DOCX file is a zip archive carrying a word/document.xml entry. A
/// readable archive without that entry is some other OOXML format.
fn detect_zip(filename: &str, data: &[u8]) -> Result<FileKind> {
    let archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| Error::corrupt(filename, format!("unreadable zip archive: {}", e)))?;

    if archive.file_names().any(|name| name == DOCX_MARKER) {
        Ok(FileKind::Docx)
    } else {
        Err(Error::unsupported("zip archive is not a Word document"))
    }
}
