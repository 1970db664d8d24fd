//! Ingestion pipeline orchestration

use sha2::{Digest, Sha256};

use crate::config::IngestConfig;
use crate::error::{Error, Result};

use super::detect::{self, FileKind};
use super::normalize::normalize;
use super::parser;

/// Extracted document with normalized text and metadata
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Detected format
    pub kind: FileKind,
    /// Normalized text content
    pub text: String,
    /// SHA-256 of the normalized text, for re-upload dedup
    pub content_hash: String,
    /// Page count (PDF only)
    pub page_count: Option<u32>,
    /// Size of the input in bytes
    pub byte_size: usize,
}

/// Main extraction pipeline.
///
/// Stateless apart from its configuration; a single instance can serve
/// concurrent extractions, each call operating only on its own input buffer.
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    config: IngestConfig,
}

impl ExtractionPipeline {
    /// Create a new extraction pipeline
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Extract normalized text from an uploaded file.
    ///
    /// The size ceiling is checked before any parse attempt. The declared
    /// extension gates the request, but the actual dispatch is decided by the
    /// content itself; on a mismatch, detection wins.
    pub fn extract(&self, filename: &str, data: &[u8]) -> Result<ExtractedDocument> {
        if data.len() > self.config.max_file_size {
            return Err(Error::TooLarge {
                size: data.len(),
                limit: self.config.max_file_size,
            });
        }

        let declared = FileKind::from_declared(filename).ok_or_else(|| {
            Error::unsupported(format!(
                "'{}' is not a PDF or DOCX file (by name)",
                filename
            ))
        })?;

        let kind = detect::detect(filename, data)?;
        if kind != declared {
            tracing::warn!(
                "'{}' declared as {} but content is {}, using content",
                filename,
                declared.display_name(),
                kind.display_name()
            );
        }

        let (raw, page_count) = match kind {
            FileKind::Pdf => {
                let (text, pages) = parser::parse_pdf(filename, data)?;
                (text, Some(pages))
            }
            FileKind::Docx => (parser::parse_docx(filename, data)?, None),
        };

        let text = normalize(&raw);
        if text.is_empty() {
            return Err(Error::EmptyDocument(filename.to_string()));
        }

        Ok(ExtractedDocument {
            kind,
            content_hash: hash_content(&text),
            text,
            page_count,
            byte_size: data.len(),
        })
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

/// Extract with default configuration, returning just the text
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    ExtractionPipeline::default()
        .extract(filename, data)
        .map(|doc| doc.text)
}

/// Hash content for deduplication
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Cursor;

    fn make_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut Cursor::new(&mut buf)).unwrap();
        buf
    }

    fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_pdf_extraction_is_deterministic() {
        let data = make_pdf(&["Senior Rust Engineer"]);
        let pipeline = ExtractionPipeline::default();

        let first = pipeline.extract("jd.pdf", &data).unwrap();
        let second = pipeline.extract("jd.pdf", &data).unwrap();

        assert!(first.text.contains("Senior Rust Engineer"));
        assert_eq!(first.text, second.text);
        assert_eq!(first.content_hash, second.content_hash);
        assert_eq!(first.kind, FileKind::Pdf);
        assert_eq!(first.page_count, Some(1));
    }

    #[test]
    fn test_pdf_pages_in_document_order() {
        let data = make_pdf(&["First page", "Second page"]);
        let doc = ExtractionPipeline::default().extract("jd.pdf", &data).unwrap();

        assert_eq!(doc.page_count, Some(2));
        let first = doc.text.find("First page").unwrap();
        let second = doc.text.find("Second page").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_docx_extraction() {
        let data = make_docx(&["Senior Engineer", "", "Remote, full-time"]);
        let doc = ExtractionPipeline::default().extract("jd.docx", &data).unwrap();

        assert_eq!(doc.kind, FileKind::Docx);
        assert_eq!(doc.page_count, None);
        assert_eq!(doc.text, "Senior Engineer\n\nRemote, full-time");
    }

    #[test]
    fn test_extension_gate_rejects_unknown_names() {
        let data = make_pdf(&["text"]);
        let err = ExtractionPipeline::default()
            .extract("notes.txt", &data)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_content_wins_over_declared_extension() {
        // A PDF renamed to .docx is still dispatched as a PDF
        let data = make_pdf(&["Mislabeled document"]);
        let doc = ExtractionPipeline::default().extract("jd.docx", &data).unwrap();
        assert_eq!(doc.kind, FileKind::Pdf);
    }

    #[test]
    fn test_non_document_content_is_unsupported() {
        let err = ExtractionPipeline::default()
            .extract("image.pdf", b"\x89PNG\r\n\x1a\nrest")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_pdf_without_text_is_empty_document() {
        let data = make_pdf(&[]);
        let err = ExtractionPipeline::default()
            .extract("blank.pdf", &data)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyDocument(_)));
    }

    #[test]
    fn test_truncated_docx_is_corrupt() {
        let mut data = make_docx(&["Senior Engineer"]);
        data.truncate(data.len() / 2);
        let err = ExtractionPipeline::default()
            .extract("jd.docx", &data)
            .unwrap_err();
        assert!(matches!(err, Error::CorruptDocument { .. }));
    }

    #[test]
    fn test_over_ceiling_fails_before_parsing() {
        let pipeline = ExtractionPipeline::new(IngestConfig { max_file_size: 16 });
        // Not even close to a valid PDF; the ceiling check must come first
        let err = pipeline
            .extract("big.pdf", &vec![0u8; 64])
            .unwrap_err();
        assert!(matches!(err, Error::TooLarge { size: 64, limit: 16 }));
    }

    #[test]
    fn test_extract_text_returns_normalized_string() {
        let data = make_docx(&["Line one", "", "", "", "Line two"]);
        let text = extract_text("jd.docx", &data).unwrap();
        assert_eq!(text, "Line one\n\n\nLine two");
    }
}
