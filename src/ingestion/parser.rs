//! Format-specific text extractors

use std::io::{Cursor, Read};

use crate::error::{Error, Result};

/// Extract text from a PDF.
///
/// The document structure is validated with lopdf first so a corrupt or
/// encrypted file fails cleanly before text extraction. Page texts are joined
/// with a single newline, preserving document order. Returns the text and the
/// page count.
pub(crate) fn parse_pdf(filename: &str, data: &[u8]) -> Result<(String, u32)> {
    let doc = lopdf::Document::load_mem(data)
        .map_err(|e| Error::corrupt(filename, format!("unreadable PDF structure: {}", e)))?;

    if doc.is_encrypted() {
        return Err(Error::corrupt(filename, "PDF is encrypted"));
    }

    let page_count = doc.get_pages().len() as u32;

    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| Error::corrupt(filename, format!("text extraction failed: {}", e)))?;

    Ok((pages.join("\n"), page_count))
}

/// Extract text from a DOCX.
///
/// Paragraph text is concatenated in document order with paragraph breaks as
/// newlines; styling and tables are discarded. If docx-rs rejects the archive,
/// the raw `word/document.xml` stream is read directly as a second attempt
/// before giving up.
pub(crate) fn parse_docx(filename: &str, data: &[u8]) -> Result<String> {
    match docx_rs::read_docx(data) {
        Ok(doc) => Ok(collect_docx_text(&doc)),
        Err(e) => {
            tracing::warn!(
                "docx-rs rejected '{}' ({}), reading document.xml directly",
                filename,
                e
            );
            parse_docx_raw(filename, data)
        }
    }
}

/// Walk the parsed document tree, collecting run text.
fn collect_docx_text(doc: &docx_rs::Docx) -> String {
    let mut content = String::new();

    for child in &doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            for child in &p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in &run.children {
                        match child {
                            docx_rs::RunChild::Text(t) => content.push_str(&t.text),
                            docx_rs::RunChild::Break(_) => content.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            content.push('\n');
        }
        // Tables are skipped
    }

    content
}

/// Stream `word/document.xml` out of the archive, collecting `<w:t>` runs.
/// Paragraph ends and explicit breaks become newlines.
fn parse_docx_raw(filename: &str, data: &[u8]) -> Result<String> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| Error::corrupt(filename, format!("unreadable zip archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::corrupt(filename, format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::corrupt(filename, format!("unreadable word/document.xml: {}", e)))?;

    let mut reader = Reader::from_str(&xml);
    let mut content = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => {
                in_text = true;
            }
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::corrupt(filename, format!("invalid XML text: {}", e)))?;
                    content.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => content.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"br" => {
                content.push('\n');
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::corrupt(
                    filename,
                    format!("invalid document.xml: {}", e),
                ));
            }
            _ => {}
        }
    }

    Ok(content)
}
