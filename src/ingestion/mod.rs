//! Document ingestion pipeline with content-sniffed format dispatch

mod detect;
mod normalize;
mod parser;
mod pipeline;

pub use detect::FileKind;
pub use normalize::normalize;
pub use pipeline::{extract_text, ExtractedDocument, ExtractionPipeline};
