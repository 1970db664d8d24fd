//! Job description document types shared with the browser editor

use serde::{Deserialize, Serialize};

/// Writing tone requested for the refined text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Formal corporate voice
    #[default]
    Corporate,
    /// Startup/casual voice
    Startup,
    /// Academic voice
    Academic,
}

/// Target length for the refined text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// Short form
    #[default]
    Concise,
    /// Long form
    Detailed,
}

/// Editor document state.
///
/// Owned by the UI layer; the ingestion pipeline only ever produces the value
/// assigned to `original_text`. Field names follow the editor's wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    /// Text extracted from the uploaded document
    pub original_text: String,
    /// Refined text produced by the analysis step
    pub refined_text: String,
    /// Requested tone
    pub tone: Tone,
    /// Requested length
    pub length: Length,
}

impl JobData {
    /// Create a fresh document from extracted text
    pub fn from_original_text(original_text: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_lowercase() {
        let job = JobData {
            original_text: "Senior Engineer".to_string(),
            refined_text: String::new(),
            tone: Tone::Startup,
            length: Length::Detailed,
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["originalText"], "Senior Engineer");
        assert_eq!(json["tone"], "startup");
        assert_eq!(json["length"], "detailed");
    }

    #[test]
    fn test_defaults_match_editor_initial_state() {
        let job = JobData::from_original_text("text");
        assert_eq!(job.tone, Tone::Corporate);
        assert_eq!(job.length, Length::Concise);
        assert!(job.refined_text.is_empty());
    }
}
