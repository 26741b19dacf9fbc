//! Case input parsing
//!
//! A case is free text. It arrives as plain text or as a small JSON object.

use serde::Deserialize;

/// One patient case to analyze
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseInput {
    /// Free-text case description
    pub case_text: String,
}

impl CaseInput {
    /// Take plain text as the case, dropping only trailing line breaks
    pub fn from_text(text: &str) -> Self {
        Self {
            case_text: text.trim_end_matches(&['\n', '\r'][..]).to_string(),
        }
    }

    /// Parse input from JSON string: `{"case_text": "..."}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_blank(&self) -> bool {
        self.case_text.trim().is_empty()
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        let truncated: String = self.case_text.chars().take(60).collect();
        if truncated.len() < self.case_text.len() {
            format!("{}...", truncated)
        } else {
            truncated
        }
    }
}
