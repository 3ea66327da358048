//! Save-payload projection.

use crate::error::Result;
use crate::span::{Offset, SpanRecord};
use serde::{Deserialize, Serialize};

/// One saved skill: a span plus an always-empty reviewer note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSkill {
    /// Labeled text
    pub text: String,
    /// Start offset, as reported
    pub start: Offset,
    /// End offset, as reported
    pub end: Offset,
    /// Reviewer note, empty on save
    pub note: String,
}

impl From<&SpanRecord> for SavedSkill {
    fn from(span: &SpanRecord) -> Self {
        Self {
            text: span.text.clone(),
            start: span.start.clone(),
            end: span.end.clone(),
            note: String::new(),
        }
    }
}

/// What a posting's annotations would be saved as.
///
/// ```text
/// { "job_id": "posting_1", "description": "...",
///   "extracted_skills": [ { "text": "Python", "start": 77, "end": 83, "note": "" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    /// Posting identifier
    pub job_id: String,
    /// Full posting text
    pub description: String,
    /// Spans in normalization order
    pub extracted_skills: Vec<SavedSkill>,
}

impl SavePayload {
    /// Number of skills captured.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.extracted_skills.len()
    }

    /// Pretty-printed JSON preview.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Project spans into the save format. No validation happens here.
#[must_use]
pub fn build_save_payload(
    job_id: impl Into<String>,
    source_text: impl Into<String>,
    spans: &[SpanRecord],
) -> SavePayload {
    SavePayload {
        job_id: job_id.into(),
        description: source_text.into(),
        extracted_skills: spans.iter().map(SavedSkill::from).collect(),
    }
}
