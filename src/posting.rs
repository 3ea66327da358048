//! Job postings to annotate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job posting: the source text spans point into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Identifier written as `job_id` on save
    pub id: String,
    /// Posting text
    pub text: String,
}

impl Posting {
    /// Create a posting.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// First `max_chars` characters followed by `...`.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.text.chars().take(max_chars).collect();
        format!("{}...", head)
    }

    /// Posting for one reviewed entry: its own `text` if it has one, else its
    /// `job_id` looked up in `postings`.
    ///
    /// ```text
    /// {"text": "Rust wanted", "annotations": [...]}
    /// {"job_id": "posting_1", "annotations": [...]}
    /// ```
    pub fn from_entry(entry: &Value, postings: &[Posting]) -> Result<Self> {
        let job_id = entry.get("job_id").and_then(Value::as_str);

        if let Some(text) = entry.get("text").and_then(Value::as_str) {
            return Ok(Self::new(job_id.unwrap_or("custom"), text));
        }

        match job_id {
            Some(id) => postings
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| Error::invalid_input(format!("Unknown job_id '{}'", id))),
            None => Err(Error::invalid_input("Missing 'text' or 'job_id' field")),
        }
    }

    /// Selector label, e.g. `Example 1: We are looking for...`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        format!("Example {}: {}", index + 1, self.preview(50))
    }
}

/// The two sample postings shipped with the tool.
#[must_use]
pub fn builtin_postings() -> Vec<Posting> {
    vec![
        Posting::new(
            "posting_1",
            "We are looking for a Senior Software Engineer with 5+ years of experience in Python and Java. Must have strong problem-solving skills and experience with AWS.",
        ),
        Posting::new(
            "posting_2",
            "Data Scientist needed. Required: machine learning, TensorFlow, PyTorch, SQL, and R. Excellent communication skills required.",
        ),
    ]
}
