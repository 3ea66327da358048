//! Offset-to-substring validation.
//!
//! A span claims that `source[start..end]` reads `text`. This module checks
//! that claim. A failed check is a data-quality signal for the caller to
//! show, never an error: bad offsets clamp, and non-integer offsets skip the
//! check entirely.

use crate::offset::{OffsetUnit, TextIndex};
use crate::span::SpanRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one span with integer offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `source[start..end]`, clamped to the source
    pub extracted_substring: String,
    /// Whether the extracted text equals the span's text
    pub matches: bool,
}

/// Validate `span` against `source_text` using character offsets.
///
/// Returns `None` unless both offsets are integers.
#[must_use]
pub fn validate(span: &SpanRecord, source_text: &str) -> Option<ValidationResult> {
    validate_in(span, source_text, OffsetUnit::Char)
}

/// Validate `span` against `source_text` with offsets counted in `unit`.
#[must_use]
pub fn validate_in(span: &SpanRecord, source_text: &str, unit: OffsetUnit) -> Option<ValidationResult> {
    validate_indexed(span, &TextIndex::new(source_text, unit))
}

fn validate_indexed(span: &SpanRecord, index: &TextIndex<'_>) -> Option<ValidationResult> {
    let (start, end) = span.indices()?;
    let extracted = index.slice(start, end);
    Some(ValidationResult {
        matches: extracted == span.text,
        extracted_substring: extracted.to_string(),
    })
}

// =============================================================================
// Per-span status and summaries
// =============================================================================

/// Why an extracted substring differs from the labeled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchHint {
    /// Offsets are in range; the text just differs (often off by one)
    Text,
    /// An offset falls outside the source and was clamped
    OutOfRange,
    /// `start > end`, so the slice is empty
    Reversed,
}

impl fmt::Display for MismatchHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchHint::Text => write!(f, "text differs"),
            MismatchHint::OutOfRange => write!(f, "offset out of range"),
            MismatchHint::Reversed => write!(f, "start after end"),
        }
    }
}

/// Status of one span after checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpanCheck {
    /// Extracted text equals the labeled text.
    Matched {
        /// Text at the span's offsets
        extracted: String,
    },
    /// Extracted text differs.
    Mismatched {
        /// Text at the span's offsets (clamped)
        extracted: String,
        /// Likely cause
        hint: MismatchHint,
    },
    /// At least one offset is not an integer.
    Skipped,
}

impl SpanCheck {
    /// The extracted text, unless skipped.
    #[must_use]
    pub fn extracted(&self) -> Option<&str> {
        match self {
            SpanCheck::Matched { extracted } | SpanCheck::Mismatched { extracted, .. } => {
                Some(extracted)
            }
            SpanCheck::Skipped => None,
        }
    }

    /// Whether the span matched.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, SpanCheck::Matched { .. })
    }

    /// Whether the span mismatched.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, SpanCheck::Mismatched { .. })
    }
}

/// Counts over one validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Spans with integer offsets
    pub checked: usize,
    /// Spans whose text matched
    pub matched: usize,
    /// Spans whose text did not match
    pub mismatched: usize,
    /// Spans skipped for non-integer offsets
    pub skipped: usize,
}

impl ValidationSummary {
    /// Count one check.
    pub fn record(&mut self, check: &SpanCheck) {
        match check {
            SpanCheck::Matched { .. } => {
                self.checked += 1;
                self.matched += 1;
            }
            SpanCheck::Mismatched { .. } => {
                self.checked += 1;
                self.mismatched += 1;
            }
            SpanCheck::Skipped => self.skipped += 1,
        }
    }

    /// Add another summary's counts to this one.
    pub fn merge(&mut self, other: &ValidationSummary) {
        self.checked += other.checked;
        self.matched += other.matched;
        self.mismatched += other.mismatched;
        self.skipped += other.skipped;
    }

    /// Total spans seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.checked + self.skipped
    }

    /// True when nothing mismatched.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.mismatched == 0
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} spans: {} matched, {} mismatched, {} skipped",
            self.total(),
            self.matched,
            self.mismatched,
            self.skipped
        )
    }
}

/// Check one span, classifying any mismatch.
#[must_use]
pub fn check(span: &SpanRecord, source_text: &str, unit: OffsetUnit) -> SpanCheck {
    check_indexed(span, &TextIndex::new(source_text, unit))
}

/// Check every span against the same source text.
#[must_use]
pub fn check_all(
    spans: &[SpanRecord],
    source_text: &str,
    unit: OffsetUnit,
) -> (Vec<SpanCheck>, ValidationSummary) {
    let index = TextIndex::new(source_text, unit);
    let mut summary = ValidationSummary::default();
    let checks = spans
        .iter()
        .map(|span| {
            let check = check_indexed(span, &index);
            summary.record(&check);
            check
        })
        .collect();
    (checks, summary)
}

fn check_indexed(span: &SpanRecord, index: &TextIndex<'_>) -> SpanCheck {
    let (Some((start, end)), Some(result)) = (span.indices(), validate_indexed(span, index)) else {
        return SpanCheck::Skipped;
    };

    if result.matches {
        return SpanCheck::Matched {
            extracted: result.extracted_substring,
        };
    }

    let hint = if start > end {
        MismatchHint::Reversed
    } else if !index.in_bounds(start, end) {
        MismatchHint::OutOfRange
    } else {
        MismatchHint::Text
    };
    log::debug!(
        "span '{}' at {}-{} reads '{}' ({})",
        span.text,
        start,
        end,
        result.extracted_substring,
        hint
    );

    SpanCheck::Mismatched {
        extracted: result.extracted_substring,
        hint,
    }
}
