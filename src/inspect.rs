//! One render pass: a raw widget value checked against a posting.

use crate::config::Settings;
use crate::normalize::{is_empty_value, Noise, ValueKind, Visit};
use crate::posting::Posting;
use crate::save::{build_save_payload, SavePayload};
use crate::span::SpanRecord;
use crate::validate::{check_all, SpanCheck, ValidationSummary};
use serde::Serialize;
use serde_json::Value;

/// Everything derived from one raw value. Recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    /// Posting the spans point into
    pub job_id: String,
    /// Kind of the raw value as received
    pub raw_kind: ValueKind,
    /// False when the raw value is empty or false-ish
    pub has_annotations: bool,
    /// Normalized spans
    pub spans: Vec<SpanRecord>,
    /// One check per span, same order
    pub checks: Vec<SpanCheck>,
    /// Check counts
    pub summary: ValidationSummary,
    /// Entries that were not mappings
    pub noise: Vec<Noise>,
    /// Spans and noise in the order they appear in the raw value
    pub order: Vec<Visit>,
    /// Save preview
    pub payload: SavePayload,
}

impl Inspection {
    /// Spans paired with their checks.
    pub fn entries(&self) -> impl Iterator<Item = (&SpanRecord, &SpanCheck)> {
        self.spans.iter().zip(&self.checks)
    }

    /// Spans and noise interleaved in visitation order.
    pub fn items(&self) -> impl Iterator<Item = Item<'_>> {
        self.order.iter().filter_map(move |visit| match *visit {
            Visit::Span(i) => Some(Item::Span(self.spans.get(i)?, self.checks.get(i)?)),
            Visit::Noise(i) => self.noise.get(i).map(Item::Noise),
        })
    }
}

/// One entry of the raw value, as listed by [`Inspection::items`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    /// A span and its check
    Span(&'a SpanRecord, &'a SpanCheck),
    /// A skipped entry
    Noise(&'a Noise),
}

/// Normalize, check and project `raw` against `posting`.
#[must_use]
pub fn inspect(posting: &Posting, raw: &Value, settings: &Settings) -> Inspection {
    let normalized = settings.normalizer().normalize_report(raw);
    let (checks, summary) = check_all(&normalized.spans, &posting.text, settings.offset_unit);
    let payload = build_save_payload(&posting.id, &posting.text, &normalized.spans);

    log::debug!("{}: {}", posting.id, summary);

    Inspection {
        job_id: posting.id.clone(),
        raw_kind: ValueKind::of(raw),
        has_annotations: !is_empty_value(raw),
        spans: normalized.spans,
        checks,
        summary,
        noise: normalized.noise,
        order: normalized.order,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posting::builtin_postings;
    use serde_json::json;

    #[test]
    fn test_inspect_nested_widget_output() {
        let posting = &builtin_postings()[1];
        let raw = json!([[
            {"label": "machine learning", "start": 33, "end": 49},
            {"label": "TensorFlow", "start": 51, "end": 60},
            "stray",
        ]]);

        let inspection = inspect(posting, &raw, &Settings::default());

        assert_eq!(inspection.job_id, "posting_2");
        assert_eq!(inspection.raw_kind, ValueKind::Array);
        assert!(inspection.has_annotations);
        assert_eq!(inspection.spans.len(), 2);
        assert!(inspection.checks[0].is_match());
        assert_eq!(inspection.checks[1].extracted(), Some("TensorFlo"));
        assert_eq!(inspection.summary.mismatched, 1);
        assert_eq!(inspection.noise.len(), 1);
        assert_eq!(inspection.noise[0].path, "/0/2");
        assert_eq!(inspection.payload.skill_count(), 2);

        let pairs: Vec<_> = inspection.entries().map(|(s, _)| s.text.as_str()).collect();
        assert_eq!(pairs, vec!["machine learning", "TensorFlow"]);
    }

    #[test]
    fn test_items_follow_raw_order() {
        let posting = &builtin_postings()[0];
        let raw = json!([5, {"label": "Python", "start": 77, "end": 83}, [null]]);

        let inspection = inspect(posting, &raw, &Settings::default());
        let items: Vec<_> = inspection
            .items()
            .map(|item| match item {
                Item::Span(span, check) => {
                    assert!(check.is_match());
                    span.text.clone()
                }
                Item::Noise(noise) => noise.path.clone(),
            })
            .collect();

        assert_eq!(items, vec!["/0", "Python", "/2/0"]);
    }

    #[test]
    fn test_inspect_nothing_yet() {
        let posting = &builtin_postings()[0];
        let inspection = inspect(posting, &Value::Null, &Settings::default());

        assert!(!inspection.has_annotations);
        assert_eq!(inspection.raw_kind, ValueKind::Null);
        assert!(inspection.spans.is_empty());
        assert_eq!(inspection.payload.job_id, "posting_1");
        assert_eq!(inspection.payload.description, posting.text);
    }

    #[test]
    fn test_inspect_with_custom_settings() {
        let posting = Posting::new("p", "Hi 👋 Rust");
        let settings = Settings {
            offset_unit: crate::offset::OffsetUnit::Utf16,
            text_fields: vec!["name".to_string()],
        };
        let raw = json!([{"name": "Rust", "start": 6, "end": 10}]);

        let inspection = inspect(&posting, &raw, &settings);
        assert!(inspection.checks[0].is_match());
        assert!(inspection.summary.is_clean());
    }
}
