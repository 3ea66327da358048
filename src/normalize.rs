//! Flatten raw widget output into [`SpanRecord`]s.
//!
//! The highlighter's return shape is not stable: the same widget has been
//! seen returning a flat list of dicts, a list wrapping that list, and
//! mixtures of both. Nothing here assumes either shape.
//!
//! ```text
//! [[{label: "Python", start: 45, end: 51}], [{...}, [{...}]], 7]
//!   └──────────── span 0 ───────────────┘   └1┘  └2┘    └ noise
//! ```
//!
//! Rules:
//! - mapping: one span
//! - sequence: children visited in order, depth first
//! - anything else: skipped, never an error
//!
//! Missing fields fall back to defaults: text from `label`, then `text`,
//! then `""`; offsets default to `0`.

use crate::span::{Offset, SpanRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field names consulted, in order, for a span's text.
pub const DEFAULT_TEXT_FIELDS: &[&str] = &["label", "text"];

/// Field holding the start offset.
pub const START_FIELD: &str = "start";

/// Field holding the end offset.
pub const END_FIELD: &str = "end";

/// Structural kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any number
    Number,
    /// A string
    String,
    /// A sequence
    Array,
    /// A mapping
    Object,
}

impl ValueKind {
    /// Kind of `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped entry that was neither a mapping nor a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Noise {
    /// JSON pointer to the entry, e.g. `/0/2`
    pub path: String,
    /// What the entry was
    pub kind: ValueKind,
    /// The entry itself
    pub value: Value,
}

/// One visited entry: an index into [`Normalized::spans`] or
/// [`Normalized::noise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum Visit {
    /// A mapping, kept as a span
    Span(usize),
    /// Anything else
    Noise(usize),
}

/// Result of a normalization pass with its skipped entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    /// Spans in depth-first order
    pub spans: Vec<SpanRecord>,
    /// Entries skipped as noise, in visitation order
    pub noise: Vec<Noise>,
    /// Spans and noise interleaved as they were visited
    pub order: Vec<Visit>,
}

/// Normalizes raw annotation values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    text_fields: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            text_fields: DEFAULT_TEXT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Normalizer {
    /// Create a normalizer with the default `label`, `text` chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text field chain. Fields are tried in order; the first one
    /// present wins.
    #[must_use]
    pub fn with_text_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// The text field chain.
    #[must_use]
    pub fn text_fields(&self) -> &[String] {
        &self.text_fields
    }

    /// Flatten `raw` into span records.
    #[must_use]
    pub fn normalize(&self, raw: &Value) -> Vec<SpanRecord> {
        self.normalize_report(raw).spans
    }

    /// Flatten `raw`, also reporting what was skipped.
    ///
    /// A bare top-level `null` is "no annotations", not noise.
    #[must_use]
    pub fn normalize_report(&self, raw: &Value) -> Normalized {
        let mut out = Normalized::default();
        if raw.is_null() {
            return out;
        }

        // Explicit stack keeps deep nesting off the call stack.
        let mut stack: Vec<(String, &Value)> = vec![(String::new(), raw)];
        while let Some((path, node)) = stack.pop() {
            match node {
                Value::Object(map) => {
                    out.order.push(Visit::Span(out.spans.len()));
                    out.spans.push(self.record(map));
                }
                Value::Array(items) => {
                    for (i, item) in items.iter().enumerate().rev() {
                        stack.push((format!("{}/{}", path, i), item));
                    }
                }
                other => {
                    log::debug!("skipping {} entry at '{}'", ValueKind::of(other), path);
                    out.order.push(Visit::Noise(out.noise.len()));
                    out.noise.push(Noise {
                        path,
                        kind: ValueKind::of(other),
                        value: other.clone(),
                    });
                }
            }
        }

        out
    }

    /// Build one record from a mapping, defaulting missing fields.
    fn record(&self, map: &Map<String, Value>) -> SpanRecord {
        let text = self
            .text_fields
            .iter()
            .find_map(|field| map.get(field))
            .map(text_of)
            .unwrap_or_default();

        SpanRecord {
            text,
            start: offset_field(map, START_FIELD),
            end: offset_field(map, END_FIELD),
        }
    }
}

/// Flatten `raw` with the default field chain.
#[must_use]
pub fn normalize(raw: &Value) -> Vec<SpanRecord> {
    Normalizer::default().normalize(raw)
}

/// Whether `raw` counts as "no annotations yet".
///
/// Mirrors truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are empty.
#[must_use]
pub fn is_empty_value(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn offset_field(map: &Map<String, Value>, field: &str) -> Offset {
    map.get(field).map(Offset::from_value).unwrap_or_default()
}
