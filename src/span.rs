//! Span records produced by normalization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A span offset as reported by the widget.
///
/// Only JSON integers become [`Offset::Index`]. Floats, strings, booleans and
/// `null` are kept verbatim as [`Offset::Unknown`] so they can be written back
/// out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Offset {
    /// An integer position.
    Index(i64),
    /// Anything that is not a JSON integer.
    Unknown(Value),
}

impl Offset {
    /// Classify a raw JSON value.
    ///
    /// Integers above `i64::MAX` saturate; they are past the end of any text
    /// and clamp the same way.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Offset::Index(i)
                } else if n.as_u64().is_some() {
                    Offset::Index(i64::MAX)
                } else {
                    Offset::Unknown(value.clone())
                }
            }
            other => Offset::Unknown(other.clone()),
        }
    }

    /// The integer position, if this is one.
    #[must_use]
    pub fn index(&self) -> Option<i64> {
        match self {
            Offset::Index(i) => Some(*i),
            Offset::Unknown(_) => None,
        }
    }

    /// Whether this offset is an integer.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Offset::Index(_))
    }

    /// The JSON value this offset projects to.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Offset::Index(i) => Value::from(*i),
            Offset::Unknown(v) => v.clone(),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Index(0)
    }
}

impl From<i64> for Offset {
    fn from(i: i64) -> Self {
        Offset::Index(i)
    }
}

impl From<i32> for Offset {
    fn from(i: i32) -> Self {
        Offset::Index(i64::from(i))
    }
}

impl From<Value> for Offset {
    fn from(value: Value) -> Self {
        Offset::from_value(&value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Index(i) => write!(f, "{}", i),
            Offset::Unknown(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Offset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Offset::Index(i) => serializer.serialize_i64(*i),
            Offset::Unknown(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Offset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Offset::from_value(&value))
    }
}

/// A normalized span annotation.
///
/// Nothing ties `start`/`end` to `text` at construction; see
/// [`crate::validate`] for the after-the-fact check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpanRecord {
    /// Labeled text (from `label`, else `text`, else empty)
    pub text: String,
    /// Start offset (inclusive)
    pub start: Offset,
    /// End offset (exclusive)
    pub end: Offset,
}

impl SpanRecord {
    /// Create a new span record.
    #[must_use]
    pub fn new(text: impl Into<String>, start: impl Into<Offset>, end: impl Into<Offset>) -> Self {
        Self {
            text: text.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both offsets as integers, or `None` if either is unknown.
    #[must_use]
    pub fn indices(&self) -> Option<(i64, i64)> {
        match (&self.start, &self.end) {
            (Offset::Index(s), Offset::Index(e)) => Some((*s, *e)),
            _ => None,
        }
    }

    /// Position label as shown in reports, e.g. `45-51`.
    #[must_use]
    pub fn position(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}
