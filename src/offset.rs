//! Clamped half-open slicing over char, byte, or UTF-16 offsets.
//!
//! # Which unit?
//!
//! Highlighting widgets disagree on how they count positions:
//!
//! ```text
//! Text: "café Java"
//!
//!   CHAR   c  a  f  é     J  a  v  a
//!          0  1  2  3  4  5  6  7  8        "Java" = [5, 9)
//!
//!   BYTE   c  a  f  [é]   _  J  a  v  a
//!          0  1  2  3-4   5  6  7  8  9     "Java" = [6, 10)
//!
//!   UTF-16 same as CHAR here; astral chars (emoji) take 2 units
//! ```
//!
//! [`OffsetUnit::Char`] is the default: positions count Unicode scalar values,
//! the way a Python string slice does.
//!
//! # Clamping
//!
//! Offsets are never an error. Both ends are clamped into `[0, len]`, and a
//! clamped `start >= end` gives the empty slice. Byte and UTF-16 positions
//! that land inside a character snap outward to that character's edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit span offsets are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values
    #[default]
    Char,
    /// UTF-8 bytes
    Byte,
    /// UTF-16 code units (JavaScript string indices)
    Utf16,
}

impl OffsetUnit {
    /// Lowercase name, as used in config files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OffsetUnit::Char => "char",
            OffsetUnit::Byte => "byte",
            OffsetUnit::Utf16 => "utf16",
        }
    }

    fn width(self, ch: char) -> usize {
        match self {
            OffsetUnit::Char => 1,
            OffsetUnit::Byte => ch.len_utf8(),
            OffsetUnit::Utf16 => ch.len_utf16(),
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "char" | "chars" | "codepoint" => Ok(OffsetUnit::Char),
            "byte" | "bytes" | "utf8" => Ok(OffsetUnit::Byte),
            "utf16" | "utf-16" => Ok(OffsetUnit::Utf16),
            other => Err(format!("unknown offset unit '{}'", other)),
        }
    }
}

/// Clamp a signed offset into `[0, len]`.
#[must_use]
pub fn clamp(pos: i64, len: usize) -> usize {
    usize::try_from(pos).map_or(0, |p| p.min(len))
}

/// Length of `text` in the given unit.
#[must_use]
pub fn unit_len(text: &str, unit: OffsetUnit) -> usize {
    match unit {
        OffsetUnit::Char => text.chars().count(),
        OffsetUnit::Byte => text.len(),
        OffsetUnit::Utf16 => text.encode_utf16().count(),
    }
}

/// Slice `text[start..end]` in `unit`, clamping out-of-range offsets.
///
/// Builds a [`TextIndex`] each call; use one directly when slicing many
/// spans out of the same text.
#[must_use]
pub fn slice_clamped(text: &str, start: i64, end: i64, unit: OffsetUnit) -> &str {
    TextIndex::new(text, unit).slice(start, end)
}

// =============================================================================
// Text Index (batch slicing)
// =============================================================================

/// Pre-computed character boundaries for one text in one unit.
///
/// Each slice is then two binary searches instead of a walk over the text.
/// ASCII text needs no tables: every unit is a byte.
#[derive(Debug, Clone)]
pub struct TextIndex<'a> {
    text: &'a str,
    /// Unit position of each character boundary, ending with the total length.
    units: Vec<usize>,
    /// Byte position of the same boundaries.
    bytes: Vec<usize>,
    is_ascii: bool,
}

impl<'a> TextIndex<'a> {
    /// Index `text` for offsets counted in `unit`.
    #[must_use]
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        if text.is_ascii() {
            return Self {
                text,
                units: Vec::new(),
                bytes: Vec::new(),
                is_ascii: true,
            };
        }

        let mut units = Vec::with_capacity(text.len() + 1);
        let mut bytes = Vec::with_capacity(text.len() + 1);
        let mut pos = 0;
        for (byte_idx, ch) in text.char_indices() {
            units.push(pos);
            bytes.push(byte_idx);
            pos += unit.width(ch);
        }
        units.push(pos);
        bytes.push(text.len());

        Self {
            text,
            units,
            bytes,
            is_ascii: false,
        }
    }

    /// Whether the ASCII fast path is in use.
    #[must_use]
    pub const fn is_ascii(&self) -> bool {
        self.is_ascii
    }

    /// Text length in this index's unit.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.is_ascii {
            self.text.len()
        } else {
            self.units.last().copied().unwrap_or(0)
        }
    }

    /// Check if the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `[start, end)` lies fully inside the text.
    #[must_use]
    pub fn in_bounds(&self, start: i64, end: i64) -> bool {
        let len = self.len() as i128;
        (0..=len).contains(&i128::from(start)) && (0..=len).contains(&i128::from(end))
    }

    /// Slice `[start, end)`, clamped to the text.
    #[must_use]
    pub fn slice(&self, start: i64, end: i64) -> &'a str {
        let len = self.len();
        let start = clamp(start, len);
        let end = clamp(end, len);
        if start >= end {
            return "";
        }

        if self.is_ascii {
            return &self.text[start..end];
        }

        let byte_start = self.byte_floor(start);
        let byte_end = self.byte_ceil(end);
        self.text.get(byte_start..byte_end).unwrap_or("")
    }

    /// Byte offset of the boundary at or before `pos`.
    fn byte_floor(&self, pos: usize) -> usize {
        match self.units.binary_search(&pos) {
            Ok(i) => self.bytes[i],
            Err(i) => self.bytes[i.saturating_sub(1)],
        }
    }

    /// Byte offset of the boundary at or after `pos`.
    fn byte_ceil(&self, pos: usize) -> usize {
        match self.units.binary_search(&pos) {
            Ok(i) => self.bytes[i],
            Err(i) => self.bytes.get(i).copied().unwrap_or(self.text.len()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
