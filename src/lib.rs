//! # skillspan
//!
//! Normalize and validate span annotations from text-highlighting widgets.
//!
//! Highlighters hand back whatever shape they like: a flat list of dicts, a
//! list wrapping that list, stray scalars mixed in. This crate turns that
//! into a flat list of [`SpanRecord`]s, checks each span's offsets against
//! the source text, and projects the result into a save payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use skillspan::{normalize, validate, build_save_payload};
//!
//! let text = "Experience in Python and Java.";
//! let raw = json!([[{"label": "Python", "start": 14, "end": 20}]]);
//!
//! let spans = normalize(&raw);
//! let result = validate(&spans[0], text).unwrap();
//! assert!(result.matches);
//!
//! let payload = build_save_payload("posting_1", text, &spans);
//! assert_eq!(payload.skill_count(), 1);
//! ```
//!
//! ## Leniency
//!
//! - Nothing in the core fails. Unknown shapes are skipped, missing fields
//!   default, bad offsets clamp.
//! - A span whose offsets do not read its text is a *mismatch*: something to
//!   show the reviewer, not an error.
//! - Non-integer offsets skip validation for that span.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`normalize`] | Flatten raw values into spans |
//! | [`validate`] | Check offsets against text |
//! | [`save`] | Save-payload projection |
//! | [`offset`] | Clamped slicing in char/byte/UTF-16 units |
//! | [`inspect`] | One full pass over a raw value |
//! | [`config`] | TOML settings and postings |

#![warn(missing_docs)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
mod error;
pub mod inspect;
pub mod normalize;
pub mod offset;
pub mod posting;
pub mod save;
pub mod span;
pub mod validate;

pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use inspect::{inspect, Inspection, Item};
pub use normalize::{normalize, Normalized, Normalizer, Visit};
pub use offset::OffsetUnit;
pub use posting::{builtin_postings, Posting};
pub use save::{build_save_payload, SavePayload, SavedSkill};
pub use span::{Offset, SpanRecord};
pub use validate::{check, check_all, validate, SpanCheck, ValidationResult, ValidationSummary};
