//! TOML configuration.
//!
//! ```toml
//! offset_unit = "utf16"
//! text_fields = ["label", "text"]
//!
//! [[postings]]
//! id = "posting_3"
//! text = "Rust developer wanted."
//! ```
//!
//! Every key is optional; an empty file gives the built-in defaults.

use crate::error::{Error, Result};
use crate::normalize::{Normalizer, DEFAULT_TEXT_FIELDS};
use crate::offset::OffsetUnit;
use crate::posting::{builtin_postings, Posting};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "skillspan";

/// File contents as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Unit offsets are counted in
    pub offset_unit: Option<OffsetUnit>,
    /// Text field fallback chain
    pub text_fields: Option<Vec<String>>,
    /// Postings to annotate; empty means the built-ins
    pub postings: Vec<Posting>,
}

impl Config {
    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        if let Some(fields) = &config.text_fields {
            if fields.is_empty() {
                return Err(Error::config("text_fields must name at least one field"));
            }
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load `explicit` if given, else `default_path` if it exists, else defaults.
    ///
    /// A missing explicit file is an error; a missing default one is not.
    pub fn resolve(explicit: Option<&Path>, default_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Settings with defaults filled in.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            offset_unit: self.offset_unit.unwrap_or_default(),
            text_fields: self.text_fields.clone().unwrap_or_else(|| {
                DEFAULT_TEXT_FIELDS.iter().map(|f| f.to_string()).collect()
            }),
        }
    }

    /// Configured postings, or the built-ins.
    #[must_use]
    pub fn postings(&self) -> Vec<Posting> {
        if self.postings.is_empty() {
            builtin_postings()
        } else {
            self.postings.clone()
        }
    }
}

/// Platform default config path, e.g. `~/.config/skillspan/config.toml`.
#[cfg(feature = "cli")]
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Platform default config path (no platform lookup without `cli`).
#[cfg(not(feature = "cli"))]
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

/// Resolved settings for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Unit offsets are counted in
    pub offset_unit: OffsetUnit,
    /// Text field fallback chain
    pub text_fields: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings()
    }
}

impl Settings {
    /// Normalizer using this field chain.
    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new().with_text_fields(self.text_fields.iter().cloned())
    }
}
