//! CLI library modules for the skillspan binary.
//!
//! Kept in the library so commands can be tested without spawning the
//! binary.

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

use crate::config::{default_config_path, Config, Settings};
use crate::error::Error;
use crate::offset::OffsetUnit;
use std::path::Path;

/// State shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Loaded config file (or defaults)
    pub config: Config,
    /// Settings after command-line overrides
    pub settings: Settings,
    /// Suppress informational stderr output
    pub quiet: bool,
}

impl Context {
    /// Load config and apply overrides from global flags.
    pub fn load(
        config_path: Option<&Path>,
        unit: Option<OffsetUnit>,
        quiet: bool,
    ) -> Result<Self, String> {
        let default_path = default_config_path();
        let config = Config::resolve(config_path, default_path.as_deref()).map_err(|e| match e {
            Error::Io(err) => match config_path {
                Some(path) => format!("Failed to read {}: {}", path.display(), err),
                None => err.to_string(),
            },
            other => other.to_string(),
        })?;

        let mut settings = config.settings();
        if let Some(unit) = unit {
            settings.offset_unit = unit;
        }

        Ok(Self {
            config,
            settings,
            quiet,
        })
    }
}
