//! CLI argument parsing and structure definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{InspectArgs, SamplesArgs, SaveArgs, ValidateArgs};
use crate::offset::OffsetUnit;

/// Normalize and validate highlighter span annotations
#[derive(Parser, Debug)]
#[command(name = "skillspan")]
#[command(
    author,
    version,
    about = "Normalize and validate highlighter span annotations",
    long_about = r#"
skillspan - check what a text-highlighting widget hands back

Takes the raw annotation value a highlighter returns (flat list, nested
lists, stray scalars), flattens it into spans, checks each span's offsets
against the posting text, and previews the save format.

EXAMPLES:
  skillspan samples
  skillspan inspect -p 1 --raw '[[{"label":"Python","start":77,"end":83}]]'
  skillspan save -p 2 annotations.json -o saved.json
  skillspan validate reviewed.jsonl --strict
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/skillspan/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Unit span offsets are counted in
    #[arg(long, global = true, value_enum)]
    pub unit: Option<OffsetUnit>,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the postings available for annotation
    #[command(visible_alias = "s")]
    Samples(SamplesArgs),

    /// Show raw value, parsed spans and offset checks
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Print the save payload for a raw value
    Save(SaveArgs),

    /// Validate JSONL annotation files
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
