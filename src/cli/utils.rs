//! Utility functions for CLI commands

use clap::Args;
use is_terminal::IsTerminal;
use serde_json::Value;
use std::io::{self, Read};

use super::Context;
use crate::posting::Posting;

/// Where the raw annotation value comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct RawInput {
    /// Raw annotation JSON, inline
    #[arg(long, value_name = "JSON", conflicts_with = "file")]
    pub raw: Option<String>,

    /// File holding raw annotation JSON ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

/// Which posting the spans point into.
#[derive(Args, Debug, Clone, Default)]
pub struct PostingArgs {
    /// Posting number, as listed by `skillspan samples`
    #[arg(short, long, value_name = "N", conflicts_with = "text")]
    pub posting: Option<usize>,

    /// Use this text instead of a listed posting
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Job id for the save payload (defaults to the posting's id)
    #[arg(long, value_name = "ID")]
    pub job_id: Option<String>,
}

/// Get raw annotation text from `--raw`, a file, or stdin.
///
/// An interactive stdin with no other input reads as nothing at all.
pub fn read_raw(input: &RawInput) -> Result<String, String> {
    if let Some(raw) = &input.raw {
        return Ok(raw.clone());
    }
    match input.file.as_deref() {
        Some("-") => read_stdin(),
        Some(path) => read_input_file(path),
        None if io::stdin().is_terminal() => Ok(String::new()),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read from stdin: {}", e))?;
    Ok(buffer)
}

/// Read input from file
pub fn read_input_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {}: {}", path, e))
}

/// Parse raw annotation JSON. Blank input means "no annotations yet".
pub fn parse_raw(text: &str) -> crate::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

/// Resolve the posting to check against.
pub fn select_posting(args: &PostingArgs, ctx: &Context) -> Result<Posting, String> {
    let mut posting = match &args.text {
        Some(text) => Posting::new("custom", text.clone()),
        None => {
            let postings = ctx.config.postings();
            let number = args.posting.unwrap_or(1);
            number
                .checked_sub(1)
                .and_then(|i| postings.get(i).cloned())
                .ok_or_else(|| {
                    format!(
                        "No posting {} (choose 1-{}; see `skillspan samples`)",
                        number,
                        postings.len()
                    )
                })?
        }
    };
    if let Some(job_id) = &args.job_id {
        posting.id = job_id.clone();
    }
    Ok(posting)
}
