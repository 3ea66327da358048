//! Validate command - Validate JSONL annotation files
//!
//! Each non-blank line is one render pass:
//!
//! ```text
//! {"job_id": "posting_1", "annotations": [[{"label": "Python", "start": 77, "end": 83}]]}
//! {"text": "Rust wanted", "annotations": [{"label": "Rust", "start": 0, "end": 4}]}
//! ```
//!
//! `text` wins over `job_id`; a `job_id` alone is looked up among the
//! configured postings.

use clap::Parser;
use serde_json::Value;
use std::fs;

use super::super::output::color;
use super::super::Context;
use crate::inspect::inspect;
use crate::posting::Posting;
use crate::validate::{SpanCheck, ValidationSummary};

/// Validate JSONL annotation files
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// JSONL files to validate
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Exit non-zero when any span mismatches
    #[arg(long)]
    pub strict: bool,
}

/// Check every entry in the given files.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<(), String> {
    let mut total = ValidationSummary::default();
    let mut total_entries = 0;
    let postings = ctx.config.postings();

    for file in &args.files {
        let content =
            fs::read_to_string(file).map_err(|e| format!("Failed to read {}: {}", file, e))?;

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let location = format!("{}:{}", file, line_num + 1);
            total_entries += 1;

            let entry: Value = serde_json::from_str(line)
                .map_err(|e| format!("{}: Invalid JSON: {}", location, e))?;
            let posting = Posting::from_entry(&entry, &postings)
                .map_err(|e| format!("{}: {}", location, e))?;
            let raw = entry.get("annotations").cloned().unwrap_or_default();

            let inspection = inspect(&posting, &raw, &ctx.settings);
            for (i, (span, check)) in inspection.entries().enumerate() {
                if let SpanCheck::Mismatched { extracted, hint } = check {
                    eprintln!(
                        "{} {}:span[{}]: '{}' at {} reads '{}' ({})",
                        color("33", "warn"),
                        location,
                        i,
                        span.text,
                        span.position(),
                        extracted,
                        hint
                    );
                }
            }
            for noise in &inspection.noise {
                log::info!("{}: skipped {} at '{}'", location, noise.kind, noise.path);
            }
            total.merge(&inspection.summary);
        }
    }

    println!();
    println!(
        "Validated {} entries in {} file(s)",
        total_entries,
        args.files.len()
    );
    println!("{}", total);
    if total.is_clean() {
        println!("{} All spans match", color("32", "ok:"));
    } else {
        println!("{} {} mismatches", color("33", "!"), total.mismatched);
    }

    if args.strict && !total.is_clean() {
        return Err(format!("{} span mismatches", total.mismatched));
    }

    Ok(())
}
