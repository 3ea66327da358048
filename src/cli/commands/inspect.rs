//! Inspect command - Show raw value, parsed spans and offset checks

use clap::Parser;

use super::super::output::{check_mark, color};
use super::super::utils::{parse_raw, read_raw, select_posting, PostingArgs, RawInput};
use super::super::Context;
use crate::inspect::{inspect, Inspection, Item};

/// Show raw value, parsed spans and offset checks
#[derive(Parser, Debug, Default)]
pub struct InspectArgs {
    #[command(flatten)]
    pub posting: PostingArgs,

    #[command(flatten)]
    pub input: RawInput,

    /// Print the full inspection as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run one render pass and print it.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<(), String> {
    let posting = select_posting(&args.posting, ctx)?;
    let text = read_raw(&args.input)?;
    let raw = match parse_raw(&text) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("{} Error displaying: {}", color("31", "error:"), e);
            eprintln!("{}", text.trim_end());
            return Err("raw annotation value is not valid JSON".to_string());
        }
    };

    let inspection = inspect(&posting, &raw, &ctx.settings);

    if args.json {
        let json = serde_json::to_string_pretty(&inspection)
            .map_err(|e| format!("Failed to serialize inspection: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    print_raw(&inspection, &raw)?;
    println!();
    print_parsed(&inspection);
    Ok(())
}

fn print_raw(inspection: &Inspection, raw: &serde_json::Value) -> Result<(), String> {
    println!("{}", color("1", "Raw Return Value:"));
    println!("Type: {}", inspection.raw_kind);
    if inspection.has_annotations {
        let pretty = serde_json::to_string_pretty(raw)
            .map_err(|e| format!("Error displaying: {}", e))?;
        println!("Value:\n{}", pretty);
    } else {
        println!("No annotations yet");
    }
    Ok(())
}

fn print_parsed(inspection: &Inspection) {
    println!("{}", color("1", "Parsed Skills:"));
    if !inspection.has_annotations {
        println!("Click words above to highlight them");
        return;
    }

    println!("Total skills: {}", inspection.spans.len());
    for (i, item) in inspection.items().enumerate() {
        match item {
            Item::Span(span, check) => {
                println!("{}. {}", i + 1, color("1", &span.text));
                println!("   Position: {}", span.position());
                if let Some(extracted) = check.extracted() {
                    println!("   Extracted: '{}' {}", extracted, check_mark(check));
                } else {
                    println!("   {}", check_mark(check));
                }
            }
            Item::Noise(noise) => println!(
                "{}. {} (unexpected format at '{}')",
                i + 1,
                noise.value,
                noise.path
            ),
        }
    }

    println!();
    println!("{}", inspection.summary);
}
