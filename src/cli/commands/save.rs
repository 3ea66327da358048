//! Save command - Print the save payload for a raw value

use clap::Parser;

use super::super::output::{color, log_info, write_output};
use super::super::utils::{parse_raw, read_raw, select_posting, PostingArgs, RawInput};
use super::super::Context;
use crate::normalize::is_empty_value;
use crate::save::build_save_payload;

/// Print the save payload for a raw value
#[derive(Parser, Debug, Default)]
pub struct SaveArgs {
    #[command(flatten)]
    pub posting: PostingArgs,

    #[command(flatten)]
    pub input: RawInput,

    /// Write the payload to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Build and write the save payload.
pub fn run(args: SaveArgs, ctx: &Context) -> Result<(), String> {
    let posting = select_posting(&args.posting, ctx)?;
    let raw = parse_raw(&read_raw(&args.input)?)
        .map_err(|e| format!("Failed to parse annotations: {}", e))?;

    if is_empty_value(&raw) {
        eprintln!("{} Highlight some skills first", color("33", "warn:"));
        return Ok(());
    }

    let spans = ctx.settings.normalizer().normalize(&raw);
    let payload = build_save_payload(&posting.id, &posting.text, &spans);
    let mut json = payload.to_json_pretty().map_err(|e| e.to_string())?;
    json.push('\n');

    write_output(&json, args.output.as_deref())?;
    log_info(
        &format!(
            "{} {} skills captured for {}",
            color("32", "ok:"),
            payload.skill_count(),
            payload.job_id
        ),
        ctx.quiet,
    );
    Ok(())
}
