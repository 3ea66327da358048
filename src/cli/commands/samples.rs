//! Samples command - List postings available for annotation

use clap::Parser;

use super::super::output::color;
use super::super::Context;

/// List postings available for annotation
#[derive(Parser, Debug, Default)]
pub struct SamplesArgs {
    /// Print each posting's full text
    #[arg(long)]
    pub full: bool,
}

/// Print each posting with its selector label.
pub fn run(args: SamplesArgs, ctx: &Context) -> Result<(), String> {
    for (i, posting) in ctx.config.postings().iter().enumerate() {
        println!("{}  {}", posting.label(i), color("2", &format!("[{}]", posting.id)));
        if args.full {
            println!("    {}", posting.text);
        }
    }
    Ok(())
}
