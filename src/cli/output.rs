//! Output formatting utilities for CLI commands

use is_terminal::IsTerminal;
use std::io::{self, Write};

use crate::validate::SpanCheck;

/// Log info message (respects quiet flag)
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}

/// Colorize text with ANSI escape codes (only if stdout is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Check mark shown after an extracted substring
pub fn check_mark(check: &SpanCheck) -> String {
    match check {
        SpanCheck::Matched { .. } => color("32", "✓"),
        SpanCheck::Mismatched { hint, .. } => {
            format!("{} ({})", color("31", "✗ MISMATCH"), hint)
        }
        SpanCheck::Skipped => color("33", "(offsets not integers, not checked)"),
    }
}
