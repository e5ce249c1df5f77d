//! Rome REPL (Read-Eval-Print Loop)
//!
//! Prompts for one numeral per line and prints its value or the reason it was
//! rejected, until the input runs out.

use std::io::{self, BufRead, Write};

use termcolor::WriteColor;
use tracing::debug;

use crate::errors::render_report;
use crate::output::{print_rejection, print_result};
use crate::parse_named;

pub const PROMPT: &str = "Write a roman numeral: ";

/// Counts of what a session accepted and rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// REPL state that persists across lines
#[derive(Debug)]
pub struct ReplState {
    line_number: usize,
    /// Print the full diagnostic report under each rejection.
    explain: bool,
    summary: ReplSummary,
}

impl ReplState {
    pub fn new(explain: bool) -> Self {
        Self {
            line_number: 1,
            explain,
            summary: ReplSummary::default(),
        }
    }

    pub fn summary(&self) -> ReplSummary {
        self.summary
    }

    /// Parses one line and prints the outcome. Returns whether it was accepted.
    pub fn eval_line<W: WriteColor>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let source_name = format!("<repl:{}>", self.line_number);
        self.line_number += 1;

        match parse_named(&source_name, line) {
            Ok(numeral) => {
                self.summary.accepted += 1;
                print_result(out, numeral.value)?;
                Ok(true)
            }
            Err(e) => {
                self.summary.rejected += 1;
                print_rejection(out, &e)?;
                if self.explain {
                    writeln!(out, "{}", render_report(e))?;
                }
                Ok(false)
            }
        }
    }
}

/// Runs the loop over `input`, writing prompts and results to `out`.
pub fn run_repl<R: BufRead, W: WriteColor>(
    mut input: R,
    out: &mut W,
    explain: bool,
) -> io::Result<ReplSummary> {
    let mut state = ReplState::new(explain);

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            writeln!(out)?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            match handle_repl_command(trimmed, out)? {
                ReplCommand::Continue => continue,
                ReplCommand::Quit => break,
            }
        }

        state.eval_line(&line, out)?;
    }

    let summary = state.summary();
    debug!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "repl session ended"
    );
    Ok(summary)
}

/// REPL command results
enum ReplCommand {
    Continue,
    Quit,
}

/// Handle special REPL commands that start with ':'
fn handle_repl_command<W: Write>(command: &str, out: &mut W) -> io::Result<ReplCommand> {
    match command.to_ascii_lowercase().as_str() {
        ":help" | ":h" => {
            writeln!(out, "Rome REPL Commands:")?;
            writeln!(out, "  :help, :h     Show this help")?;
            writeln!(out, "  :quit, :q     Exit the REPL")?;
            writeln!(out)?;
            writeln!(out, "Enter a numeral such as MCMXCIX to see its value.")?;
            Ok(ReplCommand::Continue)
        }
        ":quit" | ":q" => Ok(ReplCommand::Quit),
        _ => {
            writeln!(
                out,
                "Unknown command: {}. Type :help for available commands.",
                command
            )?;
            Ok(ReplCommand::Continue)
        }
    }
}
