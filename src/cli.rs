//! The Rome Command-Line Interface.
//!
//! All configuration arrives as command-line flags; there are no config files.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::Level;

use crate::errors::print_error;
use crate::output::print_result;
use crate::render::MAX_RENDERABLE;
use crate::repl::run_repl;
use crate::{parse_named, render, RomeError, Spanned, Token};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(name = "rome", version, about = "Parse and render roman numerals.")]
pub struct RomeArgs {
    #[command(subcommand)]
    pub command: Option<ArgsCommand>,

    /// Log parser decisions to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log every consumed token to stderr.
    #[arg(long, global = true)]
    pub trace: bool,

    /// When to colour the output.
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Read numerals line by line and print their values (the default).
    Repl {
        /// Show the full diagnostic under each rejected numeral.
        #[arg(long)]
        explain: bool,
    },
    /// Parse the given numerals.
    Parse {
        #[arg(required = true)]
        numerals: Vec<String>,
        /// Print one JSON object per numeral instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical numeral for each value.
    Render {
        #[arg(required = true)]
        values: Vec<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

impl RomeArgs {
    fn log_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = RomeArgs::parse();
    init_logging(args.log_level());

    let mut stdout = StandardStream::stdout(args.color.into());
    let command = args.command.unwrap_or(ArgsCommand::Repl { explain: false });

    let result = match command {
        ArgsCommand::Repl { explain } => {
            run_repl(io::stdin().lock(), &mut stdout, explain).map(|_| true)
        }
        ArgsCommand::Parse { numerals, json } => handle_parse(&numerals, json, &mut stdout),
        ArgsCommand::Render { values } => handle_render(&values, &mut stdout),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

/// Parses every numeral. Returns false if any was rejected.
fn handle_parse<W: WriteColor>(numerals: &[String], json: bool, out: &mut W) -> io::Result<bool> {
    let mut all_ok = true;

    for (index, numeral) in numerals.iter().enumerate() {
        let source_name = format!("<arg:{}>", index + 1);
        let result = parse_named(&source_name, numeral);
        all_ok &= result.is_ok();

        if json {
            let report = ParseReport::new(numeral, result);
            let line = serde_json::to_string(&report).map_err(io::Error::other)?;
            writeln!(out, "{line}")?;
            continue;
        }

        match result {
            Ok(parsed) => print_result(out, parsed.value)?,
            Err(e) => print_error(e),
        }
    }

    Ok(all_ok)
}

/// Renders every value. Returns false if any value has no numeral.
fn handle_render<W: Write>(values: &[u64], out: &mut W) -> io::Result<bool> {
    let mut all_ok = true;

    for &value in values {
        match render(value) {
            Some(numeral) => writeln!(out, "{numeral}")?,
            None if value > MAX_RENDERABLE => {
                eprintln!("Error: {value} is too large to render (limit {MAX_RENDERABLE})");
                all_ok = false;
            }
            None => {
                eprintln!("Error: {value} has no roman numeral");
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

// ============================================================================
// JSON OUTPUT
// ============================================================================

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    value: Option<u64>,
    tokens: Vec<Spanned<Token>>,
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    code: String,
    message: String,
    offset: usize,
    length: usize,
}

impl<'a> ParseReport<'a> {
    fn new(input: &'a str, result: Result<crate::Numeral, RomeError>) -> Self {
        match result {
            Ok(numeral) => Self {
                input,
                value: Some(numeral.value),
                tokens: numeral.tokens,
                error: None,
            },
            Err(e) => Self {
                input,
                value: None,
                tokens: Vec::new(),
                error: Some(ErrorReport {
                    message: e.to_string(),
                    offset: e.span().offset(),
                    length: e.span().len(),
                    code: e.diagnostic_info.error_code,
                }),
            },
        }
    }
}
