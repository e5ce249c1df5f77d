//! Handles user-facing result lines for the REPL and the CLI.
//!
//! Both print `Result: <value>` and `Invalid input: <message>` the same way,
//! with only the label coloured.

use std::fmt::Display;
use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// Prints `Result: <value>` with a green label.
pub fn print_result<W: WriteColor>(out: &mut W, value: u64) -> io::Result<()> {
    write_labelled(out, Color::Green, "Result:", &value)
}

/// Prints `Invalid input: <message>` with a red label.
pub fn print_rejection<W: WriteColor>(out: &mut W, message: &dyn Display) -> io::Result<()> {
    write_labelled(out, Color::Red, "Invalid input:", message)
}

fn write_labelled<W: WriteColor>(
    out: &mut W,
    color: Color,
    label: &str,
    text: &dyn Display,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label}")?;
    out.reset()?;
    writeln!(out, " {text}")
}
