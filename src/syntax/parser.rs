//! Rome Parser
//!
//! Drives the tokenizer across one line, checks every adjacent pair of tokens
//! and adds up their values. The first failure ends the parse.

use serde::Serialize;
use tracing::debug;

use crate::errors::{ErrorKind, ErrorReporting, ParseContext, RomeError, SourceContext};
use crate::syntax::tokenizer::Tokenizer;
use crate::syntax::validator::valid_sequence;
use crate::syntax::{at_line_end, Spanned};
use crate::Token;

// ============================================================================
// PUBLIC API
// ============================================================================

/// A successfully parsed numeral.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Numeral {
    pub value: u64,
    pub tokens: Vec<Spanned<Token>>,
}

/// Parses one line (optionally ending in a line terminator) into its value.
pub fn parse_roman_number(line: &str) -> Result<u64, RomeError> {
    parse_numeral(line).map(|numeral| numeral.value)
}

/// Parses one line, keeping the accepted tokens alongside the value.
pub fn parse_numeral(line: &str) -> Result<Numeral, RomeError> {
    parse_with_context(line, SourceContext::new("input", line))
}

/// Parses one line, naming it `source` in diagnostics.
pub fn parse_named(source: &str, line: &str) -> Result<Numeral, RomeError> {
    parse_with_context(line, SourceContext::new(source, line))
}

// ============================================================================
// ACCUMULATOR
// ============================================================================

fn parse_with_context(line: &str, source: SourceContext) -> Result<Numeral, RomeError> {
    let ctx = ParseContext::new(source);
    debug!(input = line.trim_end(), "parsing numeral");

    if at_line_end(line) {
        return Err(ctx.report(ErrorKind::EmptyInput, (0..0).into()));
    }

    let mut tokenizer = Tokenizer::new(line, &ctx);
    let mut prev = tokenizer.next_token()?;
    let mut tally = prev.value.value();
    let mut tokens = Vec::new();

    while !tokenizer.is_finished() {
        let before = tokenizer.position();
        let next = tokenizer.next_token()?;
        assert!(
            tokenizer.position() > before,
            "tokenizer made no progress at byte {before}"
        );

        if !valid_sequence(&prev.value, &next.value) {
            debug!(first = %prev.value, second = %next.value, "rejected token order");
            let span = (prev.span.start..next.span.end).into();
            return Err(ctx.invalid_sequence(prev.value, next.value, span));
        }

        tally += next.value.value();
        tokens.push(prev);
        prev = next;
    }
    tokens.push(prev);

    debug!(value = tally, tokens = tokens.len(), "parsed numeral");
    Ok(Numeral {
        value: tally,
        tokens,
    })
}
