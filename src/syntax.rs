//! Syntax module for roman numerals
//!
//! Defines the token shapes produced by the tokenizer and the span wrapper used
//! to tie each token back to its place in the input line.

use std::fmt;

use serde::Serialize;

use crate::Digit;

pub mod parser;
pub mod tokenizer;
pub mod validator;

/// Represents a span in the source line, in bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::from(span.start..span.end)
    }
}

/// Wrapper for carrying source span information with any value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

/// A single unit of a roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Token {
    /// One or more identical letters (`I`, `XX`, `MMM`). A lone letter is a
    /// repeat with a count of one.
    Repeat { digit: Digit, count: u32 },
    /// Subtractive notation: a smaller letter before a larger one (`IV`, `CM`).
    Pair { prefix: Digit, suffix: Digit },
}

impl Token {
    pub const fn single(digit: Digit) -> Self {
        Token::Repeat { digit, count: 1 }
    }

    pub const fn pair(prefix: Digit, suffix: Digit) -> Self {
        Token::Pair { prefix, suffix }
    }

    /// The numeric contribution of this token.
    pub fn value(&self) -> u64 {
        match *self {
            Token::Repeat { digit, count } => digit.value() * u64::from(count),
            Token::Pair { prefix, suffix } => suffix.value() - prefix.value(),
        }
    }

    /// The first letter of the token: the prefix of a pair, the digit of a repeat.
    pub fn leading(&self) -> Digit {
        match *self {
            Token::Repeat { digit, .. } => digit,
            Token::Pair { prefix, .. } => prefix,
        }
    }

    /// The last letter of the token: the suffix of a pair, the digit of a repeat.
    pub fn trailing(&self) -> Digit {
        match *self {
            Token::Repeat { digit, .. } => digit,
            Token::Pair { suffix, .. } => suffix,
        }
    }

    /// Number of input characters the token spans.
    pub fn width(&self) -> usize {
        match *self {
            Token::Repeat { count, .. } => count as usize,
            Token::Pair { .. } => 2,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Repeat { digit, count } => {
                for _ in 0..count {
                    write!(f, "{digit}")?;
                }
                Ok(())
            }
            Token::Pair { prefix, suffix } => write!(f, "{prefix}{suffix}"),
        }
    }
}

/// True when nothing but an optional line terminator is left.
pub fn at_line_end(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n")
}
