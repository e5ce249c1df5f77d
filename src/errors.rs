//! Rome Error Handling
//!
//! Every rejection carries the line it came from, the span that caused it and a
//! stable diagnostic code, so callers can print either the short message or a
//! full `miette` report.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::{Digit, Token};

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Names the input a parse call is working on.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// A rejected numeral.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct RomeError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Where it happened
    pub source_info: SourceInfo,
    /// How to help
    pub diagnostic_info: DiagnosticInfo,
}

/// Everything that can be wrong with a numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("input is empty")]
    EmptyInput,
    #[error("EOF")]
    EndOfInput,
    #[error("invalid character: {found}")]
    InvalidCharacter { found: char },
    #[error("invalid pair: {prefix}{suffix}")]
    InvalidPair { prefix: Digit, suffix: Digit },
    #[error("character {digit} cannot appear {count} times in a row")]
    InvalidRepeatCount { digit: Digit, count: usize },
    #[error("{first} cannot be followed by {second}")]
    InvalidSequence { first: Token, second: Token },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Nothing to parse.
    Input,
    /// A single token is malformed.
    Token,
    /// Two valid tokens in an illegal order.
    Sequence,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput | Self::EndOfInput => ErrorCategory::Input,
            Self::InvalidCharacter { .. }
            | Self::InvalidPair { .. }
            | Self::InvalidRepeatCount { .. } => ErrorCategory::Token,
            Self::InvalidSequence { .. } => ErrorCategory::Sequence,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::EndOfInput => "end_of_input",
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::InvalidPair { .. } => "invalid_pair",
            Self::InvalidRepeatCount { .. } => "invalid_repeat_count",
            Self::InvalidSequence { .. } => "invalid_sequence",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::EmptyInput => Some("write a numeral such as MMXXIII".into()),
            Self::EndOfInput => None,
            Self::InvalidCharacter { .. } => {
                Some("only the uppercase letters I, V, X, L, C, D and M are digits".into())
            }
            Self::InvalidPair { .. } => {
                Some("only IV, IX, XL, XC, CD and CM may be written subtractively".into())
            }
            Self::InvalidRepeatCount { digit, .. } if digit.is_half_step() => {
                Some(format!("{digit} may only appear once in a row"))
            }
            Self::InvalidRepeatCount { digit: Digit::M, .. } => None,
            Self::InvalidRepeatCount { digit, .. } => {
                Some(format!("{digit} may appear at most three times in a row"))
            }
            Self::InvalidSequence { .. } => {
                Some("tokens must be written from the largest to the smallest".into())
            }
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::EmptyInput => "nothing here",
            Self::EndOfInput => "input ends here",
            Self::InvalidCharacter { .. } => "not a roman digit",
            Self::InvalidPair { .. } => "invalid pair",
            Self::InvalidRepeatCount { .. } => "repeated too often",
            Self::InvalidSequence { .. } => "out of order",
        }
    }
}

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl Diagnostic for RomeError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.primary_label().to_string()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl RomeError {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> SourceSpan {
        self.source_info.primary_span
    }
}

// ============================================================================
// ERROR CONSTRUCTION
// ============================================================================

/// Context-aware error creation - each context knows how to create appropriate errors
pub trait ErrorReporting {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RomeError;

    fn invalid_character(&self, found: char, span: SourceSpan) -> RomeError {
        self.report(ErrorKind::InvalidCharacter { found }, span)
    }

    fn invalid_pair(&self, prefix: Digit, suffix: Digit, span: SourceSpan) -> RomeError {
        self.report(ErrorKind::InvalidPair { prefix, suffix }, span)
    }

    fn invalid_repeat_count(&self, digit: Digit, count: usize, span: SourceSpan) -> RomeError {
        self.report(ErrorKind::InvalidRepeatCount { digit, count }, span)
    }

    fn invalid_sequence(&self, first: Token, second: Token, span: SourceSpan) -> RomeError {
        self.report(ErrorKind::InvalidSequence { first, second }, span)
    }
}

/// The error-creation context for one parse call. Every error it reports
/// shares the same named source.
pub struct ParseContext {
    named: Arc<NamedSource<String>>,
}

impl ParseContext {
    pub fn new(source: SourceContext) -> Self {
        Self {
            named: source.to_named_source(),
        }
    }

    fn phase(kind: &ErrorKind) -> &'static str {
        match kind.category() {
            ErrorCategory::Input => "parse",
            ErrorCategory::Token => "tokenize",
            ErrorCategory::Sequence => "sequence",
        }
    }
}

impl ErrorReporting for ParseContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RomeError {
        let phase = Self::phase(&kind);
        let error_code = format!("rome::{}::{}", phase, kind.code_suffix());
        let help = kind.help();

        RomeError {
            kind,
            source_info: SourceInfo {
                source: Arc::clone(&self.named),
                primary_span: span,
                phase: phase.into(),
            },
            diagnostic_info: DiagnosticInfo { help, error_code },
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Renders a RomeError with full miette diagnostics.
pub fn render_report(error: RomeError) -> String {
    let report = miette::Report::new(error);
    format!("{report:?}")
}

/// Prints a RomeError with full miette diagnostics to stderr.
pub fn print_error(error: RomeError) {
    eprintln!("{}", render_report(error));
}
