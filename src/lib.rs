//! Rome: a strict roman numeral parser.
//!
//! A numeral is parsed in three steps:
//! 1. the tokenizer splits it into subtractive pairs (`IV`), runs of one
//!    letter (`MM`) and lone letters (`D`), rejecting bad pairs and runs;
//! 2. every adjacent pair of tokens is checked against the ordering rules, so
//!    `IVIV` is rejected even though both tokens are fine on their own;
//! 3. token values are added up.

pub use crate::errors::{ErrorCategory, ErrorKind, RomeError};
pub use crate::numeral::Digit;
pub use crate::render::{render, MAX_RENDERABLE};
pub use crate::syntax::parser::{parse_named, parse_numeral, parse_roman_number, Numeral};
pub use crate::syntax::{Span, Spanned, Token};

pub mod cli;
pub mod errors;
pub mod numeral;
pub mod output;
pub mod render;
pub mod repl;
pub mod syntax;
