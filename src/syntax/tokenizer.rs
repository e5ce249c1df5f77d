//! Splits a numeral into tokens, left to right.
//!
//! Each call looks at no more than the first two characters to decide what
//! kind of token starts here:
//! - a smaller letter before a larger one is a subtractive pair (`IX`);
//! - a larger letter before a smaller one is a lone letter, and the smaller
//!   one starts the next token;
//! - identical letters are gathered into a single repeat (`CCC`).

use tracing::trace;

use crate::errors::{ErrorKind, ErrorReporting, RomeError};
use crate::syntax::validator::{valid_pair, valid_repeats};
use crate::syntax::{at_line_end, Span, Spanned};
use crate::{Digit, Token};

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    ctx: &'a dyn ErrorReporting,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, ctx: &'a dyn ErrorReporting) -> Self {
        Self { input, pos: 0, ctx }
    }

    /// Byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once only a line terminator (or nothing) is left.
    pub fn is_finished(&self) -> bool {
        at_line_end(self.rest())
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consumes the next token. Fails with `EndOfInput` when the line is done.
    pub fn next_token(&mut self) -> Result<Spanned<Token>, RomeError> {
        let start = self.pos;
        let rest = self.rest();

        let first_char = match rest.chars().next() {
            Some(c) if !at_line_end(rest) => c,
            _ => return Err(self.ctx.report(ErrorKind::EndOfInput, (start..start).into())),
        };
        let first = self.digit(first_char, start)?;

        // Letters are ASCII, so one byte per character from here on.
        let after_first = &rest[1..];
        let second_char = match after_first.chars().next() {
            Some(c) if !at_line_end(after_first) => c,
            _ => return Ok(self.emit(Token::single(first), start)),
        };
        let second = self.digit(second_char, start + 1)?;

        if first < second {
            if !valid_pair(first, second) {
                return Err(self
                    .ctx
                    .invalid_pair(first, second, (start..start + 2).into()));
            }
            let pair = Token::Pair {
                prefix: first,
                suffix: second,
            };
            return Ok(self.emit(pair, start));
        }

        if first > second {
            // Lonely letter; the second one starts the next token.
            return Ok(self.emit(Token::single(first), start));
        }

        let run = rest.chars().take_while(|&c| c == first_char).count();
        let count = match u32::try_from(run) {
            Ok(count) if valid_repeats(first, run) => count,
            _ => {
                return Err(self
                    .ctx
                    .invalid_repeat_count(first, run, (start..start + run).into()))
            }
        };
        Ok(self.emit(Token::Repeat { digit: first, count }, start))
    }

    fn digit(&self, c: char, at: usize) -> Result<Digit, RomeError> {
        Digit::from_char(c).ok_or_else(|| {
            self.ctx
                .invalid_character(c, (at..at + c.len_utf8()).into())
        })
    }

    fn emit(&mut self, token: Token, start: usize) -> Spanned<Token> {
        let end = start + token.width();
        self.pos = end;
        trace!(%token, start, end, "consumed token");
        Spanned {
            value: token,
            span: Span::new(start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ParseContext, SourceContext};

    fn tokens(input: &str) -> Result<Vec<Token>, ErrorKind> {
        let ctx = ParseContext::new(SourceContext::new("test", input));
        let mut tokenizer = Tokenizer::new(input, &ctx);
        let mut out = Vec::new();
        while !tokenizer.is_finished() {
            let token = tokenizer.next_token().map_err(|e| e.kind)?;
            out.push(token.value);
        }
        Ok(out)
    }

    fn first_error(input: &str) -> ErrorKind {
        tokens(input).expect_err("expected tokenizer failure")
    }

    #[test]
    fn test_pairs_repeats_and_lonely_letters() {
        assert_eq!(
            tokens("MMDIV").unwrap(),
            vec![
                Token::Repeat { digit: Digit::M, count: 2 },
                Token::single(Digit::D),
                Token::Pair { prefix: Digit::I, suffix: Digit::V },
            ]
        );
    }

    #[test]
    fn test_lonely_letter_does_not_consume_the_next() {
        let ctx = ParseContext::new(SourceContext::new("test", "XI"));
        let mut tokenizer = Tokenizer::new("XI", &ctx);
        let x = tokenizer.next_token().unwrap();
        assert_eq!(x.value, Token::single(Digit::X));
        assert_eq!(x.span, Span::new(0, 1));
        assert_eq!(tokenizer.position(), 1);
        let i = tokenizer.next_token().unwrap();
        assert_eq!(i.value, Token::single(Digit::I));
        assert!(tokenizer.is_finished());
    }

    #[test]
    fn test_single_letter_before_terminator() {
        assert_eq!(tokens("V\n").unwrap(), vec![Token::single(Digit::V)]);
        assert_eq!(tokens("C\r\n").unwrap(), vec![Token::single(Digit::C)]);
    }

    #[test]
    fn test_end_of_input() {
        for input in ["", "\n", "\r\n"] {
            let ctx = ParseContext::new(SourceContext::new("test", input));
            let mut tokenizer = Tokenizer::new(input, &ctx);
            let err = tokenizer.next_token().unwrap_err();
            assert_eq!(err.kind, ErrorKind::EndOfInput);
        }
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(first_error("A"), ErrorKind::InvalidCharacter { found: 'A' });
        assert_eq!(first_error("iv"), ErrorKind::InvalidCharacter { found: 'i' });
        assert_eq!(first_error("XZ"), ErrorKind::InvalidCharacter { found: 'Z' });
        assert_eq!(first_error("X Y"), ErrorKind::InvalidCharacter { found: ' ' });
    }

    #[test]
    fn test_invalid_character_span_covers_multibyte_char() {
        let input = "XⅣ";
        let ctx = ParseContext::new(SourceContext::new("test", input));
        let mut tokenizer = Tokenizer::new(input, &ctx);
        let err = tokenizer.next_token().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCharacter { found: 'Ⅳ' });
        assert_eq!(err.span().offset(), 1);
        assert_eq!(err.span().len(), 'Ⅳ'.len_utf8());
    }

    #[test]
    fn test_invalid_pairs() {
        assert_eq!(
            first_error("LD"),
            ErrorKind::InvalidPair { prefix: Digit::L, suffix: Digit::D }
        );
        assert_eq!(
            first_error("IM"),
            ErrorKind::InvalidPair { prefix: Digit::I, suffix: Digit::M }
        );
        assert_eq!(
            first_error("VX"),
            ErrorKind::InvalidPair { prefix: Digit::V, suffix: Digit::X }
        );
    }

    #[test]
    fn test_invalid_repeats() {
        assert_eq!(
            first_error("IIII"),
            ErrorKind::InvalidRepeatCount { digit: Digit::I, count: 4 }
        );
        for input in ["VV", "LL", "DD"] {
            assert!(matches!(
                first_error(input),
                ErrorKind::InvalidRepeatCount { count: 2, .. }
            ));
        }
    }

    #[test]
    fn test_m_repeats_without_bound() {
        assert_eq!(
            tokens("MMMMMM").unwrap(),
            vec![Token::Repeat { digit: Digit::M, count: 6 }]
        );
    }

    #[test]
    fn test_stops_at_first_terminator() {
        assert_eq!(tokens("XII\nIIII").unwrap().len(), 2);
    }
}
