//! Integer to numeral rendering.

use crate::{Digit, Token};

/// Largest value [`render`] will produce a numeral for: 3,999,999 needs a
/// run of 3,999 Ms, far past anything written by hand.
pub const MAX_RENDERABLE: u64 = 3_999_999;

/// Tokens of the canonical form below one thousand, largest first.
const STEPS: [Token; 12] = [
    Token::pair(Digit::C, Digit::M),
    Token::single(Digit::D),
    Token::pair(Digit::C, Digit::D),
    Token::single(Digit::C),
    Token::pair(Digit::X, Digit::C),
    Token::single(Digit::L),
    Token::pair(Digit::X, Digit::L),
    Token::single(Digit::X),
    Token::pair(Digit::I, Digit::X),
    Token::single(Digit::V),
    Token::pair(Digit::I, Digit::V),
    Token::single(Digit::I),
];

/// Renders `value` in canonical subtractive form.
///
/// Thousands become a run of Ms, which the parser accepts back unchanged.
/// Returns `None` for zero and for anything above [`MAX_RENDERABLE`].
pub fn render(value: u64) -> Option<String> {
    if value == 0 || value > MAX_RENDERABLE {
        return None;
    }

    let mut out = Digit::M.to_char().to_string().repeat((value / 1000) as usize);
    let mut rest = value % 1000;
    for step in STEPS {
        let amount = step.value();
        while rest >= amount {
            out.push_str(&step.to_string());
            rest -= amount;
        }
    }
    Some(out)
}
