//! # Validator Module
//!
//! The fixed rules of roman numerals: which subtractive pairs exist, how often
//! each digit may repeat, and which tokens may follow which.
//!
//! ## Invariants
//! - Pure and stateless; every check is a function of its arguments only
//! - The tokenizer only emits pairs and repeats accepted here

use crate::{Digit, Token};

/// Checks that a prefix-suffix pair is legal: IV is, LC is not.
pub fn valid_pair(prefix: Digit, suffix: Digit) -> bool {
    match suffix {
        Digit::V | Digit::X => prefix == Digit::I,
        Digit::L | Digit::C => prefix == Digit::X,
        Digit::D | Digit::M => prefix == Digit::C,
        Digit::I => false,
    }
}

/// Checks that `digit` may appear `count` times in a row. III is good, LL is not.
pub fn valid_repeats(digit: Digit, count: usize) -> bool {
    if count == 0 {
        return false;
    }

    match digit {
        Digit::V | Digit::L | Digit::D => count == 1,
        Digit::I | Digit::X | Digit::C => count <= 3,
        Digit::M => true,
    }
}

/// Checks that `second` may directly follow `first`.
///
/// The leading letter of consecutive tokens must strictly decrease. After V, L
/// or D the trailing letter of the next token must also be smaller, which
/// rules out `V` followed by `IV` or `L` followed by `XC`. Together these
/// exclude anything that should have been tokenized differently (`XX` then
/// `X`) as well as orderings with no meaning (`IX` then `I`).
///
/// Expanded (A+ means any of A, AA, AAA):
///
/// | first          | may be followed by                     |
/// |----------------|----------------------------------------|
/// | I+, IV, IX     | nothing                                |
/// | V              | I+                                     |
/// | X+, XL, XC     | I+, IV, V, IX                          |
/// | L              | I+, IV, V, IX, X+                      |
/// | C+, CD, CM     | I+, IV, V, IX, X+, XL, L, XC           |
/// | D              | I+, IV, V, IX, X+, XL, L, XC, C+       |
/// | M+             | anything else                          |
pub fn valid_sequence(first: &Token, second: &Token) -> bool {
    let first_prefix = first.leading();

    if first_prefix.is_half_step() {
        return first_prefix > second.trailing();
    }

    first_prefix > second.leading()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(digit: Digit, count: u32) -> Token {
        Token::Repeat { digit, count }
    }

    fn pair(prefix: Digit, suffix: Digit) -> Token {
        Token::Pair { prefix, suffix }
    }

    #[test]
    fn test_legal_pairs() {
        let legal = [
            (Digit::I, Digit::V),
            (Digit::I, Digit::X),
            (Digit::X, Digit::L),
            (Digit::X, Digit::C),
            (Digit::C, Digit::D),
            (Digit::C, Digit::M),
        ];
        for prefix in Digit::ALL {
            for suffix in Digit::ALL {
                let expected = legal.contains(&(prefix, suffix));
                assert_eq!(
                    valid_pair(prefix, suffix),
                    expected,
                    "pair {prefix}{suffix}"
                );
            }
        }
    }

    #[test]
    fn test_repeats() {
        for digit in [Digit::V, Digit::L, Digit::D] {
            assert!(valid_repeats(digit, 1));
            assert!(!valid_repeats(digit, 2));
        }
        for digit in [Digit::I, Digit::X, Digit::C] {
            assert!(valid_repeats(digit, 3));
            assert!(!valid_repeats(digit, 4));
        }
        assert!(valid_repeats(Digit::M, 1));
        assert!(valid_repeats(Digit::M, 42));
    }

    #[test]
    fn test_zero_count_is_never_valid() {
        for digit in Digit::ALL {
            assert!(!valid_repeats(digit, 0));
        }
    }

    #[test]
    fn test_sequences_follow_leading_digit() {
        assert!(valid_sequence(&run(Digit::M, 2), &run(Digit::X, 2)));
        assert!(valid_sequence(&run(Digit::X, 3), &pair(Digit::I, Digit::X)));
        assert!(valid_sequence(&pair(Digit::C, Digit::M), &pair(Digit::X, Digit::C)));
        assert!(!valid_sequence(&run(Digit::X, 2), &run(Digit::X, 1)));
        assert!(!valid_sequence(&pair(Digit::I, Digit::V), &pair(Digit::I, Digit::V)));
        assert!(!valid_sequence(&pair(Digit::I, Digit::X), &run(Digit::I, 1)));
        assert!(!valid_sequence(&run(Digit::I, 1), &run(Digit::V, 1)));
    }

    #[test]
    fn test_half_steps_compare_trailing_digit() {
        assert!(valid_sequence(&run(Digit::V, 1), &run(Digit::I, 3)));
        assert!(!valid_sequence(&run(Digit::V, 1), &pair(Digit::I, Digit::V)));
        assert!(!valid_sequence(&run(Digit::V, 1), &pair(Digit::I, Digit::X)));
        assert!(valid_sequence(&run(Digit::L, 1), &run(Digit::X, 3)));
        assert!(!valid_sequence(&run(Digit::L, 1), &pair(Digit::X, Digit::C)));
        assert!(valid_sequence(&run(Digit::D, 1), &run(Digit::C, 3)));
        assert!(!valid_sequence(&run(Digit::D, 1), &pair(Digit::C, Digit::M)));
        assert!(!valid_sequence(&run(Digit::D, 1), &pair(Digit::C, Digit::D)));
    }
}
