//! Roman digits and their character forms.
//!
//! The seven letters map one-to-one onto the seven magnitudes. Every other
//! character is simply not a digit, which is why [`Digit::from_char`] is the
//! only fallible conversion here.

use std::fmt;

use serde::Serialize;

/// One of the seven roman digits.
///
/// Variants are declared in ascending magnitude, so the derived `Ord`
/// agrees with [`Digit::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Digit {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Digit {
    /// All digits, smallest first.
    pub const ALL: [Digit; 7] = [
        Digit::I,
        Digit::V,
        Digit::X,
        Digit::L,
        Digit::C,
        Digit::D,
        Digit::M,
    ];

    /// Parses a single roman letter. Lowercase letters are not digits.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Digit::I),
            'V' => Some(Digit::V),
            'X' => Some(Digit::X),
            'L' => Some(Digit::L),
            'C' => Some(Digit::C),
            'D' => Some(Digit::D),
            'M' => Some(Digit::M),
            _ => None,
        }
    }

    /// Looks up the digit for one of the seven canonical magnitudes.
    pub fn from_value(value: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.value() == value)
    }

    pub const fn to_char(self) -> char {
        match self {
            Digit::I => 'I',
            Digit::V => 'V',
            Digit::X => 'X',
            Digit::L => 'L',
            Digit::C => 'C',
            Digit::D => 'D',
            Digit::M => 'M',
        }
    }

    pub const fn value(self) -> u64 {
        match self {
            Digit::I => 1,
            Digit::V => 5,
            Digit::X => 10,
            Digit::L => 50,
            Digit::C => 100,
            Digit::D => 500,
            Digit::M => 1000,
        }
    }

    /// True for V, L and D: the digits that may never repeat or act as a prefix.
    pub const fn is_half_step(self) -> bool {
        matches!(self, Digit::V | Digit::L | Digit::D)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
