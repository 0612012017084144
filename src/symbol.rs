//! Defines the five-character implicant alphabet. Includes: [`Symbol`] and [`ParseTermError`].

use std::fmt;
use thiserror::Error;

/// One position of an implicant term.
///
/// A term is a fixed-width sequence of symbols. `Zero` and `One` pin the bit at their
/// position, `DontCare` covers both values, and the two parity markers constrain the
/// whole term: among all positions marked [`Symbol::Xor`], an odd number of bits must
/// be one, while among all positions marked [`Symbol::Xnor`], an even number must be
/// one. A well-formed term never mixes the two parity markers.
///
/// The variant order is chosen so that the derived ordering coincides with the byte
/// ordering of the rendered characters (`'-' < '0' < '1' < '^' < '~'`). Every ordered
/// traversal in this crate relies on that correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// `'-'`: the bit at this position can be either zero or one.
    DontCare,
    /// `'0'`: the bit at this position is fixed at zero.
    Zero,
    /// `'1'`: the bit at this position is fixed at one.
    One,
    /// `'^'`: parity slot; an odd number of the `'^'` positions must be one.
    Xor,
    /// `'~'`: parity slot; an even number of the `'~'` positions must be one.
    Xnor,
}

impl Symbol {
    /// Decode a symbol from its character rendering, or `None` for characters
    /// outside the alphabet.
    pub fn from_char(character: char) -> Option<Symbol> {
        match character {
            '-' => Some(Symbol::DontCare),
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            '^' => Some(Symbol::Xor),
            '~' => Some(Symbol::Xnor),
            _ => None,
        }
    }

    /// The character rendering of this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::DontCare => '-',
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Xor => '^',
            Symbol::Xnor => '~',
        }
    }

    /// The fixed symbol corresponding to a concrete bit.
    pub fn from_bit(bit: bool) -> Symbol {
        if bit { Symbol::One } else { Symbol::Zero }
    }

    /// Returns `true` for the two parity markers.
    pub fn is_parity(self) -> bool {
        matches!(self, Symbol::Xor | Symbol::Xnor)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An error produced when parsing a term or minterm from its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseTermError {
    /// The character does not belong to the `{'0', '1', '-', '^', '~'}` alphabet.
    #[error("character {0:?} is not a term symbol")]
    NotASymbol(char),
    /// The character is not a concrete `'0'`/`'1'` bit.
    #[error("character {0:?} is not a bit")]
    NotABit(char),
}

#[cfg(test)]
mod tests {
    use crate::symbol::Symbol;

    #[test]
    fn symbol_char_round_trip() {
        for c in ['-', '0', '1', '^', '~'] {
            let symbol = Symbol::from_char(c).unwrap();
            assert_eq!(symbol.as_char(), c);
            assert_eq!(symbol.to_string(), c.to_string());
        }
        assert_eq!(Symbol::from_char('#'), None);
        assert_eq!(Symbol::from_char('x'), None);
    }

    #[test]
    fn symbol_order_matches_character_order() {
        let mut symbols = [
            Symbol::Xnor,
            Symbol::One,
            Symbol::DontCare,
            Symbol::Xor,
            Symbol::Zero,
        ];
        symbols.sort();
        let rendered: Vec<char> = symbols.iter().map(|s| s.as_char()).collect();
        let mut characters = rendered.clone();
        characters.sort();
        assert_eq!(rendered, characters);
    }

    #[test]
    fn symbol_classification() {
        assert!(Symbol::Xor.is_parity());
        assert!(Symbol::Xnor.is_parity());
        assert!(!Symbol::Zero.is_parity());
        assert!(!Symbol::One.is_parity());
        assert!(!Symbol::DontCare.is_parity());
        assert_eq!(Symbol::from_bit(true), Symbol::One);
        assert_eq!(Symbol::from_bit(false), Symbol::Zero);
    }
}
