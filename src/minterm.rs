//! Defines concrete minterm rows. Includes: [`Minterm`].

use crate::symbol::ParseTermError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A concrete row of bits, most significant bit first.
///
/// Minterms are the fully evaluated points of a boolean function: every position is a
/// fixed `0` or `1`. They appear as ON-set and don't-care inputs and as the elements of
/// implicant coverage sets. The derived ordering is lexicographic over the bits, which
/// coincides with the byte ordering of the `{'0', '1'}` string rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minterm {
    bits: SmallVec<[bool; 16]>,
}

impl Minterm {
    /// Build the `n_bits`-wide row of the non-negative integer `index`, most
    /// significant bit first.
    ///
    /// Bits of `index` beyond `n_bits` are masked off, so `index` values that do not
    /// fit the requested width wrap silently. Callers that care should check
    /// `index < 2^n_bits` themselves.
    pub fn from_index(n_bits: usize, index: u64) -> Minterm {
        let bits = (0..n_bits)
            .rev()
            .map(|k| k < u64::BITS as usize && (index >> k) & 1 == 1)
            .collect();
        Minterm { bits }
    }

    /// The integer value of this row.
    ///
    /// # Panics
    ///
    /// Panics if the row is wider than 64 bits.
    pub fn index(&self) -> u64 {
        assert!(
            self.bits.len() <= u64::BITS as usize,
            "minterm index requires a width of at most 64 bits"
        );
        self.bits
            .iter()
            .fold(0, |value, &bit| (value << 1) | u64::from(bit))
    }

    /// The number of bits in this row.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the row has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// An iterator over the bits, most significant first.
    pub fn bits(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().copied()
    }
}

impl FromIterator<bool> for Minterm {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Minterm {
        Minterm {
            bits: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Minterm {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Minterm, ParseTermError> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseTermError::NotABit(c)),
            })
            .collect()
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::minterm::Minterm;
    use crate::symbol::ParseTermError;

    fn row(s: &str) -> Minterm {
        s.parse().unwrap()
    }

    #[test]
    fn index_round_trip() {
        for n_bits in 1..=6 {
            for index in 0..(1u64 << n_bits) {
                let minterm = Minterm::from_index(n_bits, index);
                assert_eq!(minterm.len(), n_bits);
                assert_eq!(minterm.index(), index);
            }
        }
    }

    #[test]
    fn from_index_is_most_significant_bit_first() {
        assert_eq!(Minterm::from_index(4, 0b1010).to_string(), "1010");
        assert_eq!(Minterm::from_index(4, 1).to_string(), "0001");
        assert_eq!(Minterm::from_index(3, 4).to_string(), "100");
        assert_eq!(Minterm::from_index(0, 0).to_string(), "");
    }

    #[test]
    fn from_index_masks_overflowing_bits() {
        // 20 is 10100 in binary; a 4-bit row keeps only the low four bits.
        assert_eq!(Minterm::from_index(4, 20), Minterm::from_index(4, 4));
        assert_eq!(Minterm::from_index(4, 20).to_string(), "0100");
    }

    #[test]
    fn parse_round_trip() {
        for s in ["0", "1", "0101", "111000", ""] {
            assert_eq!(row(s).to_string(), s);
        }
        assert_eq!("01-1".parse::<Minterm>(), Err(ParseTermError::NotABit('-')));
        assert_eq!("01x1".parse::<Minterm>(), Err(ParseTermError::NotABit('x')));
    }

    #[test]
    fn ordering_matches_string_order() {
        let mut rows = vec![row("10"), row("01"), row("11"), row("00")];
        rows.sort();
        let rendered: Vec<String> = rows.iter().map(Minterm::to_string).collect();
        assert_eq!(rendered, ["00", "01", "10", "11"]);
    }
}
