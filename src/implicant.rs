//! Defines symbolic implicant terms. Includes: [`Implicant`] and [`Positions`].

use crate::minterm::Minterm;
use crate::symbol::{ParseTermError, Symbol};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A symbolic term over the `{'0', '1', '-', '^', '~'}` alphabet.
///
/// An implicant represents the set of [`Minterm`] rows that satisfy all of its
/// positions: fixed bits must match, don't-care positions are free, and the parity
/// positions must jointly satisfy the odd ([`Symbol::Xor`]) or even ([`Symbol::Xnor`])
/// constraint. See [`Implicant::expansions`] for the enumeration of that set.
///
/// The derived ordering is lexicographic over the symbols and coincides with the byte
/// ordering of the string rendering, which keeps every ordered traversal of implicant
/// sets deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    symbols: SmallVec<[Symbol; 16]>,
}

/// The positions of each symbol within one implicant, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions {
    pub ones: Vec<usize>,
    pub zeros: Vec<usize>,
    pub xors: Vec<usize>,
    pub xnors: Vec<usize>,
    pub dont_cares: Vec<usize>,
}

impl Implicant {
    /// The term of `n_bits` don't-care positions, covering every row of that width.
    pub fn all_dont_care(n_bits: usize) -> Implicant {
        Implicant {
            symbols: std::iter::repeat(Symbol::DontCare).take(n_bits).collect(),
        }
    }

    /// The implicant covering exactly the given row.
    pub fn from_minterm(minterm: &Minterm) -> Implicant {
        minterm.bits().map(Symbol::from_bit).collect()
    }

    /// The number of positions in this term.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the term has no positions.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn symbol(&self, index: usize) -> Symbol {
        self.symbols[index]
    }

    /// An iterator over the symbols, most significant position first.
    pub fn symbols(&self) -> impl DoubleEndedIterator<Item = Symbol> + ExactSizeIterator + '_ {
        self.symbols.iter().copied()
    }

    /// The number of positions holding the given symbol.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    /// A copy of this term with one position replaced.
    pub(crate) fn with_symbol(&self, index: usize, symbol: Symbol) -> Implicant {
        let mut copy = self.clone();
        copy.symbols[index] = symbol;
        copy
    }

    /// A copy of this term with every parity position relabeled to `marker`.
    pub(crate) fn with_parity(&self, marker: Symbol) -> Implicant {
        self.symbols()
            .map(|s| if s.is_parity() { marker } else { s })
            .collect()
    }

    /// Split the term into per-symbol position lists.
    pub fn positions(&self) -> Positions {
        let mut positions = Positions::default();
        for (i, symbol) in self.symbols().enumerate() {
            match symbol {
                Symbol::One => positions.ones.push(i),
                Symbol::Zero => positions.zeros.push(i),
                Symbol::Xor => positions.xors.push(i),
                Symbol::Xnor => positions.xnors.push(i),
                Symbol::DontCare => positions.dont_cares.push(i),
            }
        }
        positions
    }

    /// An estimate of how expensive this term is to realize as a gate. Lower is
    /// better. Fixed ones cost 1.0, fixed zeros 1.5 (they need an inverter), XOR
    /// positions 1.25, XNOR positions 1.75, and don't-care positions are free.
    pub fn complexity(&self) -> f64 {
        self.symbols()
            .map(|symbol| match symbol {
                Symbol::One => 1.00,
                Symbol::Zero => 1.50,
                Symbol::Xor => 1.25,
                Symbol::Xnor => 1.75,
                Symbol::DontCare => 0.0,
            })
            .sum()
    }

    /// The selection priority of this term given the number of useful rows it
    /// covers. Higher is better: coverage dominates, then broad don't-care terms win
    /// over parity terms, which win over fixed bits.
    pub fn rank(&self, cover_size: usize) -> usize {
        let weights: usize = self
            .symbols()
            .map(|symbol| match symbol {
                Symbol::DontCare => 8,
                Symbol::Xor => 4,
                Symbol::Xnor => 2,
                Symbol::One => 1,
                Symbol::Zero => 0,
            })
            .sum();
        4 * cover_size + weights
    }

    /// Try to fuse two parity-free terms into a two-bit XOR term.
    ///
    /// Succeeds only when the terms differ in exactly two positions, one changing
    /// from one to zero and the other from zero to one; the fused term carries
    /// [`Symbol::Xor`] at both. Returns `None` for terms of different lengths or
    /// terms that already contain a parity marker.
    pub fn fuse_xor(&self, other: &Implicant) -> Option<Implicant> {
        self.fuse(other, Symbol::Xor, |to_zero, to_one| {
            to_zero == 1 && to_one == 1
        })
    }

    /// Try to fuse two parity-free terms into a two-bit XNOR term.
    ///
    /// The counterpart of [`Implicant::fuse_xor`] for the equality pattern: the two
    /// differing positions must both change in the same direction, and the fused term
    /// carries [`Symbol::Xnor`] at both.
    pub fn fuse_xnor(&self, other: &Implicant) -> Option<Implicant> {
        self.fuse(other, Symbol::Xnor, |to_zero, to_one| {
            (to_zero == 2 && to_one == 0) || (to_zero == 0 && to_one == 2)
        })
    }

    fn fuse(
        &self,
        other: &Implicant,
        marker: Symbol,
        accept: impl Fn(usize, usize) -> bool,
    ) -> Option<Implicant> {
        if self.len() != other.len() {
            return None;
        }
        let mut diffs_to_zero = 0;
        let mut diffs_to_one = 0;
        let mut fused = SmallVec::with_capacity(self.len());
        for (a, b) in self.symbols().zip(other.symbols()) {
            if a.is_parity() || b.is_parity() {
                return None;
            }
            if a == b {
                fused.push(a);
            } else {
                fused.push(marker);
                if b == Symbol::Zero {
                    diffs_to_zero += 1;
                } else {
                    diffs_to_one += 1;
                }
            }
        }
        if accept(diffs_to_zero, diffs_to_one) {
            Some(Implicant { symbols: fused })
        } else {
            None
        }
    }
}

impl FromIterator<Symbol> for Implicant {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Implicant {
        Implicant {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Implicant {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Implicant, ParseTermError> {
        s.chars()
            .map(|c| Symbol::from_char(c).ok_or(ParseTermError::NotASymbol(c)))
            .collect()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}
