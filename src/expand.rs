//! Expansion of symbolic implicants into the concrete rows they cover.
//! Includes: [`Expansion`] and [`expand`].

use crate::implicant::Implicant;
use crate::minterm::Minterm;
use crate::symbol::Symbol;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// An iterator over every [`Minterm`] covered by one implicant template.
///
/// The enumeration is a forth-and-back walk over the positions of the template
/// rather than a recursion. A cursor sweeps forward filling in the working row;
/// whenever it runs off the end, the row is emitted and the cursor turns around,
/// walking backward until it finds a position it can advance (a don't-care still at
/// zero, or a parity slot that may absorb another one-bit). Advancing such a
/// position turns the cursor forward again. The walk terminates once the cursor
/// falls off the front, at which point every combination has been visited.
///
/// Fixed positions always reproduce their bit. A don't-care position behaves as an
/// independent binary counter. The parity positions share three pieces of state:
/// the number of parity slots the cursor has passed (`seen_parity`, signed by
/// direction), the running parity of one-bits placed in them (`parity_value`), and
/// the total number of parity slots in the template (`parity_slots`). On a forward
/// visit the last parity slot is forced to whatever bit completes the required
/// parity, odd for [`Symbol::Xor`] and even for [`Symbol::Xnor`]; earlier slots
/// start at zero. On a backward visit a zero slot is promoted to one only while at
/// least one parity slot remains ahead to rebalance the constraint.
///
/// Rows are emitted in the order the walk produces them, which downstream greedy
/// passes rely on being stable.
pub struct Expansion<'a> {
    template: &'a Implicant,
    row: Vec<bool>,
    cursor: isize,
    direction: isize,
    parity_slots: isize,
    seen_parity: isize,
    parity_value: bool,
    exhausted: bool,
}

impl<'a> Expansion<'a> {
    fn new(template: &'a Implicant) -> Expansion<'a> {
        Expansion {
            template,
            row: vec![false; template.len()],
            cursor: 0,
            direction: 1,
            parity_slots: template.symbols().filter(|s| s.is_parity()).count() as isize,
            seen_parity: 0,
            parity_value: false,
            exhausted: false,
        }
    }
}

impl Iterator for Expansion<'_> {
    type Item = Minterm;

    fn next(&mut self) -> Option<Minterm> {
        if self.exhausted {
            return None;
        }
        loop {
            if self.cursor < 0 {
                self.exhausted = true;
                return None;
            }
            if self.cursor as usize == self.template.len() {
                self.direction = -1;
                self.cursor -= 1;
                return Some(self.row.iter().copied().collect());
            }

            let i = self.cursor as usize;
            match self.template.symbol(i) {
                Symbol::Zero => self.row[i] = false,
                Symbol::One => self.row[i] = true,
                Symbol::DontCare => {
                    if self.direction == 1 {
                        self.row[i] = false;
                    } else if !self.row[i] {
                        self.row[i] = true;
                        self.direction = 1;
                    }
                }
                symbol @ (Symbol::Xor | Symbol::Xnor) => {
                    // The parity that must already be accumulated for the final slot
                    // to be forced to one.
                    let closing_parity = symbol == Symbol::Xnor;
                    self.seen_parity += self.direction;
                    if self.direction == 1 {
                        self.row[i] = self.seen_parity == self.parity_slots
                            && self.parity_value == closing_parity;
                    } else if !self.row[i] && self.seen_parity < self.parity_slots - 1 {
                        self.row[i] = true;
                        self.direction = 1;
                        self.seen_parity += 1;
                    }
                    if self.row[i] {
                        self.parity_value = !self.parity_value;
                    }
                }
            }
            self.cursor += self.direction;
        }
    }
}

impl Implicant {
    /// An iterator over every row this term covers. See [`Expansion`].
    pub fn expansions(&self) -> Expansion<'_> {
        Expansion::new(self)
    }
}

/// The set of rows covered by `template`, excluding any whose integer value equals
/// the integer value of a row in `exclude`.
///
/// # Panics
///
/// Panics if `template` or any member of `exclude` is wider than 64 bits.
pub fn expand(template: &Implicant, exclude: &BTreeSet<Minterm>) -> BTreeSet<Minterm> {
    let excluded: FxHashSet<u64> = exclude.iter().map(Minterm::index).collect();
    template
        .expansions()
        .filter(|row| !excluded.contains(&row.index()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::expand::expand;
    use crate::implicant::Implicant;
    use crate::minterm::Minterm;
    use std::collections::BTreeSet;

    fn term(s: &str) -> Implicant {
        s.parse().unwrap()
    }

    fn rows(terms: &[&str]) -> BTreeSet<Minterm> {
        terms.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn emitted(template: &str) -> Vec<String> {
        term(template)
            .expansions()
            .map(|row| row.to_string())
            .collect()
    }

    #[test]
    fn fixed_positions_reproduce_their_bits() {
        assert_eq!(emitted("10"), ["10"]);
        assert_eq!(emitted("0110"), ["0110"]);
    }

    #[test]
    fn dont_cares_count_in_order() {
        assert_eq!(emitted("--"), ["00", "01", "10", "11"]);
        assert_eq!(emitted("1-0-"), ["1000", "1001", "1100", "1101"]);
    }

    #[test]
    fn xor_rows_have_odd_parity() {
        assert_eq!(emitted("^^"), ["01", "10"]);
        assert_eq!(emitted("^^^"), ["001", "010", "100", "111"]);
        for row in term("-^0^^").expansions() {
            let ones = [1usize, 3, 4]
                .iter()
                .filter(|&&i| row.bits().nth(i).unwrap())
                .count();
            assert_eq!(ones % 2, 1);
        }
    }

    #[test]
    fn xnor_rows_have_even_parity() {
        assert_eq!(emitted("~~"), ["00", "11"]);
        assert_eq!(emitted("~~~"), ["000", "011", "101", "110"]);
    }

    #[test]
    fn expansion_counts() {
        // Without parity slots a template covers one row per don't-care assignment.
        assert_eq!(term("1-0--").expansions().count(), 8);
        // Parity slots halve the free assignments: one slot is forced.
        assert_eq!(term("1--^^").expansions().count(), 8);
        assert_eq!(term("0^^^").expansions().count(), 4);
        assert_eq!(term("~~~~").expansions().count(), 8);
        // The all-don't-care template covers the whole cube.
        assert_eq!(term("----").expansions().count(), 16);
        let full: BTreeSet<Minterm> = (0..16).map(|i| Minterm::from_index(4, i)).collect();
        assert_eq!(expand(&term("----"), &BTreeSet::new()), full);
    }

    #[test]
    fn empty_template_covers_the_empty_row() {
        assert_eq!(emitted(""), [""]);
    }

    #[test]
    fn exclusion_is_by_integer_value() {
        assert_eq!(expand(&term("1-"), &rows(&["10"])), rows(&["11"]));
        assert_eq!(
            expand(&term("--"), &rows(&["01", "11"])),
            rows(&["00", "10"])
        );
        assert_eq!(expand(&term("0-"), &rows(&["00", "01"])), BTreeSet::new());
    }

    #[test]
    fn expansion_matches_cover_semantics() {
        // Every emitted row satisfies the template; fixed bits match and the
        // parity constraint holds.
        let template = term("1-^0^");
        let rows: Vec<Minterm> = template.expansions().collect();
        assert_eq!(rows.len(), 4);
        for row in rows {
            let bits: Vec<bool> = row.bits().collect();
            assert!(bits[0]);
            assert!(!bits[3]);
            assert_eq!((bits[2] as usize + bits[4] as usize) % 2, 1);
        }
    }
}
