//! Greedy selection of essential implicants. Includes: [`essential_implicants`].

use crate::implicant::Implicant;
use crate::minterm::Minterm;
use std::collections::{BTreeMap, BTreeSet};

/// Select a covering subset of `primes`, preferring high-rank terms.
///
/// Every prime is ranked by [`Implicant::rank`] over the rows it covers outside the
/// don't-care set. Ranks are walked from highest to lowest, and within one rank the
/// terms in reverse lexicographic order; a prime is kept only if it covers at least
/// one row the terms kept so far do not. The selection is greedy, so the result is
/// a small cover rather than a provably minimal one.
///
/// If nothing is selected (in particular if `primes` is empty), the single
/// all-don't-care term of width `n_bits` is returned as the trivial cover.
pub fn essential_implicants(
    n_bits: usize,
    primes: &BTreeSet<Implicant>,
    dc: &BTreeSet<Minterm>,
) -> BTreeSet<Implicant> {
    let mut cover_of: BTreeMap<&Implicant, BTreeSet<Minterm>> = BTreeMap::new();
    for term in primes {
        let rows = term.expansions().filter(|row| !dc.contains(row)).collect();
        cover_of.insert(term, rows);
    }

    let mut by_rank: BTreeMap<usize, BTreeSet<&Implicant>> = BTreeMap::new();
    for term in primes {
        let rank = term.rank(cover_of[term].len());
        by_rank.entry(rank).or_default().insert(term);
    }

    let mut selected: BTreeSet<Implicant> = BTreeSet::new();
    let mut covered: BTreeSet<Minterm> = BTreeSet::new();
    for bucket in by_rank.values().rev() {
        for &term in bucket.iter().rev() {
            let rows = &cover_of[term];
            if !rows.is_subset(&covered) {
                selected.insert(term.clone());
                covered.extend(rows.iter().cloned());
            }
        }
    }

    if selected.is_empty() {
        selected.insert(Implicant::all_dont_care(n_bits));
    }
    selected
}
