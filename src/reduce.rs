//! Final reduction of a selected cover. Includes: [`combine_implicants`] and
//! [`reduce_implicants`].

use crate::expand::expand;
use crate::implicant::Implicant;
use crate::minterm::Minterm;
use crate::symbol::Symbol;
use std::collections::{BTreeMap, BTreeSet};

/// Try to replace two implicants by a single one with the same useful coverage.
///
/// Each candidate is built by filling the don't-care positions of one term with the
/// symbols of the other. A candidate is valid if it covers exactly the union of the
/// two input coverages, always excluding don't-care rows. Of the valid candidates
/// the one with the lower [`Implicant::complexity`] is returned, the first on a
/// tie; `None` if neither candidate is valid.
pub fn combine_implicants(
    a: &Implicant,
    b: &Implicant,
    dc: &BTreeSet<Minterm>,
) -> Option<Implicant> {
    debug_assert_eq!(a.len(), b.len());
    let rows_a = expand(a, dc);
    let rows_b = expand(b, dc);
    let union: BTreeSet<Minterm> = rows_a.union(&rows_b).cloned().collect();

    let a_filled: Implicant = a
        .symbols()
        .zip(b.symbols())
        .map(|(ours, theirs)| if ours == Symbol::DontCare { theirs } else { ours })
        .collect();
    let b_filled: Implicant = b
        .symbols()
        .zip(a.symbols())
        .map(|(ours, theirs)| if ours == Symbol::DontCare { theirs } else { ours })
        .collect();

    let mut best: Option<Implicant> = None;
    for candidate in [a_filled, b_filled] {
        if expand(&candidate, dc) != union {
            continue;
        }
        let better = match &best {
            None => true,
            Some(current) => candidate.complexity() < current.complexity(),
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

/// Shrink a cover without changing its useful coverage.
///
/// First, pairs of implicants are repeatedly combined via [`combine_implicants`];
/// every successful combination restarts the scan. Second, redundant implicants
/// (those whose useful coverage is contained in the union of all the others) are
/// removed one at a time, always dropping the redundant term with the lowest
/// [`Implicant::complexity`] first, until none remain.
///
/// An empty result is replaced by the all-don't-care term of width `n_bits`.
pub fn reduce_implicants(
    n_bits: usize,
    implicants: BTreeSet<Implicant>,
    dc: &BTreeSet<Minterm>,
) -> BTreeSet<Implicant> {
    let mut implicants = implicants;

    loop {
        let mut replacement = None;
        'scan: for (i, a) in implicants.iter().enumerate() {
            for b in implicants.iter().skip(i + 1) {
                if let Some(combined) = combine_implicants(a, b, dc) {
                    replacement = Some((a.clone(), b.clone(), combined));
                    break 'scan;
                }
            }
        }
        match replacement {
            Some((a, b, combined)) => {
                implicants.remove(&a);
                implicants.remove(&b);
                implicants.insert(combined);
            }
            None => break,
        }
    }

    let mut coverage: BTreeMap<Implicant, BTreeSet<Minterm>> = implicants
        .into_iter()
        .map(|term| {
            let rows = term.expansions().filter(|row| !dc.contains(row)).collect();
            (term, rows)
        })
        .collect();

    loop {
        let mut redundant: Vec<Implicant> = Vec::new();
        for (term, rows) in &coverage {
            let mut others: BTreeSet<&Minterm> = BTreeSet::new();
            for (other, other_rows) in &coverage {
                if other != term {
                    others.extend(other_rows.iter());
                }
            }
            if rows.iter().all(|row| others.contains(row)) {
                redundant.push(term.clone());
            }
        }
        let simplest = redundant.into_iter().reduce(|best, term| {
            if term.complexity() < best.complexity() {
                term
            } else {
                best
            }
        });
        match simplest {
            Some(term) => {
                coverage.remove(&term);
            }
            None => break,
        }
    }

    if coverage.is_empty() {
        return BTreeSet::from([Implicant::all_dont_care(n_bits)]);
    }
    coverage.into_keys().collect()
}
