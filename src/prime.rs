//! Prime-implicant generation. Includes: [`prime_implicants`], [`PrimeImplicants`]
//! and [`MergeProfile`].

use crate::implicant::Implicant;
use crate::symbol::Symbol;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};

/// Counters of merge attempts performed while generating prime implicants.
/// Diagnostic only; the counters do not influence the result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeProfile {
    /// Attempts to merge two terms that differ in a single bit.
    pub adjacency: u64,
    /// Attempts to extend an XOR term by one position.
    pub xor: u64,
    /// Attempts to extend an XNOR term by one position.
    pub xnor: u64,
}

/// The outcome of prime-implicant generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeImplicants {
    /// Every term that could not be merged into a larger one.
    pub primes: BTreeSet<Implicant>,
    /// Merge attempt counters.
    pub profile: MergeProfile,
}

/// Terms are grouped by their counts of ones, XOR positions and XNOR positions.
/// At most one of the parity counts is non-zero for any well-formed term.
type GroupKey = (usize, usize, usize);

fn group_key(term: &Implicant) -> GroupKey {
    let n_ones = term.count(Symbol::One);
    let n_xor = term.count(Symbol::Xor);
    let n_xnor = term.count(Symbol::Xnor);
    debug_assert!(
        n_xor == 0 || n_xnor == 0,
        "a term must not mix XOR and XNOR markers: {term}"
    );
    (n_ones, n_xor, n_xnor)
}

/// Compute the prime implicants of the union of the ON-set and don't-care terms.
///
/// The terms are repeatedly grouped by [`GroupKey`] and merged along three axes
/// until a full pass produces nothing new:
///
/// - *adjacency*: two terms differing in one bit fuse into a term with a
///   don't-care at that bit;
/// - *XOR extension*: a term gains a parity position when its parity-relabeled
///   counterpart with one more one-bit exists (flipping a bit while swapping
///   `^` and `~` preserves the represented function);
/// - *XNOR extension*: the mirror image of the previous axis.
///
/// When `use_xor` is set, the initial terms are first seeded with every two-bit
/// XOR and XNOR fusion of plain terms; the seeding runs once. Terms that survive a
/// pass unmerged are prime and accumulate in the result.
///
/// # Panics
///
/// Panics if a term contains more than `n_bits` ones, and may panic when terms of
/// width other than `n_bits` are mixed in.
pub fn prime_implicants(
    n_bits: usize,
    use_xor: bool,
    terms: BTreeSet<Implicant>,
) -> PrimeImplicants {
    let mut terms = terms;
    let mut profile = MergeProfile::default();
    let mut marked: BTreeSet<Implicant> = BTreeSet::new();

    if use_xor {
        // One-shot seeding of two-bit parity primitives, bucketed by ones count.
        // XOR fusion pairs terms within a bucket; XNOR fusion pairs a bucket with
        // the one two ones above it.
        let n_groups = n_bits + 1;
        let mut buckets: Vec<BTreeSet<Implicant>> = vec![BTreeSet::new(); n_groups];
        for term in &terms {
            buckets[term.count(Symbol::One)].insert(term.clone());
        }
        let mut seeded: Vec<Implicant> = Vec::new();
        for (gi, bucket) in buckets.iter().enumerate() {
            for t1 in bucket {
                for t2 in bucket {
                    if let Some(fused) = t1.fuse_xor(t2) {
                        seeded.push(fused);
                    }
                }
                if gi + 2 < n_groups {
                    for t2 in &buckets[gi + 2] {
                        if let Some(fused) = t1.fuse_xnor(t2) {
                            seeded.push(fused);
                        }
                    }
                }
            }
        }
        terms.extend(seeded);
    }

    let mut groups: BTreeMap<GroupKey, BTreeSet<Implicant>> = BTreeMap::new();
    loop {
        groups.clear();
        for term in &terms {
            groups.entry(group_key(term)).or_default().insert(term.clone());
        }

        let mut merged: BTreeSet<Implicant> = BTreeSet::new();
        let mut used: FxHashSet<Implicant> = FxHashSet::default();

        // Adjacency pass: try to pair each term with the member of the next group
        // obtained by promoting one of its zeros to a one.
        for (&(n_ones, n_xor, n_xnor), group) in &groups {
            let Some(group_next) = groups.get(&(n_ones + 1, n_xor, n_xnor)) else {
                continue;
            };
            for t1 in group {
                for i in 0..t1.len() {
                    if t1.symbol(i) != Symbol::Zero {
                        continue;
                    }
                    profile.adjacency += 1;
                    let t2 = t1.with_symbol(i, Symbol::One);
                    if group_next.contains(&t2) {
                        merged.insert(t1.with_symbol(i, Symbol::DontCare));
                        used.insert(t1.clone());
                        used.insert(t2);
                    }
                }
            }
        }

        // XOR pass: the complement key swaps the parity counts, because flipping a
        // bit while relabeling the parity marker preserves the function.
        for (&(n_ones, n_xor, n_xnor), group) in &groups {
            if n_xor == 0 {
                continue;
            }
            let Some(complement) = groups.get(&(n_ones + 1, n_xnor, n_xor)) else {
                continue;
            };
            for t1 in group {
                let relabeled = t1.with_parity(Symbol::Xnor);
                for i in 0..t1.len() {
                    if t1.symbol(i) != Symbol::Zero {
                        continue;
                    }
                    profile.xor += 1;
                    let t2 = relabeled.with_symbol(i, Symbol::One);
                    if complement.contains(&t2) {
                        merged.insert(t1.with_symbol(i, Symbol::Xor));
                        used.insert(t1.clone());
                    }
                }
            }
        }

        // XNOR pass, the mirror image of the XOR pass.
        for (&(n_ones, n_xor, n_xnor), group) in &groups {
            if n_xnor == 0 {
                continue;
            }
            let Some(complement) = groups.get(&(n_ones + 1, n_xnor, n_xor)) else {
                continue;
            };
            for t1 in group {
                let relabeled = t1.with_parity(Symbol::Xor);
                for i in 0..t1.len() {
                    if t1.symbol(i) != Symbol::Zero {
                        continue;
                    }
                    profile.xnor += 1;
                    let t2 = relabeled.with_symbol(i, Symbol::One);
                    if complement.contains(&t2) {
                        merged.insert(t1.with_symbol(i, Symbol::Xnor));
                        used.insert(t1.clone());
                    }
                }
            }
        }

        // Terms that took part in no merge are prime.
        for group in groups.values() {
            for term in group {
                if !used.contains(term) {
                    marked.insert(term.clone());
                }
            }
        }

        let done = used.is_empty();
        terms = merged;
        if done {
            break;
        }
    }

    let mut primes = marked;
    for group in groups.values() {
        primes.extend(group.iter().cloned());
    }
    PrimeImplicants { primes, profile }
}

#[cfg(test)]
mod tests {
    use crate::implicant::Implicant;
    use crate::prime::{prime_implicants, MergeProfile};
    use std::collections::BTreeSet;

    fn terms(list: &[&str]) -> BTreeSet<Implicant> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn single_term_is_its_own_prime() {
        let result = prime_implicants(3, false, terms(&["010"]));
        assert_eq!(result.primes, terms(&["010"]));
        assert_eq!(result.profile, MergeProfile::default());
    }

    #[test]
    fn full_cube_collapses_to_all_dont_care() {
        let input = terms(&["00", "01", "10", "11"]);
        let result = prime_implicants(2, false, input);
        assert_eq!(result.primes, terms(&["--"]));
        // Two zeros in "00", one each in "01" and "10" on the first pass, then the
        // two half-cube terms each offer one zero on the second pass.
        assert_eq!(result.profile.adjacency, 6);
        assert_eq!(result.profile.xor, 0);
        assert_eq!(result.profile.xnor, 0);
    }

    #[test]
    fn overlapping_chain_keeps_both_merged_terms() {
        let result = prime_implicants(2, false, terms(&["01", "10", "11"]));
        assert_eq!(result.primes, terms(&["-1", "1-"]));
    }

    #[test]
    fn xor_seeding_produces_the_two_bit_parity_term() {
        let result = prime_implicants(2, true, terms(&["01", "10"]));
        assert_eq!(result.primes, terms(&["01", "10", "^^"]));
        // Neither seeded pair reaches the merge passes: there is no complement
        // group one level up.
        assert_eq!(result.profile.xor, 0);
        assert_eq!(result.profile.xnor, 0);
    }

    #[test]
    fn xor_extension_grows_parity_terms() {
        // The odd-parity function of three variables. Seeding produces the two-bit
        // parity terms; the XOR pass then extends them across the third position.
        let input = terms(&["001", "010", "100", "111"]);
        let result = prime_implicants(3, true, input);
        assert!(result.primes.contains(&"^^^".parse().unwrap()));
        let expected = terms(&["001", "010", "100", "111", "~~1", "~1~", "1~~", "^^^"]);
        assert_eq!(result.primes, expected);
        // Each of the three seeded XOR terms has exactly one zero to extend over.
        assert_eq!(result.profile.xor, 3);
        assert_eq!(result.profile.xnor, 0);
    }

    #[test]
    fn without_xor_no_parity_merges_are_attempted() {
        let input = terms(&["001", "010", "100", "111"]);
        let result = prime_implicants(3, false, input);
        assert_eq!(result.profile.xor, 0);
        assert_eq!(result.profile.xnor, 0);
        // No two of these terms are adjacent, so they are all prime.
        assert_eq!(result.primes, terms(&["001", "010", "100", "111"]));
    }

    #[test]
    fn profiles_are_deterministic() {
        let input = terms(&["0011", "0101", "0110", "1001", "1010", "1100"]);
        let first = prime_implicants(4, true, input.clone());
        let second = prime_implicants(4, true, input);
        assert_eq!(first, second);
    }
}
