//! The end-to-end minimization pipeline. Includes: [`simplify`], [`simplify_terms`]
//! and [`Minimization`].

use crate::essential::essential_implicants;
use crate::implicant::Implicant;
use crate::minterm::Minterm;
use crate::prime::{prime_implicants, MergeProfile};
use crate::reduce::reduce_implicants;
use std::collections::BTreeSet;

/// The outcome of one minimization call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Minimization {
    /// The minimized cover, or `None` when the combined input was empty or the
    /// input rows disagreed on their width with no explicit width given.
    pub cover: Option<BTreeSet<Implicant>>,
    /// Merge attempt counters from prime-implicant generation.
    pub profile: MergeProfile,
}

/// Minimize a function given as ON-set and don't-care rows, reporting merge
/// counters alongside the cover.
///
/// The width is `num_bits` if given; otherwise all rows must agree on one width,
/// and a disagreement yields an empty [`Minimization`]. The pipeline generates
/// prime implicants over the union of both row sets, selects essentials and
/// reduces the selection; see the respective modules.
pub fn simplify_terms_with_profile(
    ones: &[Minterm],
    dc: &[Minterm],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Minimization {
    let mut widths = ones.iter().chain(dc).map(Minterm::len);
    let n_bits = match (num_bits, widths.next()) {
        (_, None) => return Minimization::default(),
        (Some(n), _) => n,
        (None, Some(first)) => {
            if widths.any(|width| width != first) {
                return Minimization::default();
            }
            first
        }
    };

    let terms: BTreeSet<Implicant> = ones
        .iter()
        .chain(dc)
        .map(Implicant::from_minterm)
        .collect();
    let dc_rows: BTreeSet<Minterm> = dc.iter().cloned().collect();

    let primes = prime_implicants(n_bits, use_xor, terms);
    let essentials = essential_implicants(n_bits, &primes.primes, &dc_rows);
    let reduced = reduce_implicants(n_bits, essentials, &dc_rows);

    Minimization {
        cover: Some(reduced),
        profile: primes.profile,
    }
}

/// [`simplify_terms_with_profile`] without the counters.
pub fn simplify_terms(
    ones: &[Minterm],
    dc: &[Minterm],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Option<BTreeSet<Implicant>> {
    simplify_terms_with_profile(ones, dc, num_bits, use_xor).cover
}

/// Minimize a function given as ON-set and don't-care minterm indices, reporting
/// merge counters alongside the cover.
///
/// When `num_bits` is absent the width is inferred as `ceil(ln(max) + 1)` over the
/// largest index, natural logarithm included. The inference is coarse near powers
/// of two, so callers should prefer passing `num_bits` explicitly. Indices that do
/// not fit the width are masked, as in [`Minterm::from_index`].
pub fn simplify_with_profile(
    ones: &[u64],
    dc: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Minimization {
    let Some(max_index) = ones.iter().chain(dc).copied().max() else {
        return Minimization::default();
    };
    let n_bits = num_bits.unwrap_or_else(|| inferred_width(max_index));

    let ones_rows: Vec<Minterm> = ones
        .iter()
        .map(|&index| Minterm::from_index(n_bits, index))
        .collect();
    let dc_rows: Vec<Minterm> = dc
        .iter()
        .map(|&index| Minterm::from_index(n_bits, index))
        .collect();
    simplify_terms_with_profile(&ones_rows, &dc_rows, num_bits, use_xor)
}

/// [`simplify_with_profile`] without the counters.
pub fn simplify(
    ones: &[u64],
    dc: &[u64],
    num_bits: Option<usize>,
    use_xor: bool,
) -> Option<BTreeSet<Implicant>> {
    simplify_with_profile(ones, dc, num_bits, use_xor).cover
}

// ln(0) is negative infinity, which the saturating cast turns into a zero width
// instead of a crash.
fn inferred_width(max_index: u64) -> usize {
    ((max_index as f64).ln() + 1.0).ceil() as usize
}
