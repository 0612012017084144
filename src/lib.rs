//! Minimization of fixed-width boolean functions using an extended
//! Quine-McCluskey procedure that also recognizes XOR and XNOR structure.
//!
//! The input is the ON-set of a boolean function (plus an optional don't-care
//! set), given either as minterm indices or as concrete [`Minterm`] rows. The
//! output is a small cover of [`Implicant`] terms over the `{0, 1, -, ^, ~}`
//! alphabet: fixed bits, don't-care positions, and parity positions that fold a
//! whole XOR or XNOR chain into a single term. Recognizing parity structure is
//! what keeps functions like multi-bit XOR from exploding into one product term
//! per minterm.
//!
//! The pipeline is the classic one: [`prime_implicants`] merges terms until
//! nothing combines, [`essential_implicants`] greedily selects a covering subset,
//! and [`reduce_implicants`] squeezes the selection. Both greedy passes are
//! locally optimal only, so the result is small but not guaranteed minimal.
//!
//! ```
//! use quinx::simplify;
//!
//! // f(b3, b2, b1, b0) = b1 xor b0, given as the indices where f is one.
//! let cover = simplify(&[1, 2, 5, 6, 9, 10, 13, 14], &[], Some(4), true).unwrap();
//! let rendered: Vec<String> = cover.iter().map(|term| term.to_string()).collect();
//! assert_eq!(rendered, ["--^^"]);
//! ```
//!
//! Every call is a pure function of its inputs: no shared state, no
//! interior threading, and deterministic iteration everywhere, down to the
//! profiling counters of the `_with_profile` entry points.

pub mod essential;
pub mod expand;
pub mod implicant;
pub mod minterm;
pub mod prime;
pub mod reduce;
pub mod simplify;
pub mod symbol;

pub use crate::essential::essential_implicants;
pub use crate::expand::{expand, Expansion};
pub use crate::implicant::{Implicant, Positions};
pub use crate::minterm::Minterm;
pub use crate::prime::{prime_implicants, MergeProfile, PrimeImplicants};
pub use crate::reduce::{combine_implicants, reduce_implicants};
pub use crate::simplify::{
    simplify, simplify_terms, simplify_terms_with_profile, simplify_with_profile, Minimization,
};
pub use crate::symbol::{ParseTermError, Symbol};
