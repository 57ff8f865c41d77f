//! Damerau-Levenshtein distance, three ways
//!
//! The Damerau-Levenshtein distance between two strings is the minimum number
//! of single-symbol insertions, deletions, substitutions and adjacent
//! transpositions needed to turn one into the other. This crate computes it
//! with three historically significant algorithms:
//!
//! 1. Lowrance & Wagner (1975): the full O(m·n) matrix.
//! 2. Ukkonen (1985): a diagonal function f(k, p) over a band that widens
//!    with the edit count, stopping as soon as the distance is known.
//! 3. Berghel & Roach (1996): the same function over a tighter band, with a
//!    scratch table that can be reused across comparisons.
//!
//! Sequences are byte slices; each byte is one symbol.
//!
//! ## Quick start
//! ```
//! use dl_engines::{berghel_roach, lowrance_wagner, ukkonen};
//!
//! assert_eq!(lowrance_wagner(b"kitten", b"sitting"), 3);
//! assert_eq!(ukkonen(b"ab", b"ba"), 1);
//! assert_eq!(berghel_roach(b"", b"abc"), 3);
//! ```
//!
//! ## Engines and batches
//! Every engine implements [`DistanceEngine`], so a corpus of
//! [`TestCase`](corpus::TestCase)s can be pushed through any of them by
//! [`runner::verify_all`] or a timed [`Runner`](runner::Runner).
//!
//! ## Transpositions
//! The banded engines recognise only transpositions of symbols adjacent in
//! both strings (the "restricted" distance). The full-matrix engine also
//! allows edits between transposed symbols. The results agree unless an
//! optimal script needs such an edit, e.g. `ca` → `abc` is 2 by the matrix
//! and 3 by the bands.

pub mod builder;
pub mod corpus;
pub mod engines;
pub mod error;
pub mod runner;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::RunnerBuilder;
pub use crate::engines::{berghel_roach, berghel_roach_with, lowrance_wagner, ukkonen};
pub use crate::error::DlError;
pub use crate::traits::DistanceEngine;
