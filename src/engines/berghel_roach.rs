//! Tight-band Damerau-Levenshtein distance (Berghel & Roach, 1996).
//!
//! Algorithm "BR" from *An Extension of Ukkonen's Enhanced Dynamic
//! Programming ASM Algorithm* (ACM TOIS 14:1). It uses the same diagonal
//! function as [`ukkonen`](fn@super::ukkonen) but bounds the cells it visits
//! more tightly: f(n - m, s) only depends on cells (k, q) with
//! |k - (n - m)| + q ≤ s. Round `p` therefore fills the anti-diagonal
//!
//! ```text
//!     { (k, q) : |k - (n - m)| + q = p,  |k| ≤ q,  -m ≤ k ≤ n }
//! ```
//!
//! in ascending `q`, then probes the target (n - m, p). The loop starts at
//! p = |n - m|, since no cheaper path can reach the target diagonal. Every
//! predecessor of a cell in round `p` lies on an earlier anti-diagonal, or on
//! this one at a smaller `q`. So each value read was written earlier in the
//! same run. The seeded starting points come from the table itself.
//!
//! Because of that ordering, a [`DiagonalTable`] can be reused across
//! comparisons without a reset. Stale cells from an earlier pair are never
//! read: neighbour reads outside the current [-m, n] diagonal range count as
//! unreached, and every in-range cell read is rewritten first.

use crate::error::DlError;
use crate::table::{DiagonalTable, UNREACHED};
use crate::traits::DistanceEngine;
use crate::utils::diagonal_end;

/// Diagonals actually probed in one outer round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub lower: isize,
    pub upper: isize,
}

impl Band {
    fn widen(band: Option<Band>, k: isize) -> Option<Band> {
        Some(match band {
            None => Band { lower: k, upper: k },
            Some(b) => Band {
                lower: b.lower.min(k),
                upper: b.upper.max(k),
            },
        })
    }
}

/// Tight-band engine owning one reusable diagonal table.
///
/// ```
/// use dl_engines::engines::BerghelRoach;
/// use dl_engines::traits::DistanceEngine;
///
/// let mut engine = BerghelRoach::with_capacity(16);
/// assert_eq!(engine.compute(b"kitten", b"sitting").unwrap(), 3);
/// assert_eq!(engine.compute(b"flaw", b"lawn").unwrap(), 2);
/// // Pairs longer than the table are rejected, not truncated.
/// assert!(engine.compute(&[b'x'; 17], b"").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct BerghelRoach {
    table: DiagonalTable,
}

impl BerghelRoach {
    /// Engine whose table holds pairs whose longer string has at most
    /// `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: DiagonalTable::new(capacity),
        }
    }

    /// The scratch table shared by every call.
    pub fn table(&self) -> &DiagonalTable {
        &self.table
    }
}

impl DistanceEngine for BerghelRoach {
    fn name(&self) -> &'static str {
        "br"
    }

    fn distance(&mut self, a: &[u8], b: &[u8], verbose: bool) -> Result<usize, DlError> {
        berghel_roach_with(&mut self.table, a, b, verbose)
    }
}

/// Damerau-Levenshtein distance between `a` and `b` by the tight band,
/// using a table allocated for this call.
///
/// ```
/// use dl_engines::berghel_roach;
///
/// assert_eq!(berghel_roach(b"kitten", b"sitting"), 3);
/// assert_eq!(berghel_roach(b"abcdefg", b"bacdfeg"), 2);
/// ```
pub fn berghel_roach(a: &[u8], b: &[u8]) -> usize {
    let mut table = DiagonalTable::new(a.len().max(b.len()));
    run(&mut table, a, b, false)
}

/// Compute the distance using a caller-owned table.
///
/// The table is mutated in place and may be handed to the next call as is.
/// Callers must not share one table between concurrent computations.
///
/// # Errors
/// [`DlError::TableTooSmall`] if the longer of `a` and `b` exceeds the
/// table's capacity; the table is left untouched.
pub fn berghel_roach_with(
    table: &mut DiagonalTable,
    a: &[u8],
    b: &[u8],
    verbose: bool,
) -> Result<usize, DlError> {
    let required = a.len().max(b.len());
    if required > table.capacity() {
        return Err(DlError::TableTooSmall {
            required,
            capacity: table.capacity(),
        });
    }
    Ok(run(table, a, b, verbose))
}

fn run(table: &mut DiagonalTable, a: &[u8], b: &[u8], verbose: bool) -> usize {
    let m = a.len() as isize;
    let n = b.len() as isize;
    let target = n - m;

    if verbose {
        tracing::debug!(
            "comparing '{}' ({m}) to '{}' ({n}) starting k at {target}",
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b),
        );
    }

    let mut p = target.abs();
    loop {
        let mut band = None;
        let mut inc = p;
        for q in 0..p {
            for k in [target - inc, target + inc] {
                if k.abs() <= q && k >= -m && k <= n {
                    let t = probe(a, b, table, k, q);
                    table.set(k, q, t);
                    band = Band::widen(band, k);
                }
            }
            inc -= 1;
        }
        let reach = probe(a, b, table, target, p);
        table.set(target, p, reach);
        if verbose {
            let band = Band::widen(band, target);
            tracing::trace!(p, reach, ?band, "round complete");
        }
        if reach == m {
            break;
        }
        p += 1;
    }

    if verbose {
        tracing::debug!(distance = p, "f(k,p):\n{table}");
    }
    p as usize
}

/// f(k, p) from its predecessors at p - 1.
fn probe(a: &[u8], b: &[u8], table: &DiagonalTable, k: isize, p: isize) -> isize {
    let m = a.len() as isize;
    let n = b.len() as isize;
    let neighbour = |k: isize| {
        if k < -m || k > n {
            UNREACHED
        } else {
            table.get(k, p - 1)
        }
    };

    let mut t = table.get(k, p - 1) + 1;
    let mut swapped = t;
    if t > 0 && t < m && k + t - 1 >= 0 && k + t < n {
        let (ut, uk) = (t as usize, (k + t) as usize);
        if a[ut - 1] == b[uk] && a[ut] == b[uk - 1] {
            swapped = t + 1;
        }
    }
    let end = diagonal_end(m, n, k);
    t = t
        .max(neighbour(k - 1))
        .max(neighbour(k + 1) + 1)
        .max(swapped)
        .min(end);

    while t >= 0 && t + k >= 0 && t < end && a[t as usize] == b[(t + k) as usize] {
        t += 1;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{lowrance_wagner, ukkonen};

    #[test]
    fn known_values() {
        assert_eq!(berghel_roach(b"a", b"b"), 1);
        assert_eq!(berghel_roach(b"kitten", b"sitting"), 3);
        assert_eq!(berghel_roach(b"", b""), 0);
        assert_eq!(berghel_roach(b"abc", b"abc"), 0);
        assert_eq!(berghel_roach(b"ab", b"ba"), 1);
    }

    #[test]
    fn longer_string_first_is_supported() {
        assert_eq!(berghel_roach(b"sitting", b"kitten"), 3);
        assert_eq!(berghel_roach(b"abcd", b""), 4);
        assert_eq!(berghel_roach(b"saturday", b"sunday"), 3);
    }

    #[test]
    fn agrees_with_ukkonen_on_restricted_case() {
        assert_eq!(berghel_roach(b"ca", b"abc"), ukkonen(b"ca", b"abc"));
        assert!(lowrance_wagner(b"ca", b"abc") < berghel_roach(b"ca", b"abc"));
    }

    #[test]
    fn rejects_undersized_table_without_touching_it() {
        let mut table = DiagonalTable::new(3);
        let before = table.to_string();
        let err = berghel_roach_with(&mut table, b"abcd", b"ab", false).unwrap_err();
        assert!(matches!(
            err,
            DlError::TableTooSmall {
                required: 4,
                capacity: 3
            }
        ));
        assert_eq!(table.to_string(), before);
    }

    #[test]
    fn reused_table_matches_fresh() {
        let mut table = DiagonalTable::new(12);
        let pairs: [(&[u8], &[u8]); 5] = [
            (b"abcdefghijkl", b"bacdefghijlk"),
            (b"ab", b"ba"),
            (b"sunday", b"saturday"),
            (b"", b"xyz"),
            (b"gumbo", b"gambol"),
        ];
        for (a, b) in pairs {
            let reused = berghel_roach_with(&mut table, a, b, false).unwrap();
            assert_eq!(reused, berghel_roach(a, b));
        }
    }

    #[test]
    fn band_tracks_extremes() {
        let band = [3, -1, 2]
            .into_iter()
            .fold(None, Band::widen)
            .unwrap();
        assert_eq!(band, Band { lower: -1, upper: 3 });
    }

    #[test]
    fn table_is_monotone_in_p() {
        let mut table = DiagonalTable::new(8);
        let d = berghel_roach_with(&mut table, b"kitten", b"sitting", false).unwrap();
        assert_eq!(d, 3);
        for k in -8isize..=8 {
            let mut prev = UNREACHED;
            for p in -1..=8 {
                let v = table.get(k, p);
                if v == UNREACHED {
                    continue;
                }
                assert!(v >= prev, "f({k},{p}) = {v} dropped below {prev}");
                prev = v;
            }
        }
    }
}
