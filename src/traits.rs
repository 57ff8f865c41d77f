//! The contract every distance engine exposes.
//!
//! Engines are drop-in compatible: the runner drives any of them through a
//! `Box<dyn DistanceEngine>`. Only [`distance`](DistanceEngine::distance) must
//! be implemented; `compute` and `verify` are derived from it.

use crate::error::DlError;

/// A Damerau-Levenshtein distance engine.
///
/// Sequences are byte slices; every byte value is a valid symbol.
///
/// Implementations take `&mut self` so that an engine may own scratch state
/// reused across calls (see [`BerghelRoach`](crate::engines::BerghelRoach)).
/// Stateless engines simply ignore it.
pub trait DistanceEngine {
    /// Short identifier used in logs (`"lw"`, `"uk"`, `"br"`).
    fn name(&self) -> &'static str;

    /// Compute the distance between `a` and `b`.
    ///
    /// With `verbose` set the engine emits its working tables as `debug`
    /// tracing events; the result is unaffected.
    ///
    /// # Errors
    /// Only engines with bounded scratch storage fail, and only with
    /// [`DlError::TableTooSmall`].
    fn distance(&mut self, a: &[u8], b: &[u8], verbose: bool) -> Result<usize, DlError>;

    /// Compute the distance between `a` and `b` without tracing.
    fn compute(&mut self, a: &[u8], b: &[u8]) -> Result<usize, DlError> {
        self.distance(a, b, false)
    }

    /// Report whether the distance between `a` and `b` equals `expected`.
    ///
    /// A mismatch is `Ok(false)`, never an error.
    fn verify(
        &mut self,
        a: &[u8],
        b: &[u8],
        expected: usize,
        verbose: bool,
    ) -> Result<bool, DlError> {
        let computed = self.distance(a, b, verbose)?;
        if verbose {
            tracing::debug!(
                engine = self.name(),
                computed,
                expected,
                "computed distance is {computed}"
            );
        }
        Ok(computed == expected)
    }
}
