//! Batch verification: drive a corpus through one selected engine.
//!
//! [`verify_all`] checks every case once and collects mismatches; a failing
//! case never stops the batch. [`Runner`] repeats that over several loops,
//! optionally reshuffling before each one, and times the verification work
//! only.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::builder::RunnerBuilder;
use crate::corpus::TestCase;
use crate::engines::{BerghelRoach, LowranceWagner, Ukkonen};
use crate::error::DlError;
use crate::traits::DistanceEngine;
use crate::utils::max_sequence_len;

/// Which engine a batch is run through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Lowrance & Wagner full matrix.
    #[value(name = "lw")]
    LowranceWagner,
    /// Ukkonen expanding band.
    #[value(name = "uk")]
    Ukkonen,
    /// Berghel & Roach tight band.
    #[value(name = "br")]
    BerghelRoach,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::LowranceWagner,
        Algorithm::Ukkonen,
        Algorithm::BerghelRoach,
    ];

    /// Short name as accepted on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::LowranceWagner => "lw",
            Algorithm::Ukkonen => "uk",
            Algorithm::BerghelRoach => "br",
        }
    }

    /// Build an engine able to handle strings up to `max_len` symbols.
    ///
    /// The tight-band engine allocates its table once here and reuses it for
    /// every case it is given.
    pub fn engine(self, max_len: usize) -> Box<dyn DistanceEngine + Send> {
        match self {
            Algorithm::LowranceWagner => Box::new(LowranceWagner),
            Algorithm::Ukkonen => Box::new(Ukkonen),
            Algorithm::BerghelRoach => Box::new(BerghelRoach::with_capacity(max_len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "lw" => Ok(Self::LowranceWagner),
            "uk" => Ok(Self::Ukkonen),
            "br" => Ok(Self::BerghelRoach),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// One case whose computed distance differed from the expected one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Position of the case in the slice that was verified.
    pub index: usize,
    pub computed: usize,
    pub expected: usize,
}

/// Outcome of verifying a batch once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub cases: usize,
    pub mismatches: Vec<Mismatch>,
}

impl BatchReport {
    /// True when every case produced its expected distance.
    pub fn all_passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Verify every case with `algorithm`.
///
/// `max_len` must be at least the longest string in `cases` (see
/// [`max_sequence_len`]); the tight-band engine sizes its shared table from it.
///
/// # Errors
/// [`DlError::TableTooSmall`] if `max_len` understates the corpus.
pub fn verify_all(
    algorithm: Algorithm,
    cases: &[TestCase],
    max_len: usize,
    verbose: bool,
) -> Result<BatchReport, DlError> {
    let mut engine = algorithm.engine(max_len);
    let mut report = BatchReport {
        cases: cases.len(),
        mismatches: Vec::new(),
    };
    for (index, tc) in cases.iter().enumerate() {
        if let Some(m) = check_case(engine.as_mut(), index, tc, verbose)? {
            report.mismatches.push(m);
        }
    }
    Ok(report)
}

/// [`verify_all`] spread over the rayon pool; each worker owns its engine.
#[cfg(feature = "parallel")]
pub fn verify_all_parallel(
    algorithm: Algorithm,
    cases: &[TestCase],
    max_len: usize,
    verbose: bool,
) -> Result<BatchReport, DlError> {
    use rayon::prelude::*;

    let outcomes = cases
        .par_iter()
        .enumerate()
        .map_init(
            || algorithm.engine(max_len),
            |engine, (index, tc)| check_case(engine.as_mut(), index, tc, verbose),
        )
        .collect::<Result<Vec<_>, DlError>>()?;
    Ok(BatchReport {
        cases: cases.len(),
        mismatches: outcomes.into_iter().flatten().collect(),
    })
}

fn check_case(
    engine: &mut (dyn DistanceEngine + Send),
    index: usize,
    tc: &TestCase,
    verbose: bool,
) -> Result<Option<Mismatch>, DlError> {
    let computed = engine.distance(&tc.a, &tc.b, verbose)?;
    if computed == tc.expected {
        return Ok(None);
    }
    tracing::warn!(
        engine = engine.name(),
        index,
        computed,
        expected = tc.expected,
        "distance mismatch for '{}' / '{}'",
        String::from_utf8_lossy(&tc.a),
        String::from_utf8_lossy(&tc.b),
    );
    Ok(Some(Mismatch {
        index,
        computed,
        expected: tc.expected,
    }))
}

/// A configured timing run over a corpus.
#[derive(Clone, Debug)]
pub struct Runner {
    pub(crate) algorithm: Algorithm,
    pub(crate) loops: usize,
    pub(crate) shuffle: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) verbose: bool,
    pub(crate) parallel: bool,
}

/// Totals over every loop of a [`Runner::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub loops: usize,
    pub cases: usize,
    /// Mismatching cases summed over all loops.
    pub mismatches: usize,
    /// Time spent verifying, excluding shuffles.
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.mismatches == 0
    }
}

impl Runner {
    pub fn builder(algorithm: Algorithm) -> RunnerBuilder {
        RunnerBuilder::new(algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn loops(&self) -> usize {
        self.loops
    }

    /// Verify `cases` once per loop, reshuffling them in place first when
    /// shuffling is enabled.
    pub fn run(&self, cases: &mut [TestCase]) -> Result<RunSummary, DlError> {
        let max_len = max_sequence_len(cases);
        tracing::debug!(
            algorithm = %self.algorithm,
            cases = cases.len(),
            max_len,
            "testing over a corpus of {} string pairs (max length {max_len})",
            cases.len()
        );

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut elapsed = Duration::ZERO;
        let mut mismatches = 0;
        for round in 0..self.loops {
            if self.shuffle {
                cases.shuffle(&mut rng);
            }
            let start = Instant::now();
            let report = self.verify_once(cases, max_len)?;
            elapsed += start.elapsed();
            if !report.all_passed() {
                tracing::debug!(round, failed = report.mismatches.len(), "loop had mismatches");
            }
            mismatches += report.mismatches.len();
        }

        Ok(RunSummary {
            algorithm: self.algorithm,
            loops: self.loops,
            cases: cases.len(),
            mismatches,
            elapsed,
        })
    }

    #[cfg(feature = "parallel")]
    fn verify_once(&self, cases: &[TestCase], max_len: usize) -> Result<BatchReport, DlError> {
        if self.parallel {
            verify_all_parallel(self.algorithm, cases, max_len, self.verbose)
        } else {
            verify_all(self.algorithm, cases, max_len, self.verbose)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn verify_once(&self, cases: &[TestCase], max_len: usize) -> Result<BatchReport, DlError> {
        if self.parallel {
            tracing::warn!("built without the `parallel` feature; verifying sequentially");
        }
        verify_all(self.algorithm, cases, max_len, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_cases() -> Vec<TestCase> {
        vec![
            TestCase::new(b"a", b"b", 1),
            TestCase::new(b"kitten", b"sitting", 3),
            TestCase::new(b"", b"", 0),
            TestCase::new(b"abc", b"abc", 0),
            TestCase::new(b"ab", b"ba", 1),
        ]
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.label().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.to_string(), algo.label());
        }
        assert!("xx".parse::<Algorithm>().is_err());
    }

    #[test]
    fn every_engine_passes_seed_cases() {
        let cases = seed_cases();
        let max_len = max_sequence_len(&cases);
        for algo in Algorithm::ALL {
            let report = verify_all(algo, &cases, max_len, false).unwrap();
            assert!(report.all_passed(), "{algo}: {:?}", report.mismatches);
            assert_eq!(report.cases, cases.len());
        }
    }

    #[test]
    fn mismatch_does_not_stop_batch() {
        let mut cases = seed_cases();
        cases[1].expected = 4;
        cases[3].expected = 1;
        let report = verify_all(Algorithm::Ukkonen, &cases, 7, false).unwrap();
        assert!(!report.all_passed());
        assert_eq!(
            report.mismatches,
            vec![
                Mismatch {
                    index: 1,
                    computed: 3,
                    expected: 4
                },
                Mismatch {
                    index: 3,
                    computed: 0,
                    expected: 1
                },
            ]
        );
    }

    #[test]
    fn understated_max_len_is_capacity_error() {
        let cases = seed_cases();
        let err = verify_all(Algorithm::BerghelRoach, &cases, 3, false).unwrap_err();
        assert!(matches!(err, DlError::TableTooSmall { .. }));
        // Engines without a table never need the bound.
        assert!(verify_all(Algorithm::LowranceWagner, &cases, 0, false).is_ok());
    }

    #[test]
    fn runner_counts_mismatches_per_loop() {
        let mut cases = seed_cases();
        cases[0].expected = 0;
        let runner = Runner::builder(Algorithm::BerghelRoach)
            .with_loops(3)
            .with_shuffle(true)
            .with_seed(7)
            .build();
        let summary = runner.run(&mut cases).unwrap();
        assert_eq!(summary.loops, 3);
        assert_eq!(summary.cases, 5);
        assert_eq!(summary.mismatches, 3);
        assert!(!summary.all_passed());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let shuffled = |seed| {
            let mut cases = seed_cases();
            Runner::builder(Algorithm::LowranceWagner)
                .with_shuffle(true)
                .with_seed(seed)
                .build()
                .run(&mut cases)
                .unwrap();
            cases
        };
        assert_eq!(shuffled(11), shuffled(11));
    }
}
