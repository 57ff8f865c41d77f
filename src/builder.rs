use crate::runner::{Algorithm, Runner};

/// Configuration for a [`Runner`].
///
/// ```
/// use dl_engines::{runner::Algorithm, RunnerBuilder};
///
/// let runner = RunnerBuilder::new(Algorithm::Ukkonen)
///     .with_loops(10)
///     .with_shuffle(true)
///     .with_seed(42)
///     .build();
/// assert_eq!(runner.loops(), 10);
/// ```
pub struct RunnerBuilder {
    algorithm: Algorithm,
    loops: Option<usize>,
    shuffle: bool,
    seed: Option<u64>,
    verbose: bool,
    parallel: bool,
}

impl RunnerBuilder {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            loops: None,
            shuffle: false,
            seed: None,
            verbose: false,
            parallel: false,
        }
    }
    /// Passes over the corpus; zero is raised to one.
    pub fn with_loops(mut self, loops: usize) -> Self {
        self.loops = Some(loops);
        self
    }
    /// Reshuffle the corpus before every pass.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
    /// Seed for shuffling; without one the order is drawn from OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Emit engine tables as `debug` events.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
    /// Verify cases on the rayon pool (needs the `parallel` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn build(self) -> Runner {
        Runner {
            algorithm: self.algorithm,
            loops: self.loops.unwrap_or(1).max(1),
            shuffle: self.shuffle,
            seed: self.seed,
            verbose: self.verbose,
            parallel: self.parallel,
        }
    }
}
