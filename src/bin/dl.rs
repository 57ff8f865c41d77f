//! `dl`: exercise the three Damerau-Levenshtein engines over test corpora.
//!
//! Each CORPUS is a text file of `A<TAB>B<TAB>D` lines, where D is the known
//! distance between A and B. The program exits 0 if the selected engine
//! reproduces D for every pair, 1 if any pair differs and 127 if a corpus
//! cannot be read.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dl_engines::corpus::{read_corpus, TestCase};
use dl_engines::runner::{Algorithm, Runner};
use dl_engines::DlError;
use tracing_subscriber::EnvFilter;

/// Compute Damerau-Levenshtein distances for a corpus of string pairs by
/// Lowrance & Wagner (1975), Ukkonen (1985) or Berghel & Roach (1996).
#[derive(Debug, Parser)]
#[command(name = "dl", version, about, long_about = None)]
struct Cli {
    /// Algorithm to apply to CORPUS...
    #[arg(short, long, value_enum, default_value_t = Algorithm::BerghelRoach)]
    algorithm: Algorithm,

    /// Run the corpus N times (for benchmarking)
    #[arg(short = 'n', long = "num-loops", default_value_t = 1,
          value_parser = clap::value_parser!(u64).range(1..))]
    num_loops: u64,

    /// Run the corpus in random order, reshuffled before every loop
    #[arg(short, long)]
    randomize: bool,

    /// Seed for --randomize
    #[arg(long)]
    seed: Option<u64>,

    /// Print time spent computing, excluding reading and shuffling
    #[arg(short = 't', long = "print-timings")]
    print_timings: bool,

    /// Trace the engines' working tables (debugging only)
    #[arg(short, long)]
    verbose: bool,

    /// Verify cases on all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Test corpus files
    #[arg(required = true, value_name = "CORPUS")]
    corpus: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("dl: {err}");
            ExitCode::from(127)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, DlError> {
    tracing::debug!(?cli, "options");

    let mut cases: Vec<TestCase> = Vec::new();
    for path in &cli.corpus {
        cases.extend(read_corpus(path)?);
    }

    let mut builder = Runner::builder(cli.algorithm)
        .with_loops(cli.num_loops as usize)
        .with_shuffle(cli.randomize)
        .verbose(cli.verbose)
        .with_parallel(cli.parallel);
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }
    let summary = builder.build().run(&mut cases)?;

    if cli.print_timings {
        println!("processing took {}ms", summary.elapsed.as_millis());
    }
    if summary.all_passed() {
        tracing::info!(
            algorithm = %summary.algorithm,
            cases = summary.cases,
            loops = summary.loops,
            "all distances matched"
        );
    } else {
        tracing::error!(
            algorithm = %summary.algorithm,
            mismatches = summary.mismatches,
            "{} of {} comparisons differed from the expected distance",
            summary.mismatches,
            summary.cases * summary.loops
        );
    }
    Ok(summary.all_passed())
}
