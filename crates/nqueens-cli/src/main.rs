//! Counts the solutions of the N-Queens problem.
//!
//! ```sh
//! nqueens 12 8 --strategy task-spawning
//! RUST_LOG=debug nqueens 10
//! ```
//!
//! Without `--strategy`, every strategy is run and compared against the
//! sequential baseline.

use std::{process::ExitCode, time::Duration};

use clap::{Parser, ValueEnum};
use log::info;
use nqueens_core::BoardError;
use nqueens_solver::{
    DEFAULT_IDLE_TIMEOUT, SearchConfig, SearchSummary, SolverError, StrategyKind, all_strategies,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Sequential,
    StaticPartition,
    TaskSpawning,
    WorkerPool,
    Distributed,
    /// Run every strategy and compare them.
    Compare,
}

impl StrategyArg {
    fn kind(self) -> Option<StrategyKind> {
        match self {
            Self::Sequential => Some(StrategyKind::Sequential),
            Self::StaticPartition => Some(StrategyKind::StaticPartition),
            Self::TaskSpawning => Some(StrategyKind::TaskSpawning),
            Self::WorkerPool => Some(StrategyKind::WorkerPool),
            Self::Distributed => Some(StrategyKind::Distributed),
            Self::Compare => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size.
    #[arg(value_name = "SIZE", default_value_t = 8)]
    size: usize,

    /// Number of worker threads (or ranks). Defaults to the available parallelism.
    #[arg(value_name = "WORKERS")]
    workers: Option<usize>,

    /// Strategy to run.
    #[arg(long, value_name = "KIND", default_value = "compare")]
    strategy: StrategyArg,

    /// Column below which the task-spawning strategy keeps forking [default: SIZE / 4 + 1].
    #[arg(long, value_name = "DEPTH")]
    fork_depth: Option<usize>,

    /// Columns filled beyond the first when generating tasks.
    #[arg(long, value_name = "LEVEL", default_value_t = 0)]
    level: usize,

    /// Idle time after which a pool worker exits, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = millis(DEFAULT_IDLE_TIMEOUT))]
    idle_timeout_ms: u64,

    /// Stack size of every worker thread, in bytes [default: platform default].
    #[arg(long, value_name = "BYTES")]
    stack_size: Option<usize>,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::default()
            .with_fork_depth(self.fork_depth)
            .with_level(self.level)
            .with_idle_timeout(Duration::from_millis(self.idle_timeout_ms))
            .with_stack_size(self.stack_size);
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        config
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Solver(#[from] SolverError),
    #[display("{strategy} counted {actual} solutions, but sequential counted {expected}")]
    Mismatch {
        strategy: &'static str,
        expected: u64,
        actual: u64,
    },
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Solver(SolverError::Board(BoardError::InvalidSize { .. })) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.config();
    info!(
        "size {}, {} workers, fork depth {}, level {}, idle timeout {:?}",
        args.size,
        config.workers(),
        config.fork_depth_for(args.size),
        config.level(),
        config.idle_timeout()
    );

    if let Some(kind) = args.strategy.kind() {
        let summary = kind.build(&config).count(args.size)?;
        print_summary(&summary, None);
        return Ok(());
    }

    let mut strategies = all_strategies(&config).into_iter();
    let Some(baseline) = strategies.next() else {
        return Ok(());
    };
    let baseline = baseline.count(args.size)?;
    print_summary(&baseline, None);

    let mut mismatch = None;
    for strategy in strategies {
        let summary = strategy.count(args.size)?;
        print_summary(&summary, Some(&baseline));
        if summary.solutions != baseline.solutions && mismatch.is_none() {
            mismatch = Some(CliError::Mismatch {
                strategy: summary.strategy,
                expected: baseline.solutions,
                actual: summary.solutions,
            });
        }
    }
    mismatch.map_or(Ok(()), Err)
}

fn print_summary(summary: &SearchSummary, baseline: Option<&SearchSummary>) {
    let SearchSummary {
        strategy,
        size,
        solutions,
        placements,
        tasks,
        elapsed,
    } = summary;
    print!(
        "{strategy:>16}: N={size} solutions={solutions} tasks={tasks} placements={placements} time={:.6}s",
        elapsed.as_secs_f64()
    );
    if let Some(baseline) = baseline {
        let elapsed = elapsed.as_secs_f64();
        if elapsed > 0.0 {
            print!(" speedup={:.2}", baseline.elapsed.as_secs_f64() / elapsed);
        }
    }
    println!();
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
