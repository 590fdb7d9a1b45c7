//! Solution counting strategies.
//!
//! Every strategy implements [`CountStrategy`] and must report the same
//! number of solutions for a given board size. They differ only in how the
//! work is split and executed.

use std::fmt::Debug;

pub use self::{
    distributed::Distributed, sequential::Sequential, static_partition::StaticPartition,
    task_spawning::TaskSpawning, worker_pool::WorkerPool,
};
use crate::{SearchConfig, SearchSummary, SolverError, distributed::LoopbackDistributor};

mod distributed;
mod sequential;
mod static_partition;
mod task_spawning;
mod worker_pool;

/// Returns one instance of every strategy, configured from `config`.
///
/// [`Sequential`] comes first; it is the baseline the others are compared
/// against.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{SearchConfig, all_strategies};
///
/// let strategies = all_strategies(&SearchConfig::default());
/// assert_eq!(strategies.len(), 5);
/// assert_eq!(strategies[0].name(), "sequential");
/// ```
#[must_use]
pub fn all_strategies(config: &SearchConfig) -> Vec<BoxedStrategy> {
    StrategyKind::ALL
        .iter()
        .map(|kind| kind.build(config))
        .collect()
}

/// A way of counting the solutions of the N-Queens problem.
pub trait CountStrategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Counts the distinct solutions for a board of `size`.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is 0, the board cannot be allocated, the
    /// worker threads cannot be started, or task transport fails.
    fn count(&self, size: usize) -> Result<SearchSummary, SolverError>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn CountStrategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Identifies one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`Sequential`].
    Sequential,
    /// [`StaticPartition`].
    StaticPartition,
    /// [`TaskSpawning`].
    TaskSpawning,
    /// [`WorkerPool`].
    WorkerPool,
    /// [`Distributed`].
    Distributed,
}

impl StrategyKind {
    /// Every built-in strategy, baseline first.
    pub const ALL: [Self; 5] = [
        Self::Sequential,
        Self::StaticPartition,
        Self::TaskSpawning,
        Self::WorkerPool,
        Self::Distributed,
    ];

    /// Returns the name reported by the built strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => sequential::NAME,
            Self::StaticPartition => static_partition::NAME,
            Self::TaskSpawning => task_spawning::NAME,
            Self::WorkerPool => worker_pool::NAME,
            Self::Distributed => distributed::NAME,
        }
    }

    /// Builds the strategy with the tunables from `config`.
    #[must_use]
    pub fn build(self, config: &SearchConfig) -> BoxedStrategy {
        match self {
            Self::Sequential => Box::new(Sequential::new()),
            Self::StaticPartition => Box::new(
                StaticPartition::new(config.workers()).with_stack_size(config.stack_size()),
            ),
            Self::TaskSpawning => Box::new(
                TaskSpawning::new(config.workers(), config.fork_depth())
                    .with_stack_size(config.stack_size()),
            ),
            Self::WorkerPool => Box::new(
                WorkerPool::new(config.workers(), config.level(), config.idle_timeout())
                    .with_stack_size(config.stack_size()),
            ),
            Self::Distributed => Box::new(Distributed::new(
                LoopbackDistributor::new(config.workers()).with_stack_size(config.stack_size()),
                config.level(),
            )),
        }
    }
}
