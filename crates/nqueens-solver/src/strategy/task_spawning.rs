use std::time::Instant;

use log::{debug, trace};
use nqueens_core::Board;
use rayon::{ThreadPoolBuilder, prelude::*};

use super::{BoxedStrategy, CountStrategy};
use crate::{SearchSummary, SolverError, Tally, default_fork_depth, partition, search};

pub(super) const NAME: &str = "task-spawning";

/// Recursive fork/join over the first columns of the search tree.
///
/// While the current column is below the fork depth, every legal placement
/// becomes a child task with its own copy of the board, and the children run
/// in parallel on a work-stealing pool. From the fork depth on, each task
/// finishes its subtree sequentially. Every parent joins all of its children
/// before returning.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{CountStrategy, TaskSpawning};
///
/// let summary = TaskSpawning::new(2, None).count(8)?;
/// assert_eq!(summary.solutions, 92);
///
/// let shallow = TaskSpawning::new(2, Some(1)).count(8)?;
/// assert_eq!(shallow.tasks, 4);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaskSpawning {
    workers: usize,
    fork_depth: Option<usize>,
    stack_size: Option<usize>,
}

impl TaskSpawning {
    /// Creates a strategy running on `workers` threads.
    ///
    /// Tasks keep forking while their column is below `fork_depth`; `None`
    /// selects [`default_fork_depth`].
    #[must_use]
    pub fn new(workers: usize, fork_depth: Option<usize>) -> Self {
        Self {
            workers: workers.max(1),
            fork_depth,
            stack_size: None,
        }
    }

    /// Sets the stack size of every pool thread. `None` keeps the platform default.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }

    fn fork_depth_for(&self, size: usize) -> usize {
        self.fork_depth.unwrap_or_else(|| default_fork_depth(size))
    }
}

impl CountStrategy for TaskSpawning {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn count(&self, size: usize) -> Result<SearchSummary, SolverError> {
        let start = Instant::now();
        let root = partition::root_task(size)?;
        let fork_depth = self.fork_depth_for(size);
        let mut builder = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("nqueens-fork-{i}"));
        if let Some(stack_size) = self.stack_size {
            builder = builder.stack_size(stack_size);
        }
        let pool = builder.build()?;

        let tally = pool.install(|| fork(root, fork_depth));
        debug!(
            "{NAME}: size {size}, fork depth {fork_depth}, {} tasks, {} placements",
            tally.tasks, tally.placements
        );
        Ok(tally.finish(NAME, size, start.elapsed()))
    }
}

fn fork(mut board: Board, fork_depth: usize) -> Tally {
    let column = board.column();
    if column >= fork_depth || board.is_complete() {
        return search::count_task(&mut board);
    }

    let before = board.placement_count();
    let children = partition::branch_tasks(&mut board, column);
    let forked = board.placement_count() - before;
    trace!("{NAME}: column {column} forks {} children", children.len());

    let tally: Tally = children
        .into_par_iter()
        .map(|child| fork(child, fork_depth))
        .sum();
    tally + Tally::new(0, forked, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SearchConfig, Sequential,
        testing::{KNOWN_COUNTS, UNSPAWNABLE_STACK_SIZE},
    };

    #[test]
    fn test_known_counts() {
        for (size, expected) in KNOWN_COUNTS.into_iter().filter(|&(size, _)| size <= 11) {
            let summary = TaskSpawning::new(4, None).count(size).unwrap();
            assert_eq!(summary.solutions, expected, "size {size}");
        }
    }

    #[test]
    fn test_every_fork_depth_agrees() {
        for fork_depth in 0..=9 {
            let summary = TaskSpawning::new(3, Some(fork_depth)).count(8).unwrap();
            assert_eq!(summary.solutions, 92, "fork depth {fork_depth}");
        }
    }

    #[test]
    fn test_fork_depth_zero_runs_one_task() {
        let summary = TaskSpawning::new(2, Some(0)).count(6).unwrap();
        assert_eq!(summary.tasks, 1);
        assert_eq!(summary.solutions, 4);
    }

    #[test]
    fn test_placements_match_sequential() {
        // Forking places the same queens as the sequential search, just on
        // different boards.
        let sequential = Sequential::new().count(9).unwrap();
        for fork_depth in [1, 2, 3] {
            let summary = TaskSpawning::new(2, Some(fork_depth)).count(9).unwrap();
            assert_eq!(summary.placements, sequential.placements, "fork depth {fork_depth}");
        }
    }

    #[test]
    fn test_default_fork_depth() {
        let strategy = TaskSpawning::new(1, None);
        assert_eq!(strategy.fork_depth_for(8), 3);
        assert_eq!(strategy.fork_depth_for(12), 4);
    }

    #[test]
    fn test_default_fork_depth_matches_config() {
        let strategy = TaskSpawning::new(1, None);
        let config = SearchConfig::default();
        for size in 1..=20 {
            assert_eq!(strategy.fork_depth_for(size), config.fork_depth_for(size), "size {size}");
        }
    }

    #[test]
    fn test_thread_pool_failure_is_reported() {
        let strategy = TaskSpawning::new(2, None).with_stack_size(Some(UNSPAWNABLE_STACK_SIZE));
        assert!(matches!(strategy.count(6), Err(SolverError::ThreadPool(_))));
    }
}
