use std::{thread, time::Instant};

use log::{debug, trace};
use nqueens_core::{Board, row_boundary};

use super::{BoxedStrategy, CountStrategy};
use crate::{SearchSummary, SolverError, Tally, partition, search, worker};

pub(super) const NAME: &str = "static-partition";

/// Splits the first column into one contiguous row range per thread.
///
/// Each thread owns a fresh board and searches its range to completion. The
/// split is fixed up front, so threads whose range holds fewer solutions finish
/// early and sit idle.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{CountStrategy, StaticPartition};
///
/// let summary = StaticPartition::new(4).count(8)?;
/// assert_eq!(summary.solutions, 92);
/// assert_eq!(summary.tasks, 4);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticPartition {
    workers: usize,
    stack_size: Option<usize>,
}

impl StaticPartition {
    /// Creates a strategy that runs `workers` threads. Zero is treated as one.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            stack_size: None,
        }
    }

    /// Sets the stack size of every worker thread. `None` keeps the platform default.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Returns the number of threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl CountStrategy for StaticPartition {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn count(&self, size: usize) -> Result<SearchSummary, SolverError> {
        let start = Instant::now();
        let boards = partition::static_ranges(row_boundary(size), self.workers)
            .into_iter()
            .map(|range| Board::with_row_range(size, range))
            .collect::<Result<Vec<_>, _>>()?;

        let tally = thread::scope(|scope| -> Result<Tally, SolverError> {
            let handles = boards
                .into_iter()
                .enumerate()
                .map(|(id, mut board)| {
                    worker::spawn_scoped(scope, format!("{NAME}-{id}"), self.stack_size, move || {
                        trace!("{NAME}: worker {id} searches rows {}", board.row_range());
                        search::count_task(&mut board)
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(handles.into_iter().map(worker::join).sum())
        })?;

        debug!(
            "{NAME}: size {size}, {} workers, {} placements",
            self.workers, tally.placements
        );
        Ok(tally.finish(NAME, size, start.elapsed()))
    }
}
