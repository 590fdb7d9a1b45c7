use std::{sync::Arc, time::Instant};

use log::debug;
use nqueens_core::{Board, row_boundary};

use super::{BoxedStrategy, CountStrategy};
use crate::{
    SearchSummary, SolverError, Tally,
    distributed::{LoopbackDistributor, WorkDistributor, encode_task},
    partition,
};

pub(super) const NAME: &str = "distributed";

/// Ships encoded tasks to remote workers through a [`WorkDistributor`].
///
/// At level 0 the first column is split into one contiguous row range per
/// rank, like [`StaticPartition`](crate::StaticPartition). At higher levels
/// one task is sent per legal placement down to that level, each carrying its
/// partially filled board.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{CountStrategy, Distributed};
///
/// let summary = Distributed::loopback(4, 0).count(8)?;
/// assert_eq!(summary.solutions, 92);
/// assert_eq!(summary.tasks, 4);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Distributed {
    distributor: Arc<dyn WorkDistributor>,
    level: usize,
}

impl Distributed {
    /// Creates a strategy sending its tasks through `distributor`.
    #[must_use]
    pub fn new<D>(distributor: D, level: usize) -> Self
    where
        D: WorkDistributor + 'static,
    {
        Self {
            distributor: Arc::new(distributor),
            level,
        }
    }

    /// Creates a strategy backed by a [`LoopbackDistributor`] with `ranks` threads.
    #[must_use]
    pub fn loopback(ranks: usize, level: usize) -> Self {
        Self::new(LoopbackDistributor::new(ranks), level)
    }

    fn tasks(&self, size: usize, root: &mut Board) -> Result<Vec<Board>, SolverError> {
        if self.level == 0 {
            let ranges = partition::static_ranges(row_boundary(size), self.distributor.ranks());
            debug!("{NAME}: row ranges {ranges:?}");
            let boards = ranges
                .into_iter()
                .map(|range| Board::with_row_range(size, range))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(boards)
        } else {
            Ok(partition::branch_tasks(root, self.level))
        }
    }
}

impl CountStrategy for Distributed {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(self.clone())
    }

    fn count(&self, size: usize) -> Result<SearchSummary, SolverError> {
        let start = Instant::now();
        let mut root = partition::root_task(size)?;
        let payloads = self
            .tasks(size, &mut root)?
            .iter()
            .map(encode_task)
            .collect::<Result<Vec<_>, _>>()?;

        let expected = payloads.len();
        debug!(
            "{NAME}: size {size}, level {}, {expected} tasks for {} ranks",
            self.level,
            self.distributor.ranks()
        );
        let partials = self.distributor.distribute(payloads)?;
        if partials.len() != expected {
            return Err(SolverError::PartialCountMismatch {
                expected,
                actual: partials.len(),
            });
        }

        let tally: Tally = partials.into_iter().sum();
        let tally = tally + Tally::new(0, root.placement_count(), 0);
        Ok(tally.finish(NAME, size, start.elapsed()))
    }
}
