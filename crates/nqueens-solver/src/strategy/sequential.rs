use std::time::Instant;

use log::debug;

use super::{BoxedStrategy, CountStrategy};
use crate::{SearchSummary, SolverError, partition, search};

pub(super) const NAME: &str = "sequential";

/// Counts on the calling thread with a single board.
///
/// This is the baseline every parallel strategy is measured against.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{CountStrategy, Sequential};
///
/// let summary = Sequential::new().count(8)?;
/// assert_eq!(summary.solutions, 92);
/// assert_eq!(summary.tasks, 1);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Sequential {
    /// Creates a new `Sequential` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Sequential
    }
}

impl CountStrategy for Sequential {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn count(&self, size: usize) -> Result<SearchSummary, SolverError> {
        let start = Instant::now();
        let mut board = partition::root_task(size)?;
        let tally = search::count_task(&mut board);
        debug!("{NAME}: size {size}, {} placements", tally.placements);
        Ok(tally.finish(NAME, size, start.elapsed()))
    }
}
