use std::{
    thread,
    time::{Duration, Instant},
};

use log::{debug, trace, warn};
use nqueens_core::Board;

use super::{BoxedStrategy, CountStrategy};
use crate::{SearchSummary, SolverError, Tally, TaskQueue, partition, search, worker};

pub(super) const NAME: &str = "worker-pool";

/// A fixed pool of long-lived workers draining a shared task queue.
///
/// The workers start first and wait on the queue. The calling thread then
/// walks the first `level + 1` columns and enqueues one task per legal
/// placement, and closes the queue once it is done. Each worker pops tasks and
/// searches them to completion until the queue is closed and empty, or it has
/// been idle for the configured timeout.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use nqueens_solver::{CountStrategy, WorkerPool};
///
/// let pool = WorkerPool::new(3, 1, Duration::from_millis(500));
/// let summary = pool.count(8)?;
/// assert_eq!(summary.solutions, 92);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
    level: usize,
    idle_timeout: Duration,
    stack_size: Option<usize>,
}

impl WorkerPool {
    /// Creates a pool of `workers` threads fed with tasks generated down to
    /// `level`.
    #[must_use]
    pub fn new(workers: usize, level: usize, idle_timeout: Duration) -> Self {
        Self {
            workers: workers.max(1),
            level,
            idle_timeout,
            stack_size: None,
        }
    }

    /// Sets the stack size of every worker thread. `None` keeps the platform default.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Runs one pool worker until the queue is closed and empty, or no task
    /// arrives within `idle_timeout`.
    ///
    /// Returns the combined tally of every task the worker executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use nqueens_core::Board;
    /// use nqueens_solver::{TaskQueue, Tally, WorkerPool};
    ///
    /// // Nothing is ever submitted; the worker gives up after the timeout.
    /// let queue = TaskQueue::<Board>::new();
    /// let tally = WorkerPool::run_worker(0, &queue, Duration::from_millis(10));
    /// assert_eq!(tally, Tally::default());
    /// ```
    #[must_use]
    pub fn run_worker(id: usize, queue: &TaskQueue<Board>, idle_timeout: Duration) -> Tally {
        let mut tally = Tally::default();
        while let Some(mut task) = queue.pop_timeout(idle_timeout) {
            trace!("{NAME}: worker {id} takes {:?}", task.placements());
            tally += search::count_task(&mut task);
        }
        debug!(
            "{NAME}: worker {id} exits after {} tasks, {} solutions",
            tally.tasks, tally.solutions
        );
        tally
    }
}

impl CountStrategy for WorkerPool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn count(&self, size: usize) -> Result<SearchSummary, SolverError> {
        let start = Instant::now();
        let mut root = partition::root_task(size)?;
        let queue = TaskQueue::new();
        let idle_timeout = self.idle_timeout;

        let mut tally = thread::scope(|scope| -> Result<Tally, SolverError> {
            let queue = &queue;
            let mut handles = Vec::with_capacity(self.workers);
            for id in 0..self.workers {
                let spawned =
                    worker::spawn_scoped(scope, format!("{NAME}-{id}"), self.stack_size, move || {
                        Self::run_worker(id, queue, idle_timeout)
                    });
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(err) => {
                        // Lets the workers already running exit at once.
                        queue.close();
                        return Err(err.into());
                    }
                }
            }

            let mut generated = 0_usize;
            partition::for_each_branch(&mut root, self.level, &mut |task| {
                trace!("{NAME}: enqueue {:?}", task.placements());
                queue.push(task);
                generated += 1;
            });
            queue.close();
            debug!(
                "{NAME}: size {size}, level {}, {generated} tasks for {} workers",
                self.level, self.workers
            );

            Ok(handles.into_iter().map(worker::join).sum())
        })?;

        let leftover = queue.drain();
        if !leftover.is_empty() {
            warn!(
                "{NAME}: every worker timed out, running {} leftover tasks inline",
                leftover.len()
            );
            for mut task in leftover {
                tally += search::count_task(&mut task);
            }
        }

        tally += Tally::new(0, root.placement_count(), 0);
        Ok(tally.finish(NAME, size, start.elapsed()))
    }
}
