use std::{num::NonZero, thread, time::Duration};

/// Idle time after which a pool worker gives up waiting for new tasks.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(3);

/// Returns the fork depth used when none is configured: `size / 4 + 1`.
///
/// # Examples
///
/// ```
/// assert_eq!(nqueens_solver::default_fork_depth(8), 3);
/// ```
#[must_use]
pub const fn default_fork_depth(size: usize) -> usize {
    size / 4 + 1
}

/// Tunables shared by the search strategies.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use nqueens_solver::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_workers(4)
///     .with_level(1)
///     .with_idle_timeout(Duration::from_millis(200));
///
/// assert_eq!(config.workers(), 4);
/// assert_eq!(config.fork_depth_for(12), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    workers: usize,
    fork_depth: Option<usize>,
    level: usize,
    idle_timeout: Duration,
    stack_size: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, NonZero::get),
            fork_depth: None,
            level: 0,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            stack_size: None,
        }
    }
}

impl SearchConfig {
    /// Sets the number of worker threads (or remote ranks). Zero is treated as one.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Sets the column below which the task-spawning strategy keeps forking.
    ///
    /// `None` selects `size / 4 + 1`.
    #[must_use]
    pub fn with_fork_depth(mut self, fork_depth: Option<usize>) -> Self {
        self.fork_depth = fork_depth;
        self
    }

    /// Sets how many columns the task generator fills beyond the first.
    ///
    /// Level 0 emits one task per legal first-column placement.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Sets how long an idle pool worker waits before exiting.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Sets the stack size of every worker thread, in bytes.
    ///
    /// `None` keeps the platform default.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the configured fork depth, if any.
    #[must_use]
    pub fn fork_depth(&self) -> Option<usize> {
        self.fork_depth
    }

    /// Returns the fork depth to use for a board of `size`.
    #[must_use]
    pub fn fork_depth_for(&self, size: usize) -> usize {
        self.fork_depth.unwrap_or_else(|| default_fork_depth(size))
    }

    /// Returns the task generation level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the pool worker idle timeout.
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Returns the worker thread stack size, if one is set.
    #[must_use]
    pub fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }
}
