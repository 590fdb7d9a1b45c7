//! Sequential and parallel N-Queens solution counting.
//!
//! Every strategy in this crate runs the same depth-first backtracking search
//! ([`search`]) over [`Board`](nqueens_core::Board)s, and differs only in how
//! the symmetry-reduced search tree is split into independent units of work
//! ([`partition`]) and how those units are executed:
//!
//! - [`Sequential`]: one board, one thread.
//! - [`StaticPartition`]: contiguous first-column row ranges, one thread each.
//! - [`TaskSpawning`]: recursive fork/join down to a depth threshold.
//! - [`WorkerPool`]: long-lived workers draining a shared [`TaskQueue`].
//! - [`Distributed`]: serialized task descriptors shipped through a
//!   [`WorkDistributor`](distributed::WorkDistributor).
//!
//! Each unit of work returns its own [`Tally`]; tallies are summed at join
//! points and turned into a [`SearchSummary`].
//!
//! # Examples
//!
//! ```
//! use nqueens_solver::{CountStrategy, SearchConfig, StrategyKind};
//!
//! let config = SearchConfig::default().with_workers(2);
//! for strategy in nqueens_solver::all_strategies(&config) {
//!     let summary = strategy.count(8)?;
//!     assert_eq!(summary.solutions, 92, "{}", strategy.name());
//! }
//!
//! let summary = StrategyKind::TaskSpawning.build(&config).count(6)?;
//! assert_eq!(summary.solutions, 4);
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```

pub use self::{config::*, error::*, strategy::*, tally::*, task_queue::TaskQueue};

mod config;
pub mod distributed;
mod error;
pub mod partition;
pub mod search;
pub mod strategy;
mod tally;
mod task_queue;
mod worker;

#[cfg(test)]
mod testing;
