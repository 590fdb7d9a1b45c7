//! Shipping units of work across a process boundary.
//!
//! A task is encoded as a JSON [`BoardDescriptor`] and handed to a
//! [`WorkDistributor`], which delivers each payload to some remote worker.
//! The worker runs [`run_remote_task`] and sends back its [`Tally`]; the
//! caller sums whatever comes back, in any order.
//!
//! [`LoopbackDistributor`] stands in for a real transport by running every
//! payload on a local thread, still going through the encoded form.

use std::{fmt::Debug, thread};

use log::{debug, trace};
use nqueens_core::{Board, BoardDescriptor};

use crate::{SolverError, Tally, search, worker};

/// Encodes a board and its pending row range as a task payload.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use nqueens_core::Board;
/// use nqueens_solver::distributed::{decode_task, encode_task};
///
/// let mut board = Board::new(5)?;
/// board.place(2);
/// let payload = encode_task(&board)?;
/// let decoded = decode_task(&payload)?;
/// assert_eq!(decoded.placements(), &[2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode_task(board: &Board) -> Result<Vec<u8>, SolverError> {
    Ok(serde_json::to_vec(&BoardDescriptor::from(board))?)
}

/// Decodes a task payload back into a board.
///
/// # Errors
///
/// Returns an error if the payload is not a descriptor, or if the descriptor
/// is inconsistent.
pub fn decode_task(payload: &[u8]) -> Result<Board, SolverError> {
    let descriptor: BoardDescriptor = serde_json::from_slice(payload)?;
    Ok(Board::try_from(descriptor)?)
}

/// Runs one encoded task to completion, as a remote worker would.
///
/// # Errors
///
/// Returns an error if the payload cannot be decoded.
pub fn run_remote_task(payload: &[u8]) -> Result<Tally, SolverError> {
    let mut board = decode_task(payload)?;
    trace!(
        "remote task {:?} over rows {}",
        board.placements(),
        board.row_range()
    );
    Ok(search::count_task(&mut board))
}

/// Delivers encoded tasks to remote workers and collects their partial tallies.
pub trait WorkDistributor: Debug + Send + Sync {
    /// Returns the number of remote workers.
    fn ranks(&self) -> usize;

    /// Runs every payload on some remote worker.
    ///
    /// Returns one tally per payload, in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if a payload cannot be delivered or executed.
    fn distribute(&self, payloads: Vec<Vec<u8>>) -> Result<Vec<Tally>, SolverError>;
}

/// In-process distributor running each rank on its own thread.
///
/// Payloads are dealt to ranks round-robin.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{
///     distributed::{LoopbackDistributor, WorkDistributor, encode_task},
///     partition,
/// };
///
/// let root = partition::root_task(6)?;
/// let payloads = vec![encode_task(&root)?];
/// let tallies = LoopbackDistributor::new(2).distribute(payloads)?;
/// assert_eq!(tallies.len(), 1);
/// assert_eq!(tallies[0].solutions, 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoopbackDistributor {
    ranks: usize,
    stack_size: Option<usize>,
}

impl LoopbackDistributor {
    /// Creates a distributor with `ranks` workers. Zero is treated as one.
    #[must_use]
    pub fn new(ranks: usize) -> Self {
        Self {
            ranks: ranks.max(1),
            stack_size: None,
        }
    }

    /// Sets the stack size of every rank thread. `None` keeps the platform default.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }
}

impl WorkDistributor for LoopbackDistributor {
    fn ranks(&self) -> usize {
        self.ranks
    }

    fn distribute(&self, payloads: Vec<Vec<u8>>) -> Result<Vec<Tally>, SolverError> {
        let mut inboxes = vec![Vec::new(); self.ranks];
        for (i, payload) in payloads.into_iter().enumerate() {
            inboxes[i % self.ranks].push(payload);
        }

        let results = thread::scope(|scope| -> Result<Vec<_>, SolverError> {
            let handles = inboxes
                .into_iter()
                .enumerate()
                .map(|(rank, inbox)| {
                    worker::spawn_scoped(scope, format!("rank-{rank}"), self.stack_size, move || {
                        let tallies = inbox
                            .iter()
                            .map(|payload| run_remote_task(payload))
                            .collect::<Result<Vec<_>, _>>();
                        if let Ok(tallies) = &tallies {
                            let partial: Tally = tallies.iter().copied().sum();
                            debug!("rank {rank}: partial count {}", partial.solutions);
                        }
                        tallies
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(handles.into_iter().map(worker::join).collect())
        })?;

        let mut tallies = Vec::new();
        for result in results {
            tallies.extend(result?);
        }
        Ok(tallies)
    }
}

#[cfg(test)]
mod tests {
    use nqueens_core::RowRange;

    use super::*;
    use crate::{partition, testing::UNSPAWNABLE_STACK_SIZE};

    #[test]
    fn test_remote_task_counts_range() {
        let board = Board::with_row_range(8, RowRange::new(0, 4)).unwrap();
        let tally = run_remote_task(&encode_task(&board).unwrap()).unwrap();
        assert_eq!(tally.solutions, 92);
        assert_eq!(tally.tasks, 1);
    }

    #[test]
    fn test_remote_task_on_partial_board() {
        let mut root = partition::root_task(7).unwrap();
        let total: u64 = partition::branch_tasks(&mut root, 1)
            .iter()
            .map(|task| run_remote_task(&encode_task(task).unwrap()).unwrap().solutions)
            .sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_task(b"not a descriptor"),
            Err(SolverError::Wire(_))
        ));
    }

    #[test]
    fn test_decode_rejects_inconsistent_descriptor() {
        let mut descriptor = BoardDescriptor::from(&Board::new(4).unwrap());
        descriptor.column_freedom[0] = false;
        let payload = serde_json::to_vec(&descriptor).unwrap();
        assert!(matches!(
            decode_task(&payload),
            Err(SolverError::Descriptor(_))
        ));
    }

    #[test]
    fn test_loopback_returns_one_tally_per_payload() {
        let mut root = partition::root_task(8).unwrap();
        let payloads: Vec<_> = partition::branch_tasks(&mut root, 0)
            .iter()
            .map(|task| encode_task(task).unwrap())
            .collect();
        let sent = payloads.len();
        let tallies = LoopbackDistributor::new(3).distribute(payloads).unwrap();
        assert_eq!(tallies.len(), sent);
        assert_eq!(tallies.iter().map(|t| t.solutions).sum::<u64>(), 92);
    }

    #[test]
    fn test_loopback_with_more_ranks_than_payloads() {
        let root = partition::root_task(5).unwrap();
        let tallies = LoopbackDistributor::new(8)
            .distribute(vec![encode_task(&root).unwrap()])
            .unwrap();
        assert_eq!(tallies.len(), 1);
        assert_eq!(tallies[0].solutions, 10);
    }

    #[test]
    fn test_loopback_propagates_decode_errors() {
        let result = LoopbackDistributor::new(2).distribute(vec![b"{}".to_vec()]);
        assert!(matches!(result, Err(SolverError::Wire(_))));
    }

    #[test]
    fn test_loopback_reports_spawn_failure() {
        let root = partition::root_task(5).unwrap();
        let result = LoopbackDistributor::new(2)
            .with_stack_size(Some(UNSPAWNABLE_STACK_SIZE))
            .distribute(vec![encode_task(&root).unwrap()]);
        assert!(matches!(result, Err(SolverError::Spawn(_))));
    }
}
