use nqueens_core::{BoardError, DescriptorError};

/// Errors that can occur while counting solutions.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolverError {
    /// The board could not be created.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// A task payload described an invalid board.
    #[display("invalid task descriptor: {_0}")]
    Descriptor(#[from] DescriptorError),
    /// The worker thread pool could not be started.
    #[display("failed to build thread pool: {_0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// The operating system refused to start a worker thread.
    #[display("failed to spawn worker thread: {_0}")]
    Spawn(#[from] std::io::Error),
    /// A task payload could not be encoded or decoded.
    #[display("task payload encoding failed: {_0}")]
    Wire(#[from] serde_json::Error),
    /// A work distributor failed to deliver tasks or collect their results.
    #[display("work distribution failed: {reason}")]
    Distribute {
        /// Description of the failure.
        reason: String,
    },
    /// A work distributor returned fewer or more partial counts than tasks sent.
    #[display("sent {expected} tasks but received {actual} partial counts")]
    PartialCountMismatch {
        /// Number of tasks sent.
        expected: usize,
        /// Number of partial counts received.
        actual: usize,
    },
}
