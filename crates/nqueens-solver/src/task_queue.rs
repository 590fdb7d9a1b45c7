use std::{
    collections::VecDeque,
    sync::{Condvar, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// A FIFO task queue shared between one producer and a pool of workers.
///
/// One mutex guards the queue and one condition variable signals new tasks.
/// Consumers block in [`pop_timeout`](Self::pop_timeout) until a task arrives,
/// the producer [`close`](Self::close)s the queue, or they have been idle for
/// the given timeout.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use nqueens_solver::TaskQueue;
///
/// let queue = TaskQueue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.close();
///
/// let timeout = Duration::from_millis(10);
/// assert_eq!(queue.pop_timeout(timeout), Some(1));
/// assert_eq!(queue.pop_timeout(timeout), Some(2));
/// assert_eq!(queue.pop_timeout(timeout), None);
/// ```
#[derive(Debug)]
pub struct TaskQueue<T> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
}

#[derive(Debug)]
struct QueueState<T> {
    tasks: VecDeque<T>,
    closed: bool,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TaskQueue<T> {
    /// Creates an empty, open queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                tasks: VecDeque::new(),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Appends a task and wakes one waiting consumer.
    pub fn push(&self, task: T) {
        self.lock().tasks.push_back(task);
        self.available.notify_one();
    }

    /// Marks the producer as finished and wakes every waiting consumer.
    ///
    /// Tasks already queued can still be popped.
    pub fn close(&self) {
        self.lock().closed = true;
        self.available.notify_all();
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Removes the oldest task, waiting up to `timeout` for one to arrive.
    ///
    /// Returns `None` if the queue stays empty for `timeout`, or immediately
    /// once it is closed and empty.
    #[must_use]
    pub fn pop_timeout(&self, timeout: Duration) -> Option<T> {
        let state = self.lock();
        let (mut state, _) = self
            .available
            .wait_timeout_while(state, timeout, |state| {
                state.tasks.is_empty() && !state.closed
            })
            .unwrap_or_else(PoisonError::into_inner);
        state.tasks.pop_front()
    }

    /// Removes every queued task without waiting.
    #[must_use]
    pub fn drain(&self) -> Vec<T> {
        self.lock().tasks.drain(..).collect()
    }

    /// Returns the number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    /// Returns `true` if no task is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().tasks.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
