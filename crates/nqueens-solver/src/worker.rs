//! Named scoped worker threads.

use std::{
    io, panic,
    thread::{self, Scope, ScopedJoinHandle},
};

/// Spawns a named thread in `scope`, reporting OS refusal as an error.
pub(crate) fn spawn_scoped<'scope, F, T>(
    scope: &'scope Scope<'scope, '_>,
    name: String,
    stack_size: Option<usize>,
    f: F,
) -> io::Result<ScopedJoinHandle<'scope, T>>
where
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
{
    let mut builder = thread::Builder::new().name(name);
    if let Some(stack_size) = stack_size {
        builder = builder.stack_size(stack_size);
    }
    builder.spawn_scoped(scope, f)
}

/// Joins a worker, re-raising its panic on the calling thread.
pub(crate) fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|e| panic::resume_unwind(e))
}
