use crate::error::Error;
use crate::runtime::task::state::StateCell;
use crate::task::TaskState;

use std::thread::JoinHandle;

/// A handle to a thread running a launched task.
///
/// The handle is owned by the launching context. It may be joined to wait for
/// the task, or detached to leave it running on its own.
///
/// Dropping a `ThreadHandle` does **not** stop the thread; it behaves like
/// [`detach`](Self::detach). Detached threads still die with the process.
#[derive(Debug)]
pub struct ThreadHandle {
    /// Per-runner sequence number of the thread.
    worker_id: usize,

    /// Label of the task the thread runs.
    task: String,

    /// Lifecycle shared with the thread.
    state: StateCell,

    inner: JoinHandle<()>,
}

impl ThreadHandle {
    pub(crate) fn new(
        worker_id: usize,
        task: String,
        state: StateCell,
        inner: JoinHandle<()>,
    ) -> Self {
        Self {
            worker_id,
            task,
            state,
            inner,
        }
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Name given to the underlying thread.
    pub fn name(&self) -> &str {
        self.inner.thread().name().unwrap_or("<unnamed>")
    }

    /// Label of the task running on this thread.
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Current lifecycle state of the task.
    pub fn state(&self) -> TaskState {
        self.state.load()
    }

    /// Returns `true` once the thread has finished running.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Waits for the thread to finish.
    ///
    /// Returns [`Error::Panicked`] if the task body panicked. Interrupted
    /// waits never show up here: the runner absorbs them.
    pub fn join(self) -> Result<(), Error> {
        let thread = self.name().to_string();

        self.inner.join().map_err(|_| Error::Panicked { thread })
    }

    /// Lets the thread run to completion without ever observing it.
    pub fn detach(self) {
        tracing::trace!(thread = self.name(), task = %self.task, "detached");
    }
}
