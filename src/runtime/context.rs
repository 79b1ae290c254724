use crate::error::WaitError;
use crate::report::{Event, Sink};
use crate::time::Sleeper;

use std::cell::Cell;
use std::time::Duration;

thread_local! {
    /// Thread-local identifier of the current worker thread.
    ///
    /// Set for the whole lifetime of a thread spawned by a runner.
    static CURRENT_WORKER_ID: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Returns the worker id of the calling thread, if it was spawned by a runner.
pub fn current_worker_id() -> Option<usize> {
    CURRENT_WORKER_ID.with(Cell::get)
}

/// Installs `worker_id` as the current worker for the duration of `f`.
///
/// The previous value is restored afterwards, so nested use on the same
/// thread behaves.
pub(crate) fn enter_context<R>(worker_id: usize, f: impl FnOnce() -> R) -> R {
    CURRENT_WORKER_ID.with(|id| {
        let prev = id.replace(Some(worker_id));
        let out = f();
        id.set(prev);
        out
    })
}

/// Execution context handed to every unit of work.
///
/// Gives access to the runner's sleeper and sink, and to the identity of the
/// executing thread.
pub struct Context<'a> {
    worker_id: Option<usize>,
    thread_name: &'a str,
    sleeper: &'a dyn Sleeper,
    sink: &'a dyn Sink,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        worker_id: Option<usize>,
        thread_name: &'a str,
        sleeper: &'a dyn Sleeper,
        sink: &'a dyn Sink,
    ) -> Self {
        Self {
            worker_id,
            thread_name,
            sleeper,
            sink,
        }
    }

    /// Worker id of the executing thread; `None` outside runner threads.
    pub fn worker_id(&self) -> Option<usize> {
        self.worker_id
    }

    /// Name of the executing thread.
    pub fn thread_name(&self) -> &str {
        self.thread_name
    }

    /// Sends a progress event to the runner's sink.
    pub fn emit(&self, event: Event) {
        self.sink.emit(&event);
    }

    /// Suspends the thread, returning any failure to the caller.
    pub fn sleep(&self, duration: Duration) -> Result<(), WaitError> {
        self.sleeper.sleep(duration)
    }

    /// Suspends the thread and absorbs any failure.
    ///
    /// A failed wait is logged and reported as [`Event::Interrupted`] on
    /// behalf of `task`, then control returns normally so the caller can
    /// carry on with its remaining steps.
    pub fn pause(&self, task: &str, duration: Duration) {
        if let Err(err) = self.sleep(duration) {
            tracing::warn!(
                task,
                thread = self.thread_name,
                interrupted = err.is_interrupted(),
                "{err}"
            );

            self.emit(Event::Interrupted {
                task: task.to_string(),
                reason: err.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_context_restores_previous() {
        assert_eq!(current_worker_id(), None);

        enter_context(3, || {
            assert_eq!(current_worker_id(), Some(3));
            enter_context(7, || assert_eq!(current_worker_id(), Some(7)));
            assert_eq!(current_worker_id(), Some(3));
        });

        assert_eq!(current_worker_id(), None);
    }
}
