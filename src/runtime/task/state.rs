use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Task has been handed to the runner but its thread has not entered the body.
pub(crate) const CREATED: usize = 0;

/// Task body is executing on its thread.
pub(crate) const RUNNING: usize = 1;

/// Task body has returned (or unwound) and the thread is about to exit.
pub(crate) const COMPLETED: usize = 2;

/// Lifecycle of a launched task.
///
/// Transitions are monotonic: `Created -> Running -> Completed`. There is no
/// cancelled or failed state; an absorbed interruption still completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskState {
    Created,
    Running,
    Completed,
}

impl TaskState {
    fn from_raw(raw: usize) -> Self {
        match raw {
            CREATED => TaskState::Created,
            RUNNING => TaskState::Running,
            _ => TaskState::Completed,
        }
    }
}

/// State cell shared between a [`ThreadHandle`](super::ThreadHandle) and its thread.
#[derive(Debug, Clone)]
pub(crate) struct StateCell(Arc<AtomicUsize>);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicUsize::new(CREATED)))
    }

    pub(crate) fn load(&self) -> TaskState {
        TaskState::from_raw(self.0.load(Ordering::Acquire))
    }

    /// Moves the state forward to `to`; never moves it backwards.
    pub(crate) fn advance(&self, to: usize) {
        self.0.fetch_max(to, Ordering::AcqRel);
    }

    /// Marks the task running and returns a guard that completes it on drop.
    ///
    /// The guard also fires during unwinding, so a panicking body still ends
    /// in `Completed`.
    pub(crate) fn enter(&self) -> CompleteOnDrop {
        self.advance(RUNNING);
        CompleteOnDrop(self.clone())
    }
}

pub(crate) struct CompleteOnDrop(StateCell);

impl Drop for CompleteOnDrop {
    fn drop(&mut self) {
        self.0.advance(COMPLETED);
    }
}
