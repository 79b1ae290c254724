//! Task primitives.
//!
//! This module defines what the runner executes and what the launcher gets
//! back:
//! - [`Task`] and [`TaskKind`], the immutable description of a unit of work,
//! - [`TaskState`], the per-task lifecycle,
//! - [`ThreadHandle`], the launcher's handle on the thread running a task.

pub(crate) mod handle;
pub(crate) mod state;

pub use handle::ThreadHandle;
pub use state::TaskState;

use std::num::NonZeroU32;
use std::time::Duration;

/// What a task does once its thread starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Report start, block for `duration`, report completion.
    Download { duration: Duration },

    /// Report the iteration number `iterations` times, pausing `interval`
    /// after each report.
    Count {
        iterations: NonZeroU32,
        interval: Duration,
    },
}

/// A named, immutable unit of work.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroU32;
/// use std::time::Duration;
/// use strand::task::Task;
///
/// let download = Task::download("a.zip", Duration::from_secs(3));
/// let count = Task::count("0", NonZeroU32::new(5).unwrap(), Duration::from_secs(1));
///
/// assert_eq!(download.id(), "a.zip");
/// assert_eq!(count.iterations(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: String,
    kind: TaskKind,
}

impl Task {
    pub fn new(id: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Creates a download-style task blocking for `duration`.
    pub fn download(id: impl Into<String>, duration: Duration) -> Self {
        Self::new(id, TaskKind::Download { duration })
    }

    /// Creates a counting task.
    pub fn count(id: impl Into<String>, iterations: NonZeroU32, interval: Duration) -> Self {
        Self::new(
            id,
            TaskKind::Count {
                iterations,
                interval,
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Total time this task spends suspended when no wait is interrupted.
    pub fn simulated_duration(&self) -> Duration {
        match self.kind {
            TaskKind::Download { duration } => duration,
            TaskKind::Count {
                iterations,
                interval,
            } => interval.saturating_mul(iterations.get()),
        }
    }

    /// Number of progress iterations; `1` for a download.
    pub fn iterations(&self) -> u32 {
        match self.kind {
            TaskKind::Download { .. } => 1,
            TaskKind::Count { iterations, .. } => iterations.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_duration() {
        let download = Task::download("a.zip", Duration::from_millis(3000));
        assert_eq!(download.simulated_duration(), Duration::from_millis(3000));

        let count = Task::count(
            "1",
            NonZeroU32::new(5).unwrap(),
            Duration::from_millis(1000),
        );
        assert_eq!(count.simulated_duration(), Duration::from_millis(5000));
        assert_eq!(count.iterations(), 5);
    }
}
