//! Error types.
//!
//! Two families of failures exist:
//! - [`WaitError`] is produced at a suspension point. The runner absorbs it:
//!   it is logged and reported, never returned to the launcher.
//! - [`Error`] is what the launcher itself can observe: a thread that could not
//!   be created, or a joined thread that panicked.

use std::io;
use std::time::Duration;

/// Failure of a blocking suspension.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    /// The wait was cut short before the requested duration elapsed.
    #[error("wait interrupted with {remaining:?} of {requested:?} left")]
    Interrupted {
        requested: Duration,
        remaining: Duration,
    },

    /// The sleep primitive itself reported an error.
    #[error("sleep failed: {0}")]
    Os(#[from] io::Error),
}

impl WaitError {
    /// Returns `true` if the wait was interrupted rather than refused.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, WaitError::Interrupted { .. })
    }
}

/// Errors visible to the launching context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to spawn a thread for task `{task}`")]
    Spawn {
        task: String,
        #[source]
        source: io::Error,
    },

    #[error("thread `{thread}` panicked")]
    Panicked { thread: String },
}
