use super::Runner;
use crate::report::{Console, Sink};
use crate::time::{Sleeper, SystemSleeper};

use std::sync::Arc;

/// Default prefix of runner thread names.
pub const DEFAULT_THREAD_PREFIX: &str = "worker";

/// Builder for configuring and creating a [`Runner`].
///
/// # Examples
///
/// ```rust
/// use strand::RunnerBuilder;
/// use strand::report::{ColorMode, Console};
///
/// let runner = RunnerBuilder::new()
///     .sink(Console::new(ColorMode::Never))
///     .thread_name_prefix("download")
///     .build();
/// ```
pub struct RunnerBuilder {
    /// Source of suspensions for every task.
    sleeper: Arc<dyn Sleeper>,

    /// Destination of progress events.
    sink: Arc<dyn Sink>,

    /// Prefix of spawned thread names.
    thread_prefix: String,

    /// Stack size of spawned threads; platform default when `None`.
    stack_size: Option<usize>,
}

impl RunnerBuilder {
    /// Creates a new `RunnerBuilder` with default configuration.
    ///
    /// By default, tasks sleep with [`SystemSleeper`], report to a
    /// [`Console`] that colours only when stdout is a terminal, and run on
    /// threads named `worker-<n>`.
    pub fn new() -> Self {
        Self {
            sleeper: Arc::new(SystemSleeper),
            sink: Arc::new(Console::default()),
            thread_prefix: DEFAULT_THREAD_PREFIX.to_string(),
            stack_size: None,
        }
    }

    /// Sets the source of suspensions.
    pub fn sleeper(mut self, sleeper: impl Sleeper) -> Self {
        self.sleeper = Arc::new(sleeper);
        self
    }

    /// Sets the destination of progress events.
    pub fn sink(mut self, sink: impl Sink) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Sets the prefix used to name spawned threads.
    pub fn thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_prefix = prefix.into();
        self
    }

    /// Sets the stack size, in bytes, of spawned threads.
    ///
    /// # Panics
    ///
    /// Panics if `bytes == 0`.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        assert!(bytes > 0, "stack_size must be > 0");

        self.stack_size = Some(bytes);
        self
    }

    /// Builds the runner with the configured options.
    pub fn build(self) -> Runner {
        Runner::from_parts(self.sleeper, self.sink, self.thread_prefix, self.stack_size)
    }
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
