use crate::error::Error;
use crate::report::Sink;
use crate::runtime::builder::RunnerBuilder;
use crate::runtime::context::{Context, current_worker_id, enter_context};
use crate::runtime::task::state::StateCell;
use crate::runtime::work;
use crate::task::{Task, ThreadHandle};
use crate::time::Sleeper;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// The unit-of-work runner.
///
/// `Runner` is responsible for:
/// - creating one dedicated, named thread per submitted unit of work,
/// - installing the execution [`Context`] on that thread,
/// - tracking each task's lifecycle for its [`ThreadHandle`].
///
/// Submission never waits: [`launch`](Self::launch) and
/// [`launch_all`](Self::launch_all) return as soon as the threads are
/// started. Whether to join or detach the handles is the caller's choice.
///
/// Dropping the runner does not affect threads it already started.
pub struct Runner {
    /// Suspension source shared by every thread.
    sleeper: Arc<dyn Sleeper>,

    /// Progress destination shared by every thread.
    sink: Arc<dyn Sink>,

    /// Threads are named `<prefix>-<worker id>`.
    thread_prefix: String,

    /// Stack size applied to each spawned thread, if set.
    stack_size: Option<usize>,

    /// Next worker id to hand out.
    next_worker: AtomicUsize,
}

impl Runner {
    /// Creates a runner with the default configuration.
    ///
    /// See [`RunnerBuilder::new`] for the defaults.
    pub fn new() -> Self {
        RunnerBuilder::new().build()
    }

    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    pub(crate) fn from_parts(
        sleeper: Arc<dyn Sleeper>,
        sink: Arc<dyn Sink>,
        thread_prefix: String,
        stack_size: Option<usize>,
    ) -> Self {
        Self {
            sleeper,
            sink,
            thread_prefix,
            stack_size,
            next_worker: AtomicUsize::new(0),
        }
    }

    /// Runs `f` on a new dedicated thread.
    ///
    /// `label` names the unit of work in logs and in the returned handle.
    /// The closure receives the thread's [`Context`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the operating system refuses to create
    /// the thread.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strand::Runner;
    ///
    /// let runner = Runner::new();
    /// let handle = runner
    ///     .spawn("hello", |cx| println!("hello from {}", cx.thread_name()))
    ///     .unwrap();
    ///
    /// handle.join().unwrap();
    /// ```
    pub fn spawn<F>(&self, label: impl Into<String>, f: F) -> Result<ThreadHandle, Error>
    where
        F: FnOnce(&Context<'_>) + Send + 'static,
    {
        let task = label.into();
        let worker_id = self.next_worker.fetch_add(1, Ordering::Relaxed);
        let name = format!("{}-{}", self.thread_prefix, worker_id);

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }

        let state = StateCell::new();
        let thread_state = state.clone();
        let sleeper = self.sleeper.clone();
        let sink = self.sink.clone();
        let span_task = task.clone();

        let inner = builder
            .spawn(move || {
                let _completed = thread_state.enter();

                let span = tracing::debug_span!("task", task = %span_task, worker = worker_id);
                let _entered = span.enter();
                tracing::trace!(thread = %name, "running");

                enter_context(worker_id, || {
                    let cx = Context::new(Some(worker_id), &name, &*sleeper, &*sink);
                    f(&cx);
                });

                tracing::debug!("completed");
            })
            .map_err(|source| Error::Spawn {
                task: task.clone(),
                source,
            })?;

        tracing::debug!(task = %task, worker = worker_id, "spawned");

        Ok(ThreadHandle::new(worker_id, task, state, inner))
    }

    /// Launches `task` on a new dedicated thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the thread cannot be created.
    pub fn launch(&self, task: Task) -> Result<ThreadHandle, Error> {
        let label = task.id().to_string();
        tracing::debug!(
            task = %label,
            iterations = task.iterations(),
            simulated = ?task.simulated_duration(),
            "launching"
        );

        self.spawn(label, move |cx| work::execute(&task, cx))
    }

    /// Launches every task, in order, each on its own thread.
    ///
    /// Returns after the last thread has been started, without waiting for
    /// any of them.
    ///
    /// # Errors
    ///
    /// Stops at the first thread that cannot be created and returns
    /// [`Error::Spawn`]. Tasks launched before the failure keep running
    /// detached.
    pub fn launch_all<I>(&self, tasks: I) -> Result<Vec<ThreadHandle>, Error>
    where
        I: IntoIterator<Item = Task>,
    {
        tasks.into_iter().map(|task| self.launch(task)).collect()
    }

    /// Runs `task` to completion on the calling thread.
    ///
    /// Uses the same sleeper and sink as launched tasks. Useful when the
    /// caller already owns a thread for the work.
    pub fn execute(&self, task: &Task) {
        let current = thread::current();
        let name = current.name().unwrap_or("<unnamed>");

        let cx = Context::new(current_worker_id(), name, &*self.sleeper, &*self.sink);
        work::execute(task, &cx);
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
