//! # strand
//!
//! **strand** runs independent units of work, each on its own dedicated
//! thread. A unit of work reports its progress through a sink and simulates
//! latency with blocking suspensions.
//!
//! There is no pool, no scheduler and no state shared between tasks. The
//! only failure policy is at the suspension points: an interrupted wait is
//! logged and reported, and the task carries on with its remaining steps.
//!
//! - **Thread per task**: [`Runner::launch`] starts a named thread and
//!   returns a [`ThreadHandle`](task::ThreadHandle) right away
//! - **Explicit completion**: the launcher joins the handle, or detaches it
//!   for fire-and-forget
//! - **Fallible sleep**: [`time::sleep`] surfaces interruptions instead of
//!   retrying them
//! - **Pluggable output**: [`report::Sink`] decides where progress lines go
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use strand::Runner;
//! use strand::task::Task;
//!
//! let runner = Runner::new();
//!
//! let handles = runner
//!     .launch_all([
//!         Task::download("a.zip", Duration::from_secs(3)),
//!         Task::download("b.zip", Duration::from_secs(3)),
//!     ])
//!     .unwrap();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`task`] — Task descriptions, states and thread handles
//! - [`time`] — Fallible blocking sleep and the `Sleeper` seam
//! - [`report`] — Progress events and sinks
//! - [`cli`] — Flags and logging setup shared by the binaries

mod runtime;
mod sys;

pub mod cli;
pub mod demo;
pub mod error;
pub mod report;
pub mod time;

pub use error::{Error, WaitError};
pub use runtime::Runner;
pub use runtime::builder::RunnerBuilder;
pub use runtime::context::{Context, current_worker_id};
pub use runtime::task;
