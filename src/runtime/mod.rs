//! Core runner components.
//!
//! This module contains the building blocks of the runner:
//! - spawning one dedicated thread per unit of work,
//! - the execution context installed on each of those threads,
//! - the task descriptions and the handles returned to the launcher,
//! - the bodies executed for each kind of task.

mod core;
mod work;

pub(crate) mod builder;
pub(crate) mod context;

pub mod task;

pub use self::core::Runner;
