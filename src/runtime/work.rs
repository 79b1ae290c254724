//! Task bodies.
//!
//! Both bodies follow the same rule: a failed suspension is absorbed by
//! [`Context::pause`] and the body proceeds with its next step.

use crate::report::Event;
use crate::runtime::context::Context;
use crate::task::{Task, TaskKind};

use std::num::NonZeroU32;
use std::time::Duration;

/// Runs `task` on the calling thread.
pub(crate) fn execute(task: &Task, cx: &Context<'_>) {
    match *task.kind() {
        TaskKind::Download { duration } => download(task.id(), duration, cx),
        TaskKind::Count {
            iterations,
            interval,
        } => count(task.id(), iterations, interval, cx),
    }
}

/// Single blocking action: started, wait, completed.
fn download(id: &str, duration: Duration, cx: &Context<'_>) {
    cx.emit(Event::Started { task: id.into() });

    cx.pause(id, duration);

    cx.emit(Event::Completed { task: id.into() });
}

/// Repeated action: one numbered line per iteration, each followed by a wait.
fn count(id: &str, iterations: NonZeroU32, interval: Duration, cx: &Context<'_>) {
    for index in 1..=iterations.get() {
        cx.emit(Event::Iteration {
            task: id.into(),
            index,
            thread: cx.thread_name().into(),
        });

        cx.pause(id, interval);
    }
}
