//! Progress reporting.
//!
//! Units of work never print directly. They emit [`Event`]s into the runner's
//! [`Sink`], which decides where lines end up:
//! - [`Console`] writes one line per event to standard output,
//! - [`Capture`] keeps events in memory so they can be inspected later.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Mutex;

/// ANSI sequence switching the foreground to green.
pub const GREEN: &str = "\x1b[0;32m";

/// ANSI sequence restoring default attributes.
pub const RESET: &str = "\x1b[0m";

/// A progress event emitted by a unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A download-style task started its blocking action.
    Started { task: String },

    /// A download-style task finished its blocking action.
    Completed { task: String },

    /// A counting task reached iteration `index` (1-based) on `thread`.
    Iteration {
        task: String,
        index: u32,
        thread: String,
    },

    /// Unnumbered progress report from `thread`, used by closure-based work.
    Heartbeat { task: String, thread: String },

    /// A suspension failed and was absorbed.
    Interrupted { task: String, reason: String },
}

impl Event {
    /// Label of the task that emitted this event.
    pub fn task(&self) -> &str {
        match self {
            Event::Started { task }
            | Event::Completed { task }
            | Event::Iteration { task, .. }
            | Event::Heartbeat { task, .. }
            | Event::Interrupted { task, .. } => task,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started { task } => write!(f, "File ({task}) is Downloading..."),
            Event::Completed { task } => write!(f, "{task} Download Completed!!!"),
            Event::Iteration { index, thread, .. } => {
                write!(f, "{index} - Running in a separate thread: {thread}")
            }
            Event::Heartbeat { thread, .. } => {
                write!(f, "Separate Thread is running + {thread}")
            }
            Event::Interrupted { task, reason } => write!(f, "{task}: {reason}"),
        }
    }
}

/// Destination of progress events.
///
/// A sink is shared by every thread of a runner, so `emit` must be callable
/// concurrently. Each event must land as a whole line.
pub trait Sink: Send + Sync + 'static {
    fn emit(&self, event: &Event);
}

/// Colour policy for [`Console`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colour only when standard output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Sink writing to standard output.
///
/// Completion lines are highlighted in green when colour is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            color: mode.enabled(),
        }
    }

    /// Renders an event as the exact line this console would print.
    pub fn render(&self, event: &Event) -> String {
        match event {
            Event::Completed { .. } if self.color => format!("{GREEN}{event}{RESET}"),
            _ => event.to_string(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl Sink for Console {
    fn emit(&self, event: &Event) {
        let line = self.render(event);

        // The stdout lock keeps each line whole across threads.
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}") {
            tracing::debug!(%err, "failed to write progress line");
        }
    }
}

/// Sink recording events in memory.
#[derive(Debug, Default)]
pub struct Capture {
    events: Mutex<Vec<Event>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event recorded so far, in arrival order.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Snapshot of the recorded events rendered as plain lines.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Events emitted by one task, in arrival order.
    pub fn events_for(&self, task: &str) -> Vec<Event> {
        self.lock()
            .iter()
            .filter(|event| event.task() == task)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        // A panic while holding the lock cannot leave a half-pushed event.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sink for Capture {
    fn emit(&self, event: &Event) {
        self.lock().push(event.clone());
    }
}

impl<S: Sink> Sink for std::sync::Arc<S> {
    fn emit(&self, event: &Event) {
        (**self).emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(task: &str) -> Event {
        Event::Completed {
            task: task.to_string(),
        }
    }

    #[test]
    fn test_display_lines() {
        let started = Event::Started {
            task: "a.zip".into(),
        };
        let tick = Event::Iteration {
            task: "0".into(),
            index: 3,
            thread: "worker-1".into(),
        };

        assert_eq!(started.to_string(), "File (a.zip) is Downloading...");
        assert_eq!(completed("a.zip").to_string(), "a.zip Download Completed!!!");
        assert_eq!(tick.to_string(), "3 - Running in a separate thread: worker-1");

        let beat = Event::Heartbeat {
            task: "0".into(),
            thread: "worker-1".into(),
        };
        assert_eq!(beat.task(), "0");
        assert_eq!(beat.to_string(), "Separate Thread is running + worker-1");
    }

    #[test]
    fn test_console_colors_only_completion() {
        let console = Console::new(ColorMode::Always);
        let started = Event::Started {
            task: "a.zip".into(),
        };

        assert_eq!(
            console.render(&completed("a.zip")),
            "\x1b[0;32ma.zip Download Completed!!!\x1b[0m"
        );
        assert_eq!(console.render(&started), "File (a.zip) is Downloading...");
    }

    #[test]
    fn test_console_without_color() {
        let console = Console::new(ColorMode::Never);
        assert_eq!(
            console.render(&completed("b.zip")),
            "b.zip Download Completed!!!"
        );
    }

    #[test]
    fn test_capture_filters_by_task() {
        let capture = Capture::new();
        capture.emit(&completed("a"));
        capture.emit(&completed("b"));
        capture.emit(&completed("a"));

        assert_eq!(capture.events().len(), 3);
        assert_eq!(capture.events_for("a").len(), 2);
        assert_eq!(capture.lines()[1], "b Download Completed!!!");
    }
}
