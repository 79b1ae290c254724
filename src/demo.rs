//! Parameters of the bundled demo programs.

use crate::task::Task;

use std::num::NonZeroU32;
use std::time::Duration;

/// How long each simulated download blocks.
pub const DOWNLOAD_DURATION: Duration = Duration::from_millis(3000);

/// Files "downloaded" by the `download` binary.
pub const DOWNLOAD_FILES: [&str; 3] = [
    "publishing_data.zip",
    "undefined_cppp.zip",
    "helloworld_data_large.zip",
];

/// Iterations of each counting task.
pub const COUNT_ITERATIONS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Pause after each counting iteration.
pub const COUNT_INTERVAL: Duration = Duration::from_millis(1000);

/// Counting tasks launched by the `counter` and `runnable` binaries.
pub const COUNT_TASKS: usize = 2;

/// One download task per file name.
pub fn downloads<I, S>(files: I, duration: Duration) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    files
        .into_iter()
        .map(|file| Task::download(file, duration))
        .collect()
}

/// `tasks` counting tasks labelled by their index.
pub fn counters(tasks: usize, iterations: NonZeroU32, interval: Duration) -> Vec<Task> {
    (0..tasks)
        .map(|index| Task::count(index.to_string(), iterations, interval))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskKind;

    #[test]
    fn test_default_downloads() {
        let tasks = downloads(DOWNLOAD_FILES, DOWNLOAD_DURATION);

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].id(), "publishing_data.zip");
        assert_eq!(
            tasks[2].kind(),
            &TaskKind::Download {
                duration: Duration::from_millis(3000)
            }
        );
    }

    #[test]
    fn test_default_counters() {
        let tasks = counters(COUNT_TASKS, COUNT_ITERATIONS, COUNT_INTERVAL);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id(), "1");
        assert_eq!(tasks[1].iterations(), 5);
    }
}
