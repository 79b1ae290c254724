use strand::report::{Capture, Event};
use strand::task::{Task, TaskState};
use strand::{Runner, WaitError};

use std::io;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn interrupted(requested: Duration) -> Result<(), WaitError> {
    Err(WaitError::Interrupted {
        requested,
        remaining: requested / 2,
    })
}

#[test]
fn test_download_completes_after_interrupted_wait() {
    let capture = Arc::new(Capture::new());
    let runner = Runner::builder()
        .sleeper(interrupted)
        .sink(capture.clone())
        .build();

    let handle = runner
        .launch(Task::download("a.zip", Duration::from_millis(3000)))
        .unwrap();
    handle.join().unwrap();

    let events = capture.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], Event::Started { task: "a.zip".into() });
    assert!(matches!(&events[1], Event::Interrupted { task, .. } if task == "a.zip"));
    assert_eq!(events[2], Event::Completed { task: "a.zip".into() });
}

#[test]
fn test_counting_continues_after_interrupted_wait() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    // Every other wait fails.
    let flaky = move |requested: Duration| -> Result<(), WaitError> {
        if seen.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            interrupted(requested)
        } else {
            Ok(())
        }
    };

    let capture = Arc::new(Capture::new());
    let runner = Runner::builder()
        .sleeper(flaky)
        .sink(capture.clone())
        .build();

    runner
        .launch(Task::count(
            "0",
            NonZeroU32::new(5).unwrap(),
            Duration::from_millis(1000),
        ))
        .unwrap()
        .join()
        .unwrap();

    let events = capture.events();
    let iterations: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            Event::Iteration { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    let interruptions = events
        .iter()
        .filter(|e| matches!(e, Event::Interrupted { .. }))
        .count();

    assert_eq!(iterations, vec![1, 2, 3, 4, 5]);
    assert_eq!(interruptions, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn test_os_failure_is_absorbed_like_interruption() {
    let broken = |_: Duration| -> Result<(), WaitError> {
        Err(WaitError::Os(io::Error::from(io::ErrorKind::InvalidInput)))
    };

    let capture = Arc::new(Capture::new());
    let runner = Runner::builder()
        .sleeper(broken)
        .sink(capture.clone())
        .build();

    let handle = runner
        .launch(Task::download("b.zip", Duration::from_millis(3000)))
        .unwrap();
    while !handle.is_finished() {
        std::thread::yield_now();
    }

    assert_eq!(handle.state(), TaskState::Completed);
    handle.join().unwrap();

    let events = capture.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], Event::Completed { task: "b.zip".into() });
}

#[test]
fn test_interruption_report_mentions_durations() {
    let capture = Arc::new(Capture::new());
    let runner = Runner::builder()
        .sleeper(interrupted)
        .sink(capture.clone())
        .build();

    runner
        .launch(Task::download("c.zip", Duration::from_millis(3000)))
        .unwrap()
        .join()
        .unwrap();

    let line = &capture.lines()[1];
    assert_eq!(line, "c.zip: wait interrupted with 1.5s of 3s left");
}
