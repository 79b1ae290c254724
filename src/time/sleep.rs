use crate::error::WaitError;
use crate::sys::platform;

use std::time::Duration;

/// Blocks the current thread for `duration`.
///
/// Unlike [`std::thread::sleep`], an interrupted wait is not silently
/// resumed: it is returned as [`WaitError::Interrupted`] so the caller can
/// decide what to do with it.
///
/// A zero duration returns immediately.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// strand::time::sleep(Duration::from_millis(1)).unwrap();
/// ```
pub fn sleep(duration: Duration) -> Result<(), WaitError> {
    platform::sys_sleep(duration)
}

/// A source of blocking suspensions.
///
/// Every suspension performed by a unit of work goes through the runner's
/// `Sleeper`. The default is [`SystemSleeper`]; tests install their own to
/// skip real time or to inject failures.
pub trait Sleeper: Send + Sync + 'static {
    /// Suspends the calling thread for `duration`.
    fn sleep(&self, duration: Duration) -> Result<(), WaitError>;
}

/// [`Sleeper`] backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSleeper;

impl Sleeper for SystemSleeper {
    fn sleep(&self, duration: Duration) -> Result<(), WaitError> {
        sleep(duration)
    }
}

impl<F> Sleeper for F
where
    F: Fn(Duration) -> Result<(), WaitError> + Send + Sync + 'static,
{
    fn sleep(&self, duration: Duration) -> Result<(), WaitError> {
        self(duration)
    }
}
