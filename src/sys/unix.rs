use crate::error::WaitError;

use libc::{nanosleep, time_t, timespec};
use std::io;
use std::time::Duration;

/// Blocks the calling thread for `duration` using a single `nanosleep(2)`.
///
/// A signal delivered to the thread ends the call early with `EINTR`, which
/// is reported as [`WaitError::Interrupted`] along with the time left.
pub(crate) fn sys_sleep(duration: Duration) -> Result<(), WaitError> {
    if duration.is_zero() {
        return Ok(());
    }

    let request = to_timespec(duration);
    let mut remaining = timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    let rc = unsafe { nanosleep(&request, &mut remaining) };
    if rc == 0 {
        return Ok(());
    }

    let err = io::Error::last_os_error();
    if err.kind() == io::ErrorKind::Interrupted {
        return Err(WaitError::Interrupted {
            requested: duration,
            remaining: from_timespec(&remaining),
        });
    }

    Err(WaitError::Os(err))
}

/// Converts a duration to a `timespec`, saturating seconds at `time_t::MAX`.
fn to_timespec(duration: Duration) -> timespec {
    let secs = duration.as_secs().min(time_t::MAX as u64) as time_t;

    timespec {
        tv_sec: secs,
        tv_nsec: duration.subsec_nanos() as _,
    }
}

fn from_timespec(ts: &timespec) -> Duration {
    let secs = ts.tv_sec.max(0) as u64;
    let nanos = ts.tv_nsec.clamp(0, 999_999_999) as u32;

    Duration::new(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::thread::JoinHandleExt;
    use std::thread;
    use std::time::Instant;

    extern "C" fn ignore_signal(_: libc::c_int) {}

    /// Installs a no-op `SIGUSR1` handler without `SA_RESTART`.
    fn install_ignore_handler() {
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction =
                ignore_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
            libc::sigemptyset(&mut action.sa_mask);
            action.sa_flags = 0;

            assert_eq!(
                libc::sigaction(libc::SIGUSR1, &action, std::ptr::null_mut()),
                0
            );
        }
    }

    #[test]
    fn test_zero_duration_returns_immediately() {
        let start = Instant::now();
        sys_sleep(Duration::ZERO).unwrap();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_sleep_blocks_for_requested_duration() {
        let start = Instant::now();
        sys_sleep(Duration::from_millis(20)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_timespec_conversion() {
        let ts = to_timespec(Duration::new(3, 250_000_000));
        assert_eq!(ts.tv_sec, 3);
        assert_eq!(ts.tv_nsec, 250_000_000);
        assert_eq!(from_timespec(&ts), Duration::new(3, 250_000_000));
    }

    #[test]
    fn test_signal_interrupts_sleep() {
        install_ignore_handler();

        let start = Instant::now();
        let sleeper = thread::spawn(|| sys_sleep(Duration::from_secs(5)));
        let target = sleeper.as_pthread_t();

        // The signal may land before the thread enters nanosleep, so keep
        // signalling until the sleep returns.
        while !sleeper.is_finished() && start.elapsed() < Duration::from_secs(4) {
            unsafe { libc::pthread_kill(target as libc::pthread_t, libc::SIGUSR1) };
            thread::sleep(Duration::from_millis(10));
        }

        match sleeper.join().unwrap() {
            Err(WaitError::Interrupted {
                requested,
                remaining,
            }) => {
                assert_eq!(requested, Duration::from_secs(5));
                assert!(remaining > Duration::ZERO);
            }
            other => panic!("expected an interrupted wait, got {other:?}"),
        }
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
