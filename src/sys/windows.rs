//! Windows sleep primitive.
//!
//! Mirrors the Unix layer: an alertable `SleepEx` returns early when an APC is
//! queued to the thread, which is the Windows analogue of `EINTR`.

use crate::error::WaitError;

use std::time::{Duration, Instant};

use windows_sys::Win32::Foundation::WAIT_IO_COMPLETION;
use windows_sys::Win32::System::Threading::SleepEx;

/// Largest finite timeout accepted by `SleepEx` (`u32::MAX` means infinite).
const MAX_CHUNK_MS: u64 = (u32::MAX - 1) as u64;

/// Blocks the calling thread for `duration` using alertable `SleepEx` calls.
pub(crate) fn sys_sleep(duration: Duration) -> Result<(), WaitError> {
    if duration.is_zero() {
        return Ok(());
    }

    let start = Instant::now();
    let mut left = duration;

    while !left.is_zero() {
        // Round up so sub-millisecond remainders still block.
        let millis = left.as_nanos().div_ceil(1_000_000).min(MAX_CHUNK_MS as u128) as u32;

        let rc = unsafe { SleepEx(millis, 1) };
        if rc == WAIT_IO_COMPLETION {
            return Err(WaitError::Interrupted {
                requested: duration,
                remaining: duration.saturating_sub(start.elapsed()),
            });
        }

        left = duration.saturating_sub(start.elapsed());
    }

    Ok(())
}
