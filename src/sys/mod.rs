//! Platform-specific sleep primitives.
//!
//! The standard library retries a sleep when it is interrupted, which hides
//! the one failure this crate reports. The primitives here issue a single
//! system call so that an interruption is observable by the caller.
//!
//! The concrete implementation is selected at compile time depending on the
//! target operating system.

#[cfg(unix)]
pub(crate) mod unix;

#[cfg(windows)]
pub(crate) mod windows;

#[cfg(unix)]
pub(crate) use unix as platform;

#[cfg(windows)]
pub(crate) use windows as platform;
