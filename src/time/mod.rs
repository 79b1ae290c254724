//! Blocking time utilities.
//!
//! This module provides the suspension primitive used by units of work:
//! - [`sleep`], a single fallible blocking wait,
//! - [`Sleeper`], the seam through which the runner suspends threads,
//! - [`SystemSleeper`], the default implementation over [`sleep`].

mod sleep;

#[doc(inline)]
pub use sleep::{Sleeper, SystemSleeper, sleep};
