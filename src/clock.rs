//! Time sources used to bracket timed invocations.

use std::time::Instant;

/// Monotonic time source read immediately before and after each measured invocation.
///
/// The default source is [`SteadyClock`]. Platforms with known timer-resolution defects, or
/// tests that need deterministic readings, can inject an alternative implementation with
/// [`Sampler::with_clock`](crate::Sampler::with_clock).
pub trait Clock {
    /// Returns the current reading of the clock.
    fn now(&self) -> Instant;
}

/// The default [`Clock`], backed by [`Instant::now`].
///
/// [`Instant`] is monotonic and unaffected by wall-clock adjustments, which makes it suitable
/// for measuring intervals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyClock;

impl Clock for SteadyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
