//! The [`Sampler`] timing harness: bounded sample collection and last/average accessors.

use crate::{Clock, SteadyClock};
use std::{error::Error, fmt::Display};

//==============
// Errors

/// Error returned by the last-sample accessors when no sample has ever been recorded.
///
/// Reading the most recent measurement is only meaningful after at least one successful
/// timed invocation; an empty [`Sampler`] yields this error instead of undefined behavior.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NoSamplesError;

impl Display for NoSamplesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("no samples recorded")
    }
}

impl Error for NoSamplesError {}

//==============
// Sampler

/// Reusable timing harness for a caller-supplied operation.
///
/// Each timed invocation is bracketed by two readings of a monotonic [`Clock`] and the elapsed
/// time is appended to an ordered collection of samples, stored as floating-point
/// **nanoseconds**. The collection is bounded by a capacity fixed at construction: the bulk
/// [`run_full_profile`](Self::run_full_profile) loop uses it as its stopping condition, while
/// the single-shot [`measure_once`](Self::measure_once) never checks it.
///
/// A `Sampler` is exclusively owned and synchronous throughout. To benchmark several
/// operations concurrently, use one independent `Sampler` per thread.
#[derive(Debug, Clone)]
pub struct Sampler<C = SteadyClock>
where
    C: Clock,
{
    samples_ns: Vec<f64>,
    max_iters: usize,
    clock: C,
}

impl Sampler<SteadyClock> {
    /// Creates a `Sampler` with the given capacity, backed by the default [`SteadyClock`].
    ///
    /// `max_iters` bounds the number of samples accumulated by
    /// [`run_full_profile`](Self::run_full_profile). Zero is a legal degenerate capacity under
    /// which the full-profile loop performs no invocations.
    pub fn new(max_iters: usize) -> Self {
        Self::with_clock(max_iters, SteadyClock)
    }
}

impl<C> Sampler<C>
where
    C: Clock,
{
    /// Creates a `Sampler` with the given capacity and an injected [`Clock`] source.
    pub fn with_clock(max_iters: usize, clock: C) -> Self {
        Self {
            samples_ns: Vec::with_capacity(max_iters),
            max_iters,
            clock,
        }
    }

    /// Empties the sample collection in place; the capacity setting is unchanged.
    ///
    /// Callable any number of times, including on an already-empty `Sampler`.
    pub fn reset(&mut self) {
        self.samples_ns.clear();
        self.samples_ns.reserve(self.max_iters);
    }

    /// Times exactly one invocation of `f` and returns its result unchanged.
    ///
    /// The start timestamp is read immediately before invoking `f` and the end timestamp
    /// immediately after it returns; the elapsed nanoseconds are then appended to the sample
    /// collection. A panic in `f` propagates to the caller and records no sample, leaving
    /// previously recorded samples intact.
    ///
    /// This method does not check or enforce the capacity bound and may append past it.
    pub fn measure_once<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = self.clock.now();
        let ret = f();
        let end = self.clock.now();
        self.samples_ns.push((end - start).as_nanos() as f64);
        ret
    }

    /// Times exactly one invocation of a fallible `f`, recording a sample only on `Ok`.
    ///
    /// An `Err` propagates to the caller unchanged and records no sample, leaving previously
    /// recorded samples intact.
    pub fn try_measure_once<T, E>(&mut self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let start = self.clock.now();
        let ret = f()?;
        let end = self.clock.now();
        self.samples_ns.push((end - start).as_nanos() as f64);
        Ok(ret)
    }

    /// Repeats the timed invocation of `f`, with its result discarded, until the sample
    /// collection reaches the configured capacity.
    ///
    /// A no-op when the collection is already at or beyond capacity, including the capacity-0
    /// case. Each iteration invokes `f` once; a panic in `f` propagates and records no sample
    /// for the failing iteration.
    pub fn run_full_profile<T>(&mut self, mut f: impl FnMut() -> T) {
        while self.samples_ns.len() < self.max_iters {
            self.measure_once(&mut f);
        }
        log::trace!(
            "`run_full_profile` done: {} of {} samples",
            self.samples_ns.len(),
            self.max_iters
        );
    }

    /// Returns the most recently recorded sample, in nanoseconds.
    ///
    /// # Errors
    /// - [`NoSamplesError`] if no sample has ever been recorded.
    pub fn last_nanoseconds(&self) -> Result<f64, NoSamplesError> {
        self.samples_ns.last().copied().ok_or(NoSamplesError)
    }

    /// Returns the most recently recorded sample, in microseconds.
    ///
    /// # Errors
    /// - [`NoSamplesError`] if no sample has ever been recorded.
    pub fn last_microseconds(&self) -> Result<f64, NoSamplesError> {
        Ok(self.last_nanoseconds()? / 1000.0)
    }

    /// Returns the most recently recorded sample, in milliseconds.
    ///
    /// # Errors
    /// - [`NoSamplesError`] if no sample has ever been recorded.
    pub fn last_milliseconds(&self) -> Result<f64, NoSamplesError> {
        Ok(self.last_microseconds()? / 1000.0)
    }

    /// Returns the arithmetic mean of all recorded samples, in nanoseconds.
    ///
    /// Each sample is divided by the sample count before being added to the accumulator, so
    /// the sum never exceeds the magnitude of the largest sample. Summing raw values first and
    /// dividing once at the end could overflow to infinity for many large samples.
    ///
    /// Returns `NaN` when no samples have been recorded (division by a count of zero); this is
    /// defined behavior, not an error. Check [`sample_count`](Self::sample_count) before
    /// relying on a meaningful average.
    pub fn average_nanoseconds(&self) -> f64 {
        if self.samples_ns.is_empty() {
            return f64::NAN;
        }
        let div = self.samples_ns.len() as f64;
        let mut sum = 0.0;
        for sample in &self.samples_ns {
            sum += sample / div;
        }
        sum
    }

    /// Returns the arithmetic mean of all recorded samples, in microseconds.
    ///
    /// `NaN` when no samples have been recorded; see [`Self::average_nanoseconds`].
    pub fn average_microseconds(&self) -> f64 {
        self.average_nanoseconds() / 1000.0
    }

    /// Returns the arithmetic mean of all recorded samples, in milliseconds.
    ///
    /// `NaN` when no samples have been recorded; see [`Self::average_nanoseconds`].
    pub fn average_milliseconds(&self) -> f64 {
        self.average_microseconds() / 1000.0
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.max_iters
    }

    /// Returns the current number of recorded samples.
    pub fn sample_count(&self) -> usize {
        self.samples_ns.len()
    }

    /// Returns `true` if no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples_ns.is_empty()
    }
}
