//! This library supports elapsed-time measurement of functions and code blocks.
//!
//! A [`Sampler`] brackets invocations of a caller-supplied operation with readings of a
//! monotonic [`Clock`], accumulates the elapsed times as floating-point **nanoseconds**, and
//! exposes the last measurement and the arithmetic mean converted to milli/micro/nanoseconds.
//! The [`exec_timed`] convenience function wraps a [`Sampler`] for the common
//! measure-and-report case.
//!
//! ### Single-shot measurement
//!
//! ```rust
//! use perf_sampler::Sampler;
//!
//! let mut sampler = Sampler::new(10);
//! let sum = sampler.measure_once(|| (1..=1000u64).sum::<u64>());
//! assert_eq!(sum, 500_500);
//! assert_eq!(sampler.sample_count(), 1);
//! println!("{} ns", sampler.last_nanoseconds().expect("one sample recorded"));
//! ```
//!
//! ### Full profile with averaged report
//!
//! ```rust
//! use perf_sampler::{exec_timed, MetricPrefix};
//!
//! // Prints "Average time in micro seconds (100 iterations): <value>" and
//! // returns the result of the initial single-shot invocation.
//! let sum = exec_timed(true, 100, MetricPrefix::Micro, || (1..=1000u64).sum::<u64>());
//! assert_eq!(sum, 500_500);
//! ```

#![deny(clippy::unwrap_used)]

mod clock;
pub use clock::*;

mod sampler;
pub use sampler::*;

mod metric_prefix;
pub use metric_prefix::*;

mod exec;
pub use exec::*;
