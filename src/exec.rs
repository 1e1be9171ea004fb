//! Convenience entry point wrapping a [`Sampler`]: measure, report, return the result.

use crate::{MetricPrefix, Sampler};
use std::io::{self, Write};

/// Times `f`, prints a one-line report to standard output, and returns `f`'s result.
///
/// Exactly one single-shot measurement is always performed first; its result is what is
/// returned, regardless of mode.
///
/// - With `profile == false`, the report line carries that single measurement ("exec time")
///   converted into the requested `prefix`.
/// - With `profile == true`, a full profile of `num_iters` additional invocations is run and
///   the report line carries the average time over those samples, with the iteration count.
///   The full-profile results are discarded.
///
/// The numeric value is printed in scientific notation.
///
/// # Panics
/// Panics if writing to standard output fails, as [`println!`] would.
pub fn exec_timed<T>(
    profile: bool,
    num_iters: usize,
    prefix: MetricPrefix,
    f: impl FnMut() -> T,
) -> T {
    exec_timed_to(&mut io::stdout(), profile, num_iters, prefix, f)
        .expect("failed writing to stdout")
}

/// Same as [`exec_timed`] but writes the report line to the given writer.
///
/// # Errors
/// - [`io::Error`] if writing the report line fails. The measurements themselves have
///   completed by then.
pub fn exec_timed_to<T, W>(
    out: &mut W,
    profile: bool,
    num_iters: usize,
    prefix: MetricPrefix,
    mut f: impl FnMut() -> T,
) -> io::Result<T>
where
    W: Write,
{
    let mut sampler = Sampler::new(num_iters);
    let ret = sampler.measure_once(&mut f);

    if profile {
        // The full profile's average covers exactly `num_iters` fresh samples; the single-shot
        // sample above only supplies the return value.
        sampler.reset();
        sampler.run_full_profile(&mut f);
        let avg = prefix.from_nanoseconds(sampler.average_nanoseconds());
        writeln!(
            out,
            "Average time in {} seconds ({} iterations): {:e}",
            prefix.label(),
            sampler.capacity(),
            avg
        )?;
    } else {
        let last = prefix.from_nanoseconds(
            sampler
                .last_nanoseconds()
                .expect("the single-shot measurement just recorded a sample"),
        );
        writeln!(out, "Exec time in {} seconds: {:e}", prefix.label(), last)?;
    }

    Ok(ret)
}
