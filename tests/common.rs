//! Support for integration tests: deterministic clocks and comparison helpers.

#![allow(dead_code)]

use perf_sampler::Clock;
use std::{
    cell::{Cell, RefCell},
    time::{Duration, Instant},
};

pub fn f64_are_close(left: f64, right: f64, pct: f64) -> bool {
    let avg_abs = (left.abs() + right.abs()) / 2.0;
    (left - right).abs() <= avg_abs * pct
}

/// Clock whose reading advances by a fixed step on every call, so every measurement bracketed
/// by two consecutive readings has an elapsed time of exactly `step_ns`.
pub struct TickClock {
    origin: Instant,
    step: Duration,
    ticks: Cell<u32>,
}

impl TickClock {
    pub fn new(step_ns: u64) -> Self {
        Self {
            origin: Instant::now(),
            step: Duration::from_nanos(step_ns),
            ticks: Cell::new(0),
        }
    }
}

impl Clock for TickClock {
    fn now(&self) -> Instant {
        let tick = self.ticks.get();
        self.ticks.set(tick + 1);
        self.origin + self.step * tick
    }
}

/// Clock scripted so that successive measurements observe the given elapsed times, in order.
///
/// Panics if more readings are taken than the script provides.
pub struct ScriptClock {
    origin: Instant,
    offsets_ns: RefCell<std::vec::IntoIter<u64>>,
}

impl ScriptClock {
    pub fn new(elapsed_ns: &[u64]) -> Self {
        let mut acc = 0u64;
        let mut offsets = Vec::with_capacity(elapsed_ns.len() * 2);
        for &elapsed in elapsed_ns {
            offsets.push(acc);
            acc += elapsed;
            offsets.push(acc);
        }
        Self {
            origin: Instant::now(),
            offsets_ns: RefCell::new(offsets.into_iter()),
        }
    }
}

impl Clock for ScriptClock {
    fn now(&self) -> Instant {
        let offset = self
            .offsets_ns
            .borrow_mut()
            .next()
            .expect("more clock readings taken than scripted");
        self.origin + Duration::from_nanos(offset)
    }
}
