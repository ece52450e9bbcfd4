//! Single-shot wall-clock timer
//! Backed by the monotonic `Instant` clock, never time-of-day

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Resolution of the `Instant` clock as seen through `Duration`.
pub const TICKS_PER_SECOND: u64 = 1_000_000_000;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Measures exactly one invocation of an operation.
pub struct Timer;

impl Timer {
    /// Time a fallible operation. An `Err` is returned unchanged and the
    /// measurement is discarded.
    #[inline]
    pub fn time_method<F, E>(op: F) -> Result<f64, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        let start = Instant::now();
        let outcome = black_box(op());
        let elapsed = start.elapsed();

        outcome.map(|()| ticks_to_nanos(elapsed_ticks(elapsed)))
    }

    /// Time an infallible closure. Its return value is kept alive through
    /// `black_box` so the call can't be optimized out.
    #[inline]
    pub fn time<F, R>(op: F) -> f64
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        black_box(op());
        ticks_to_nanos(elapsed_ticks(start.elapsed()))
    }
}

#[inline(always)]
fn elapsed_ticks(elapsed: Duration) -> u128 {
    elapsed.as_nanos()
}

/// `ticks * (1e9 / ticks_per_second)`
#[inline(always)]
pub fn ticks_to_nanos(ticks: u128) -> f64 {
    ticks as f64 * (NANOS_PER_SECOND / TICKS_PER_SECOND as f64)
}
