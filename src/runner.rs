//! Paired measurement loop
//! Times two bench methods back to back and averages each

use crate::error::ExecuteError;
use crate::timer::Timer;
use crate::types::BenchResult;
use tracing::{debug, trace, warn};

/// Iteration count used when the caller doesn't pick one
pub const DEFAULT_OPERATIONS: i64 = 1000;

/// A pair of implementations to compare.
///
/// Both methods take no input and produce no output; only their duration
/// matters. Returning `Err` stops the run.
pub trait Bench {
    type Error;

    fn bench_method_one(&mut self) -> Result<(), Self::Error>;

    fn bench_method_two(&mut self) -> Result<(), Self::Error>;

    /// Run both methods `operations` times each.
    fn execute(&mut self, operations: i64) -> Result<BenchResult, ExecuteError<Self::Error>>
    where
        Self: Sized,
    {
        BenchRunner::new().execute(self, operations)
    }

    /// Run both methods `DEFAULT_OPERATIONS` times each.
    fn execute_default(&mut self) -> Result<BenchResult, ExecuteError<Self::Error>>
    where
        Self: Sized,
    {
        self.execute(DEFAULT_OPERATIONS)
    }
}

/// Drives the measurement loop. Holds nothing between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchRunner;

impl BenchRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn execute<B: Bench>(
        &self,
        bench: &mut B,
        operations: i64,
    ) -> Result<BenchResult, ExecuteError<B::Error>> {
        let count = match u64::try_from(operations) {
            Ok(count) if count > 0 => count,
            _ => {
                warn!(operations, "Rejecting bench run");
                return Err(ExecuteError::InvalidArgument { operations });
            }
        };

        debug!(operations = count, "Starting bench run");

        // Capacity is a hint only; huge counts grow as they go.
        let capacity = usize::try_from(count).unwrap_or(usize::MAX).min(1 << 20);
        let mut bench1 = Vec::with_capacity(capacity);
        let mut bench2 = Vec::with_capacity(capacity);

        for i in 0..count {
            let one = Timer::time_method(|| bench.bench_method_one())
                .map_err(ExecuteError::Operation)?;
            bench1.push(one);

            let two = Timer::time_method(|| bench.bench_method_two())
                .map_err(ExecuteError::Operation)?;
            bench2.push(two);

            trace!(iteration = i, one_ns = one, two_ns = two, "Sample");
        }

        let result = BenchResult::new(count, average(&bench1), average(&bench2));

        debug!(
            operations = count,
            method_one_avg_ns = result.method_one_average(),
            method_two_avg_ns = result.method_two_average(),
            "Bench run complete"
        );

        Ok(result)
    }
}

/// Plain running sum over the count.
fn average(samples: &[f64]) -> f64 {
    let mut total = 0.0;
    for sample in samples {
        total += *sample;
    }
    total / samples.len() as f64
}

/// Adapts two closures into a `Bench`
pub struct FnBench<A, B> {
    one: A,
    two: B,
}

impl<A, B> FnBench<A, B>
where
    A: FnMut(),
    B: FnMut(),
{
    pub fn new(one: A, two: B) -> Self {
        Self { one, two }
    }
}

impl<A, B> Bench for FnBench<A, B>
where
    A: FnMut(),
    B: FnMut(),
{
    type Error = std::convert::Infallible;

    fn bench_method_one(&mut self) -> Result<(), Self::Error> {
        (self.one)();
        Ok(())
    }

    fn bench_method_two(&mut self) -> Result<(), Self::Error> {
        (self.two)();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        One,
        Two,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Failed {
        iteration: u32,
    }

    /// Records every call and optionally fails either method on a given call
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_one_at: Option<u32>,
        fail_two_at: Option<u32>,
    }

    impl Recorder {
        fn count(&self, which: Call) -> usize {
            self.calls.iter().filter(|c| **c == which).count()
        }
    }

    impl Bench for Recorder {
        type Error = Failed;

        fn bench_method_one(&mut self) -> Result<(), Failed> {
            self.calls.push(Call::One);
            let iteration = self.count(Call::One) as u32;
            match self.fail_one_at {
                Some(k) if k == iteration => Err(Failed { iteration }),
                _ => Ok(()),
            }
        }

        fn bench_method_two(&mut self) -> Result<(), Failed> {
            self.calls.push(Call::Two);
            let iteration = self.count(Call::Two) as u32;
            match self.fail_two_at {
                Some(k) if k == iteration => Err(Failed { iteration }),
                _ => Ok(()),
            }
        }
    }

    struct Sleeper {
        one: Duration,
        two: Duration,
    }

    impl Bench for Sleeper {
        type Error = ();

        fn bench_method_one(&mut self) -> Result<(), ()> {
            thread::sleep(self.one);
            Ok(())
        }

        fn bench_method_two(&mut self) -> Result<(), ()> {
            thread::sleep(self.two);
            Ok(())
        }
    }

    fn spin_for(d: Duration) {
        let start = Instant::now();
        while start.elapsed() < d {
            std::hint::spin_loop();
        }
    }

    #[test]
    fn test_operations_recorded() {
        let mut bench = Recorder::default();
        let result = bench.execute(25).unwrap();
        assert_eq!(result.operations(), 25);
    }

    #[test]
    fn test_default_operations() {
        let mut bench = Recorder::default();
        let result = bench.execute_default().unwrap();
        assert_eq!(result.operations(), 1000);
        assert_eq!(bench.count(Call::One), 1000);
        assert_eq!(bench.count(Call::Two), 1000);
    }

    #[test]
    fn test_strict_alternation() {
        let mut bench = Recorder::default();
        bench.execute(4).unwrap();
        assert_eq!(
            bench.calls,
            vec![Call::One, Call::Two, Call::One, Call::Two, Call::One, Call::Two, Call::One, Call::Two]
        );
    }

    #[test]
    fn test_zero_and_negative_rejected_without_calls() {
        for operations in [0, -1, -1000, i64::MIN] {
            let mut bench = Recorder::default();
            let err = bench.execute(operations).unwrap_err();
            assert_eq!(err, ExecuteError::InvalidArgument { operations });
            assert!(bench.calls.is_empty());
        }
    }

    #[test]
    fn test_fail_fast_on_method_one() {
        let mut bench = Recorder {
            fail_one_at: Some(3),
            ..Default::default()
        };
        let err = bench.execute(10).unwrap_err();
        assert_eq!(err.into_operation(), Some(Failed { iteration: 3 }));
        assert_eq!(bench.count(Call::One), 3);
        assert_eq!(bench.count(Call::Two), 2);
    }

    #[test]
    fn test_fail_on_first_iteration() {
        let mut bench = Recorder {
            fail_one_at: Some(1),
            ..Default::default()
        };
        assert!(bench.execute(5).is_err());
        assert_eq!(bench.count(Call::Two), 0);
    }

    #[test]
    fn test_fail_fast_on_method_two() {
        let mut bench = Recorder {
            fail_two_at: Some(4),
            ..Default::default()
        };
        let err = bench.execute(10).unwrap_err();
        assert_eq!(err.into_operation(), Some(Failed { iteration: 4 }));
        assert_eq!(bench.count(Call::One), 4);
        assert_eq!(bench.count(Call::Two), 4);
        assert_eq!(bench.calls.last(), Some(&Call::Two));
    }

    #[test]
    fn test_sleep_durations_tracked() {
        let mut bench = Sleeper {
            one: Duration::from_millis(5),
            two: Duration::from_millis(10),
        };
        for n in [1, 5] {
            let result = bench.execute(n).unwrap();
            let one = result.method_one_average();
            let two = result.method_two_average();
            assert!(one >= 5_000_000.0 && one < 10_000_000.0, "one = {}", one);
            assert!(two >= 10_000_000.0 && two < 20_000_000.0, "two = {}", two);
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let mut bench = Sleeper {
            one: Duration::from_millis(5),
            two: Duration::from_millis(5),
        };
        let first = bench.execute(3).unwrap();
        let second = bench.execute(3).unwrap();
        assert_eq!(first.operations(), second.operations());
        for avg in [
            first.method_one_average(),
            second.method_one_average(),
            first.method_two_average(),
            second.method_two_average(),
        ] {
            assert!(avg >= 5_000_000.0 && avg < 10_000_000.0, "avg = {}", avg);
        }
    }

    #[test]
    fn test_noop_vs_busy_wait() {
        let mut bench = FnBench::new(|| {}, || spin_for(Duration::from_micros(500)));
        let result = BenchRunner::new().execute(&mut bench, 10).unwrap();

        assert_eq!(result.operations(), 10);
        assert!(result.method_one_average() < 100_000.0);
        assert!(result.method_two_average() >= 500_000.0);
        assert!(result.method_two_average() < 5_000_000.0);
        assert_eq!(result.faster(), crate::types::Method::One);
    }

    #[test]
    fn test_average_is_running_sum() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 6.0]), 3.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_operations_roundtrip(n in 1i64..200) {
            let mut bench = Recorder::default();
            let result = bench.execute(n).unwrap();
            prop_assert_eq!(result.operations(), n as u64);
            prop_assert_eq!(bench.count(Call::One), n as usize);
            prop_assert_eq!(bench.count(Call::Two), n as usize);
        }

        #[test]
        fn prop_non_positive_rejected(n in i64::MIN..=0) {
            let mut bench = Recorder::default();
            prop_assert!(bench.execute(n).unwrap_err().is_invalid_argument());
            prop_assert!(bench.calls.is_empty());
        }
    }
}
