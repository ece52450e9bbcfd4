//! Bench Core
//!
//! Side-by-side micro-benchmark harness: time two implementations of the
//! same task and compare their mean cost per call.
//!
//! ## Architecture
//! - Timer: single-shot monotonic measurement of one call
//! - Runner: paired measurement loop over a `Bench` implementation
//! - Types: immutable `BenchResult`
//! - Demos: built-in comparisons used by the `bench-runner` binary
//!
//! ```
//! use bench_core::{Bench, FnBench};
//!
//! let mut bench = FnBench::new(|| { let _ = 1 + 1; }, || { let _ = vec![0u8; 64]; });
//! let result = bench.execute(100).unwrap();
//! assert_eq!(result.operations(), 100);
//! ```

pub mod config;
pub mod demos;
pub mod error;
pub mod runner;
pub mod timer;
pub mod types;

pub use config::{BenchConfig, LoggingConfig};
pub use demos::run_all_comparisons;
pub use error::ExecuteError;
pub use runner::{Bench, BenchRunner, FnBench, DEFAULT_OPERATIONS};
pub use timer::Timer;
pub use types::{BenchResult, Method};
