//! Result types for benchmark runs

use serde::{Deserialize, Serialize};

/// Which of the two bench methods a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    One,
    Two,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::One => write!(f, "method one"),
            Method::Two => write!(f, "method two"),
        }
    }
}

/// Outcome of a completed run. Only built by the runner once every
/// iteration has finished.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    operations: u64,
    method_one_average: f64,
    method_two_average: f64,
}

impl BenchResult {
    pub(crate) fn new(operations: u64, method_one_average: f64, method_two_average: f64) -> Self {
        debug_assert!(operations > 0);
        Self {
            operations,
            method_one_average,
            method_two_average,
        }
    }

    /// Times each method was executed
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Mean execution time of method one, in nanoseconds
    pub fn method_one_average(&self) -> f64 {
        self.method_one_average
    }

    /// Mean execution time of method two, in nanoseconds
    pub fn method_two_average(&self) -> f64 {
        self.method_two_average
    }

    /// Method with the lower mean. Ties go to method one.
    pub fn faster(&self) -> Method {
        if self.method_two_average < self.method_one_average {
            Method::Two
        } else {
            Method::One
        }
    }

    /// `method_two_average / method_one_average`. Not finite when method one
    /// measured zero.
    pub fn ratio(&self) -> f64 {
        self.method_two_average / self.method_one_average
    }
}

impl std::fmt::Display for BenchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ops: {:>8} | one: {:>12.2}ns | two: {:>12.2}ns | faster: {}",
            self.operations, self.method_one_average, self.method_two_average, self.faster()
        )
    }
}
