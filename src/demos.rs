//! Built-in comparisons shipped with the runner binary

use crate::error::ExecuteError;
use crate::runner::{Bench, FnBench};
use crate::types::BenchResult;
use std::convert::Infallible;
use std::hint::black_box;
use tracing::info;

/// A named comparison and its result
#[derive(Debug, Clone)]
pub struct Comparison {
    pub name: &'static str,
    pub method_one: &'static str,
    pub method_two: &'static str,
    pub result: BenchResult,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<28} | {:<22} vs {:<22} | {} | x{:.2}",
            self.name,
            self.method_one,
            self.method_two,
            self.result,
            self.result.ratio()
        )
    }
}

type DemoResult = Result<Comparison, ExecuteError<Infallible>>;

/// `push_str` into one buffer vs `format!` per piece
pub fn bench_string_building(operations: i64) -> DemoResult {
    let parts = ["alpha", "beta", "gamma", "delta", "epsilon"];

    let mut bench = FnBench::new(
        || {
            let mut out = String::new();
            for part in &parts {
                out.push_str(part);
                out.push(',');
            }
            black_box(out);
        },
        || {
            let mut out = String::new();
            for part in &parts {
                out += &format!("{},", part);
            }
            black_box(out);
        },
    );

    Ok(Comparison {
        name: "String building",
        method_one: "push_str",
        method_two: "format!",
        result: bench.execute(operations)?,
    })
}

/// `Vec::with_capacity` vs growing from empty
pub fn bench_vec_growth(operations: i64) -> DemoResult {
    const LEN: usize = 4096;

    let mut bench = FnBench::new(
        || {
            let mut v = Vec::with_capacity(LEN);
            for i in 0..LEN {
                v.push(i as u64);
            }
            black_box(v);
        },
        || {
            let mut v = Vec::new();
            for i in 0..LEN {
                v.push(i as u64);
            }
            black_box(v);
        },
    );

    Ok(Comparison {
        name: "Vec growth (4096 u64)",
        method_one: "with_capacity",
        method_two: "Vec::new",
        result: bench.execute(operations)?,
    })
}

/// Binary search vs linear scan on a sorted vector
pub fn bench_search(operations: i64) -> DemoResult {
    let haystack: Vec<u64> = (0..10_000u64).map(|i| i * 3).collect();
    let needle = 7_500u64 * 3;

    let mut bench = FnBench::new(
        || {
            black_box(haystack.binary_search(black_box(&needle)).ok());
        },
        || {
            black_box(haystack.iter().position(|v| *v == black_box(needle)));
        },
    );

    Ok(Comparison {
        name: "Search (10k sorted)",
        method_one: "binary_search",
        method_two: "linear scan",
        result: bench.execute(operations)?,
    })
}

/// Run every built-in comparison
pub fn run_all_comparisons(operations: i64) -> Result<Vec<Comparison>, ExecuteError<Infallible>> {
    info!(operations, "Running built-in comparisons");

    let results = vec![
        bench_string_building(operations)?,
        bench_vec_growth(operations)?,
        bench_search(operations)?,
    ];

    for r in &results {
        info!(
            name = r.name,
            faster = %r.result.faster(),
            ratio = r.result.ratio(),
            "Comparison finished"
        );
    }

    Ok(results)
}

/// Render comparisons as a table whose rules match the widest row
pub fn render_table(title: &str, comparisons: &[Comparison]) -> String {
    let rows: Vec<String> = comparisons.iter().map(|c| c.to_string()).collect();
    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count());
    let rule = "═".repeat(width);

    let mut out = format!("{}\n{}\n", title, rule);
    for row in &rows {
        out.push_str(row);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
