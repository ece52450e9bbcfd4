//! Bench runner CLI
//! Runs the built-in comparisons and prints a summary table

use bench_core::demos::render_table;
use bench_core::{run_all_comparisons, BenchConfig, Method};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let mut config = BenchConfig::from_env()?;

    // Optional positional override: bench-runner <operations>
    if let Some(arg) = std::env::args().nth(1) {
        config.operations = arg.parse()?;
        config.validate()?;
    }

    init_logging(&config)?;

    info!(operations = config.operations, "Configuration loaded");

    let results = run_all_comparisons(config.operations)?;

    print!("\n{}", render_table("SIDE-BY-SIDE BENCHMARKS", &results));
    println!("\nSUMMARY:");
    for r in &results {
        let winner = match r.result.faster() {
            Method::One => r.method_one,
            Method::Two => r.method_two,
        };
        println!("   {:<28} {} wins", r.name, winner);
    }

    Ok(())
}

fn init_logging(config: &BenchConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.json_output {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
