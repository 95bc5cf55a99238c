//! Benchmark for the sum_of_primes program
//!
//! This benchmark sieves the integers below a bound and measures how long it takes.

use clap::Parser;
use primesum_benchmark_runner::BenchmarkRunner;

#[derive(Parser)]
struct Config {
    /// Exclusive upper bound on the primes to sum
    #[arg(short = 'b', long, value_name = "NUMBER", default_value = "1000000")]
    bound: usize,
    /// Number of iterations to run
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "1")]
    iterations: usize,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    anyhow::ensure!(config.iterations > 0, "at least one iteration is required");

    println!("Sum of Primes Benchmark");
    println!("=======================");
    println!("Bound: {}", config.bound);
    println!("Iterations: {}", config.iterations);
    println!();

    let runner = BenchmarkRunner::new();

    let mut total_execution_time = 0;

    for i in 1..=config.iterations {
        if config.iterations > 1 {
            println!("--- Iteration {i} ---");
        }

        let stats =
            runner.run_benchmark(config.bound, &format!("sum_of_primes({})", config.bound))?;

        total_execution_time += stats.execution_time_us;

        if config.iterations > 1 {
            println!();
        }
    }

    if config.iterations > 1 {
        println!("===============================================================================");
        println!("Average results over {} iterations:", config.iterations);
        println!("-------------------------------------------------------------------------------");
        println!(
            "Average execution time: {} us",
            total_execution_time / config.iterations as u128
        );
        println!("Total execution time: {total_execution_time} us");
        println!("===============================================================================");
    }

    Ok(())
}
