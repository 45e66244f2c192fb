mod config;
mod harness;

use clap::Parser;
use config::{CliArgs, RunConfig};
use strand::{StringGenerator, default_strategies};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = RunConfig::try_from(args)?;
    init_tracing();

    let strategies = default_strategies();

    tracing::info!(
        alphabet_len = config.alphabet.len(),
        calls = config.calls,
        lengths = ?config.lengths,
        "starting strategy comparison"
    );

    println!("Trying each of the strategies once.");
    for strategy in &strategies {
        let sample = strategy.generate(config.sample_length, &config.alphabet);
        println!("[{sample}] {}", strategy.name());
    }

    println!();
    println!(
        "Timing each strategy for a total of {} calls per cell.",
        config.calls
    );

    for &length in &config.lengths {
        println!();
        println!("Timings for {length}-character strings.");
        for strategy in &strategies {
            let elapsed = harness::time_strategy(strategy, length, &config.alphabet, config.calls);
            println!(
                "{:10.3} ms {}",
                elapsed.as_secs_f64() * 1_000.0,
                strategy.name()
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
