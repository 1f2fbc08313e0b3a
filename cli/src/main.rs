use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Context;
use log::info;
use merkle_fixture_common::parameters::DEFAULT_OUTPUT_PATH;
use merkle_fixture_engine::{
    generate, write_merkle_input, FastxxHashRng, GenerationResult,
    GeneratorConfig, RngDraws,
};

/// Generate randomized reward claims for the Merkle distributor tests
#[derive(Parser)]
pub struct Args {
    /// Where to write the Merkle input json
    #[clap(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seed for the rng. A fresh one is picked (and logged) if omitted
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse cli arguments
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Pick seed up front so any run can be replayed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed: {seed}");

    // Allocate until a pool runs dry
    let config = GeneratorConfig::default();
    let mut draws = RngDraws::new(FastxxHashRng::new(seed));
    let result = generate(&config, &mut draws)?;
    log_summary(&result);

    // Write atomically
    write_merkle_input(&args.output, &result.to_merkle_input())
        .wrap_err_with(|| {
            format!("failed to write {}", args.output.display())
        })?;

    Ok(())
}

fn log_summary(result: &GenerationResult) {
    for pool in &result.pools {
        info!("Total amount {}: {}", pool.symbol, pool.allocated);
    }
    info!("Number of claimers: {}", result.count());
}
