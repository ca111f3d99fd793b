// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quantas_results::{Config, convert};

/// Summarize a Quantas experiment test log as CSV.
///
/// Reads `Delay10.txt` from the current directory and writes
/// `processed_experiment_results.csv` next to it, one row per test run.
#[derive(Parser, Debug)]
#[command(name = "quantas-results", version)]
struct Cli {}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quantas_results=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = Config::default();
    let summary = convert(&config).with_context(|| {
        format!(
            "converting '{}' to '{}'",
            config.input.display(),
            config.output.display()
        )
    })?;

    tracing::debug!(
        rows = summary.rows,
        max_blocks_flipped = summary.max_blocks_flipped,
        "done"
    );
    println!("Processed data saved to {}", summary.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_takes_no_options() {
        Cli::command().debug_assert();
        assert!(Cli::try_parse_from(["quantas-results"]).is_ok());
        assert!(Cli::try_parse_from(["quantas-results", "--input", "x.txt"]).is_err());
        assert!(Cli::try_parse_from(["quantas-results", "other.txt"]).is_err());
    }
}
