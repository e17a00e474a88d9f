//! bloom-analyzer binary
//!
//! Sizes Bloom filters for a grid of workloads, measures their false
//! positive rate and prints a memory comparison against an exact set.

use bloom_analyzer::analysis::{self, AnalysisConfig, Report};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Bloom filter sizing and false positive analysis
#[derive(Parser, Debug)]
#[command(name = "bloom-analyzer", version, about)]
struct Cli {
    /// Expected item counts to analyze
    #[arg(short = 'n', long, value_delimiter = ',', default_values_t = AnalysisConfig::default().item_counts)]
    items: Vec<usize>,

    /// Target false positive rates, each in (0, 1)
    #[arg(short = 'p', long, value_delimiter = ',', default_values_t = AnalysisConfig::default().target_rates)]
    rates: Vec<f64>,

    /// Number of never-inserted keys probed per workload
    #[arg(long, default_value_t = AnalysisConfig::default().probe_count)]
    probes: usize,
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        Self {
            item_counts: cli.items,
            target_rates: cli.rates,
            probe_count: cli.probes,
        }
    }
}

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = AnalysisConfig::from(Cli::parse());
    info!(
        workloads = config.item_counts.len() * config.target_rates.len(),
        probes = config.probe_count,
        "starting analysis"
    );

    let results = match analysis::run(&config) {
        Ok(results) => results,
        Err(e) => {
            error!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", Report::new(&results));
}
