//! Quote-Harvest main entry point
//!
//! This is the command-line interface for the Quote-Harvest crawler.

use clap::Parser;
use quote_harvest::config::{load_config, CrawlConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Harvest: crawl a paginated quote listing into a CSV file
///
/// Starts at the home page, follows the "next" link page by page, and
/// writes every quote found to OUTPUT once the last page is reached.
#[derive(Parser, Debug)]
#[command(name = "quote-harvest")]
#[command(version)]
#[command(about = "Crawl a paginated quote listing into CSV", long_about = None)]
struct Cli {
    /// Destination CSV file [default: quotes.csv]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => CrawlConfig::default(),
    };

    if let Some(output) = cli.output {
        config.output_path = output;
    }

    match quote_harvest::run(&config).await {
        Ok(stats) => {
            tracing::info!(
                "Wrote {} quotes from {} pages to {}",
                stats.quotes_collected,
                stats.pages_visited,
                config.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_harvest=info,warn"),
            1 => EnvFilter::new("quote_harvest=debug,info"),
            2 => EnvFilter::new("quote_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
