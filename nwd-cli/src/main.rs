use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use nwd_core::config::{DiscoveryConfig, LeftBoundary};
use nwd_core::io::build_output_path;
use nwd_core::model::discovery::NewWordDiscovery;
use nwd_core::report;

/// Discover new words in an unsegmented text corpus.
#[derive(Parser, Debug)]
#[command(name = "nwd", version, about)]
struct Cli {
    /// Corpus file, UTF-8, one line per record
    corpus: PathBuf,

    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extract substrings of length 1 to N-1
    #[arg(long)]
    max_length: Option<usize>,

    /// Candidates kept per length
    #[arg(long)]
    top_k: Option<usize>,

    /// Value used for a missing AMI or entropy when ranking
    #[arg(long)]
    score_floor: Option<f64>,

    /// Left neighbor rule at the start of a line: strict or symmetric
    #[arg(long)]
    left_boundary: Option<LeftBoundary>,

    /// Extraction workers (0 = one per CPU, 1 = sequential)
    #[arg(long)]
    workers: Option<usize>,

    /// CSV report path (defaults to the corpus path with a .csv extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print the candidates, do not write the CSV report
    #[arg(long)]
    no_report: bool,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the configuration file, then command-line flags.
    fn discovery_config(&self) -> Result<DiscoveryConfig> {
        let mut config = match &self.config {
            Some(path) => DiscoveryConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => DiscoveryConfig::default(),
        };

        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if let Some(score_floor) = self.score_floor {
            config.score_floor = score_floor;
        }
        if let Some(left_boundary) = self.left_boundary {
            config.left_boundary = left_boundary;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = cli.discovery_config()?;
    let discovery = NewWordDiscovery::from_file(&cli.corpus, config)
        .with_context(|| format!("discovering new words in {}", cli.corpus.display()))?;

    // One line per length, best candidates first
    let buckets = discovery.buckets();
    for bucket in &buckets {
        let words: Vec<&str> = bucket.candidates.iter().map(|c| c.candidate.as_str()).collect();
        println!("{}: {:?}", bucket.length, words);
    }

    if !cli.no_report {
        let output = match &cli.output {
            Some(path) => path.clone(),
            None => build_output_path(&cli.corpus, "csv")?,
        };
        report::write_csv_file(&output, &buckets)
            .with_context(|| format!("writing report {}", output.display()))?;
        info!("report written to {}", output.display());
    }

    Ok(())
}
