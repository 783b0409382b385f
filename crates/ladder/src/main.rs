//! Ladder CLI
//!
//! Read a ranked ladder and print this round's challenges.

use anyhow::{Context, Result};
use clap::Parser;
use ladder::{render, run, LadderConfig, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ladder", version, about = "Generate ladder challenge pairings")]
struct Cli {
    /// CSV file ranked top to bottom by current ladder position
    ladder: PathBuf,

    /// How many rungs below themselves a player may challenge
    #[arg(long)]
    max_gap: Option<usize>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Column holding the player's name
    #[arg(long)]
    name_column: Option<String>,

    /// TOML settings file (flags override its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log each pairing decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<LadderConfig> {
        let mut config = match &self.config {
            Some(path) => LadderConfig::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => LadderConfig::default(),
        };

        if let Some(max_gap) = self.max_gap {
            config.max_gap = max_gap;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(column) = &self.name_column {
            config.name_column = column.clone();
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config()?;
    let (players, result) = run(&cli.ladder, &config)
        .with_context(|| format!("pairing ladder {}", cli.ladder.display()))?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    print!("{}", render(&players, &result, format)?);
    if cli.json {
        println!();
    }

    Ok(())
}
