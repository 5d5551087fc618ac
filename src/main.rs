use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idea_lab::clock::{Clock, FixedClock, SystemClock};
use idea_lab::config::LabConfig;
use idea_lab::models::Flavor;
use idea_lab::Lab;

#[derive(Parser)]
#[command(name = "idea-lab")]
#[command(about = "Generate today's AI-flavoured game mechanic note and index it")]
struct Cli {
    /// Lab root holding README.md and the mechanics directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Note style: standard, js or go
    #[arg(short, long, default_value = "standard")]
    flavor: Flavor,

    /// Seed for the vocabulary draw (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate for this date (YYYY-MM-DD) instead of today in UTC
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Print the run outcome as JSON on stdout
    #[arg(long)]
    json: bool,
}

/// Logs go to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "idea_lab=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = LabConfig::new(cli.root);
    let clock: Box<dyn Clock> = match cli.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut lab = Lab::open(&config, clock);
    let outcome = lab
        .run(cli.flavor, &mut rng)
        .with_context(|| format!("Failed to generate note in {}", config.root().display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
