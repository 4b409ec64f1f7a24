//! Generate sample weight records as a JSON export.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Parser;
use rand::Rng;
use tracing_subscriber::EnvFilter;
use weightshare::{export, to_json, Ledger};

#[derive(Parser)]
#[command(name = "wshare-gen")]
#[command(about = "Generate sample weight records as a JSON export")]
#[command(after_help = "OUTPUT FORMAT:\n  \
    {\"version\": 1, \"records\": [{\"id\", \"date\", \"weight\", \"fat_rate\"}, ...]}\n  \
    Records are written newest first, one per logged day.")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Number of days to cover
    #[arg(short, long, default_value = "90")]
    days: u64,

    /// First day of the generated range
    #[arg(long, default_value = "2024-01-01")]
    start: NaiveDate,

    /// Skip random days (missed weigh-ins)
    #[arg(long)]
    gaps: bool,

    /// Starting weight in kg
    #[arg(long, default_value = "72.0")]
    base_weight: f64,

    /// Starting body-fat percentage
    #[arg(long, default_value = "22.0")]
    base_fat: f64,
}

/// Round to one decimal, the precision scales display
fn tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn generate(args: &Args) -> Result<Ledger> {
    let mut rng = rand::rng();
    let mut ledger = Ledger::new();

    // Slow downward drift with daily noise
    let mut weight = args.base_weight;
    let mut fat = args.base_fat;

    for i in 0..args.days {
        weight += rng.random_range(-0.45..0.35);
        fat += rng.random_range(-0.25..0.2);
        weight = weight.max(30.0);
        fat = fat.clamp(3.0, 60.0);

        // Roughly one missed day in eight
        if args.gaps && i > 0 && rng.random_range(0..8) == 0 {
            continue;
        }

        let date = args
            .start
            .checked_add_days(Days::new(i))
            .context("date range overflows the calendar")?;
        ledger.save(date, tenths(weight), tenths(fat))?;
    }

    Ok(ledger)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let ledger = generate(&args)?;
    let json = to_json(&export(&ledger))?;
    fs::write(&args.output, json).with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Generated {} records", ledger.len());
    println!("Written to: {}", args.output.display());
    Ok(())
}
