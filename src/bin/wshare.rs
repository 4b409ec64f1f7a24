//! Create and inspect weight share links.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use weightshare::{
    available_months, decode, encode, parse_import, payload_from_url, Ledger, Measurement, MonthlyStats,
    OverallStats, ShareSummary,
};

#[derive(Parser)]
#[command(name = "wshare")]
#[command(about = "Create and inspect weight share links")]
#[command(after_help = "PAYLOAD FORMAT:\n  \
    yyyymmdd-n-aaabbbccc-xxxyyyzzz\n  \
    - yyyymmdd: first day of the range\n  \
    - n: weight digits per day (3 or 4)\n  \
    - aaabbbccc: weights, one per day (kg, or kg x 10 when n = 4)\n  \
    - xxxyyyzzz: body-fat % x 10, 3 digits per day\n\n\
INPUT FILES:\n  \
    JSON exports, either {\"version\": 1, \"records\": [...]} or a plain record array")]
struct Args {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a share URL for the records in an export file
    Encode {
        /// Export file to read
        input: PathBuf,

        /// First day to share (inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to share (inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Base URL the share page is served from
        #[arg(long, env = "WEIGHTSHARE_ORIGIN", default_value = "http://localhost:5173")]
        origin: String,
    },

    /// Show the records carried by a share payload or URL
    Decode {
        /// Bare payload or full share URL
        payload: String,

        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print overall statistics, or one month's with --month
    Stats {
        /// Export file to read
        input: PathBuf,

        /// Month as YYYY-MM
        #[arg(long, value_parser = parse_month)]
        month: Option<YearMonth>,
    },

    /// List months that have records
    Months {
        /// Export file to read
        input: PathBuf,
    },
}

#[derive(Clone, Copy)]
struct YearMonth {
    year: i32,
    month: u32,
}

fn parse_month(s: &str) -> Result<YearMonth, String> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got '{s}'"))?;
    let year: i32 = year.parse().map_err(|e| format!("invalid year '{year}': {e}"))?;
    let month: u32 = month.parse().map_err(|e| format!("invalid month '{month}': {e}"))?;
    if !(1..=12).contains(&month) {
        return Err(format!("month {month} is outside 1-12"));
    }
    Ok(YearMonth { year, month })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read an export file into a ledger
fn load_ledger(path: &Path) -> Result<Ledger> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records = parse_import(&json).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded records");

    let mut ledger = Ledger::new();
    let report = ledger.import(&records);
    tracing::debug!(message = %report.message);
    Ok(ledger)
}

fn run_encode(input: &Path, from: Option<NaiveDate>, to: Option<NaiveDate>, origin: &str) -> Result<()> {
    let ledger = load_ledger(input)?;
    let records = match (from, to) {
        (None, None) => ledger.records_desc(),
        (from, to) => ledger.range(from.unwrap_or(NaiveDate::MIN), to.unwrap_or(NaiveDate::MAX)),
    };

    let Some(url) = encode(&records, origin) else {
        bail!("no records with positive weight and fat rate in the selected range");
    };
    println!("{url}");
    Ok(())
}

fn run_decode(input: &str, json: bool) -> Result<()> {
    let payload = if input.contains('?') {
        payload_from_url(input).context("URL has no share payload")?
    } else {
        input
    };
    let Some(records) = decode(payload) else {
        bail!("invalid or missing share data; expected yyyymmdd-n-aaabbbccc-xxxyyyzzz");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    print_table(&records);
    if let Some(summary) = ShareSummary::of(&records) {
        println!();
        println!("Period:          {} - {}", summary.start, summary.end);
        println!("Records:         {}", summary.record_count);
        println!("Average weight:  {:.1} kg", summary.average_weight);
        println!("Average fat:     {:.1}%", summary.average_fat);
        println!("Weight change:   {:+.1} kg", summary.weight_change);
        println!("Fat change:      {:+.1}%", summary.fat_change);
    }
    Ok(())
}

fn print_table(records: &[Measurement]) {
    println!(
        "{:<16} {:>11} {:>7} {:>13} {:>14}",
        "Date", "Weight (kg)", "Fat %", "Fat mass (kg)", "Lean mass (kg)"
    );
    for r in records {
        println!(
            "{:<16} {:>11.1} {:>7.1} {:>13.1} {:>14.1}",
            r.date.format("%Y-%m-%d (%a)").to_string(),
            r.weight,
            r.fat_rate,
            r.fat_mass(),
            r.lean_mass()
        );
    }
}

fn run_stats(input: &Path, month: Option<YearMonth>) -> Result<()> {
    let ledger = load_ledger(input)?;
    if let Some(YearMonth { year, month }) = month {
        let stats = MonthlyStats::of(&ledger.month(year, month));
        println!("{year}-{month:02}");
        println!("Records:         {}", stats.total_records);
        println!("Average weight:  {:.1} kg", stats.average_weight);
        println!("Average fat:     {:.1}%", stats.average_fat);
        println!("Weight range:    {:.1} - {:.1} kg", stats.min_weight, stats.max_weight);
        println!("Fat range:       {:.1} - {:.1}%", stats.min_fat, stats.max_fat);
        println!("Weight change:   {:+.1} kg", stats.weight_change);
        println!("Fat change:      {:+.1}%", stats.fat_change);
    } else {
        let stats = OverallStats::of(&ledger.records_desc());
        println!("Records:         {}", stats.total_records);
        println!("Latest:          {:.1} kg, {:.1}%", stats.latest_weight, stats.latest_fat);
        println!("Average weight:  {:.1} kg", stats.average_weight);
        println!("Average fat:     {:.1}%", stats.average_fat);
        println!("Weight range:    {:.1} - {:.1} kg", stats.min_weight, stats.max_weight);
        println!("Last change:     {:+.1} kg, {:+.1}%", stats.weight_change, stats.fat_change);
    }
    Ok(())
}

fn run_months(input: &Path) -> Result<()> {
    let ledger = load_ledger(input)?;
    for m in available_months(&ledger.records_desc()) {
        println!("{}-{:02}  {:>3} records", m.year, m.month, m.count);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Encode { input, from, to, origin } => run_encode(&input, from, to, &origin),
        Command::Decode { payload, json } => run_decode(&payload, json),
        Command::Stats { input, month } => run_stats(&input, month),
        Command::Months { input } => run_months(&input),
    }
}
