use std::io::{self, Write};

use clap::Parser;
use entrysum::{
    find_subset_counted, io_utils::CliError, logger, render, EntrySumError,
    OutputFormat, SearchConfig, SearchStats, SubsetSize, ValueSet,
};
use tracing::info;

/// Find distinct expense entries that sum to a target.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Sum to search for
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,
    /// Number of entries to combine (2 or 3)
    #[arg(long)]
    size: Option<usize>,
    /// Comma separated entries replacing the built-in report
    #[arg(long, allow_hyphen_values = true)]
    values: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also print the product of the entries (text format)
    #[arg(long)]
    product: bool,
    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
    /// Log level (off, error, warn, info, debug, trace); RUST_LOG is used when this is not a level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn config_from_args(args: &Args) -> Result<SearchConfig, EntrySumError> {
    let mut cfg = SearchConfig::default();
    if let Some(target) = args.target {
        cfg.target = target;
    }
    if let Some(size) = args.size {
        cfg.size = SubsetSize::try_from(size)?;
    }
    if let Some(values) = &args.values {
        cfg.values = values.parse::<ValueSet>()?;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(&args.log_level).map_err(|e| CliError::new("logging", e))?;

    let cfg = config_from_args(&args).map_err(|e| CliError::new("arguments", e))?;
    info!(values = %cfg.values, target = cfg.target, size = %cfg.size, "searching");

    let mut stats = SearchStats::new();
    let found = find_subset_counted(&cfg.values, cfg.target, cfg.size, &mut stats);
    if args.stats {
        stats.report();
    }

    let subset = found.ok_or_else(|| {
        CliError::new(
            "search",
            EntrySumError::NotFound {
                size: cfg.size.get(),
                target: cfg.target,
            },
        )
    })?;
    info!(%subset, "found");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &subset, cfg.target, cfg.size, args.format, args.product)
        .map_err(|e| CliError::new("writing output", e))?;
    out.flush()?;
    Ok(())
}
