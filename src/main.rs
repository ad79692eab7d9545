use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};

use panos_scanner::config::{ScanConfig, find_version_table, load_config, version_table_candidates};
use panos_scanner::correlate::ApproximateStrategy;
use panos_scanner::probe::HttpProber;
use panos_scanner::scanner::Scanner;
use panos_scanner::table::load_version_table;

#[derive(Parser)]
#[command(name = "panos-scanner")]
#[command(
    version,
    about = "Determine the software version of a remote PAN-OS target. Requires version-table.txt."
)]
struct Cli {
    /// Target base URL (e.g., https://example.com)
    #[arg(short, long)]
    target: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Version table to match against
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// JSON scan configuration
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report the nearest populated day within ±2 days instead of always the next day
    #[arg(long)]
    scan_all_offsets: bool,

    /// Also write JSON logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = panos_scanner::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScanConfig::default(),
    };

    let table_path = cli
        .table
        .clone()
        .or_else(|| config.version_table.clone())
        .unwrap_or_else(|| find_version_table(&version_table_candidates()));
    let table = load_version_table(&table_path)?;
    if table.is_empty() {
        warn!("Version table {:?} has no entries", table_path);
    }
    info!("Loaded {} versions from {:?}", table.len(), table_path);

    let strategy = if cli.scan_all_offsets {
        ApproximateStrategy::FirstNonEmpty
    } else {
        ApproximateStrategy::FirstOffset
    };
    let prober = HttpProber::new(&cli.target, &config)?;
    let scanner = Scanner::new(prober, &table).with_strategy(strategy);

    info!("[*] {}", cli.target);
    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(scanner.scan(&config.resources));

    let report = match report {
        Ok(report) => report,
        Err(e) => {
            debug!("{}", e);
            eprintln!("[-] {} {}", cli.target, e.kind_name());
            return Ok(ExitCode::FAILURE);
        }
    };

    for result in report.matches.deduplicated() {
        println!("{}", result);
    }

    Ok(ExitCode::SUCCESS)
}
