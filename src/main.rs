use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::Level;

use compmap::analysis::{map_components, ImportCapture, Mode, ScanOptions};
use compmap::report::{write_report, OutputFormat, ReportData};

#[derive(Parser)]
#[command(name = "compmap")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Map which front-end files export and import which components", long_about = None)]
struct Cli {
    /// What to map: `export` (components each file exposes) or `import` (components each file consumes)
    mode: Mode,

    /// Directory to scan
    path: PathBuf,

    /// Export mode: only match `export default ...` statements
    #[arg(long)]
    default_only: bool,

    /// Import mode: report every name in an import clause, not just the first
    #[arg(long)]
    all_names: bool,

    /// Directory name to skip while walking (repeatable)
    #[arg(long = "skip-dir", value_name = "NAME")]
    skip_dirs: Vec<String>,

    /// Output format: text, json, csv, markdown
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            mode: self.mode,
            require_default: self.default_only,
            import_capture: if self.all_names {
                ImportCapture::All
            } else {
                ImportCapture::First
            },
            skip_dirs: self.skip_dirs.clone(),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr, stdout is for the report
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let aggregation = map_components(&cli.path, &cli.scan_options())
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;

    if !aggregation.failures.is_empty() {
        tracing::warn!(
            "{} file(s) could not be read and were skipped",
            aggregation.failures.len()
        );
    }

    let data = ReportData::new(cli.mode, &cli.path, &aggregation.components);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(cli.format, &data, &mut out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    Ok(())
}
