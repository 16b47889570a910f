use anyhow::{Context, Result};
use cardstats_core::ColorStreams;
use cardstats_ingest::{ingest, HtmlTableReader, ScanOutput};
use cardstats_report::{export_rows, Dashboard};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod logging;
mod state;
mod summary;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "cardstats",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARDSTATS_BUILD_SHA"), ")"),
    about = "Campus-card statement charts from a saved account-activity page"
)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the dashboard (totals, pie and weekly bar data)
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Fixed color seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write every parsed transaction as CSV
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Manage ~/.cardstats/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct SourceArgs {
    /// Saved statement page (`-` for stdin)
    #[arg(long)]
    html: PathBuf,

    /// CSS selector for the statement table body (overrides config)
    #[arg(long)]
    selector: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init(&cfg.log.level, cli.verbose);

    match cli.command {
        Command::Report {
            source,
            format,
            seed,
        } => {
            let scan = scan_statement(&source, &cfg)?;
            let mut colors = match seed.or(cfg.colors.seed) {
                Some(seed) => ColorStreams::seeded(seed),
                None => ColorStreams::new(),
            };
            let dash = Dashboard::build(&scan, &mut colors);

            match format {
                Format::Json => {
                    let json = serde_json::to_string_pretty(&dash).context("serialize dashboard")?;
                    println!("{json}");
                }
                Format::Text => print!("{}", summary::render(&scan, &dash)),
            }
        }

        Command::Export { source, out } => {
            let scan = scan_statement(&source, &cfg)?;
            let rows = export_rows(&scan);
            match out {
                Some(path) => {
                    let file =
                        File::create(&path).with_context(|| format!("create {}", path.display()))?;
                    write_csv(file, &rows)?;
                    info!(rows = rows.len(), path = %path.display(), "exported");
                }
                None => write_csv(io::stdout().lock(), &rows)?,
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn scan_statement(source: &SourceArgs, cfg: &Config) -> Result<ScanOutput> {
    let html = state::read_statement(&source.html)?;
    let selector = source
        .selector
        .as_deref()
        .unwrap_or(&cfg.source.selector);

    let reader = HtmlTableReader::with_selector(html, selector);
    ingest(&reader).with_context(|| format!("scanning {}", display_source(&source.html)))
}

fn display_source(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

fn write_csv<W: Write>(w: W, rows: &[cardstats_report::ExportRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.serialize(row).context("write csv row")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}
