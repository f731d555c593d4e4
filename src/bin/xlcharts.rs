//! Command line front-end: list the charts of a workbook and print their
//! Plotly figures as JSON.
//!
//! # Usage
//!
//! ```sh
//! xlcharts list beam.xlsx
//! xlcharts figure beam.xlsx "Deflection" --pretty
//! xlcharts export beam.xlsx --config xlcharts.yaml > figures.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to follow chart discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use xlcharts::{ExcelChartParser, ParserConfig, StaticSpreadsheet};

/// Turn the charts of Excel workbooks into Plotly figures
#[derive(Parser, Debug)]
#[command(name = "xlcharts", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML parser configuration
    #[arg(long, global = true, value_name = "YAML")]
    config: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List chart titles and types
    List {
        /// Workbook to read
        file: PathBuf,
    },
    /// Print the figure of one chart
    Figure {
        /// Workbook to read
        file: PathBuf,
        /// Chart title
        title: String,
    },
    /// Print the figures of all charts as a JSON array
    Export {
        /// Workbook to read
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ParserConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ParserConfig::default(),
    };

    match &cli.command {
        Command::List { file } => {
            let parser = open(file, config)?;
            for info in parser.figure_infos() {
                println!("{}\t{}", info.name, info.chart_type);
            }
        },
        Command::Figure { file, title } => {
            let parser = open(file, config)?;
            let figure = parser
                .get_plotly_figure_by_title(title)
                .with_context(|| format!("failed to build figure '{title}'"))?;
            print_json(&figure, cli.pretty)?;
        },
        Command::Export { file } => {
            let parser = open(file, config)?;
            let figures = parser.get_plotly_figures()?;
            print_json(&figures, cli.pretty)?;
        },
    }
    Ok(())
}

fn open(file: &Path, config: ParserConfig) -> Result<ExcelChartParser<StaticSpreadsheet>> {
    let spreadsheet = StaticSpreadsheet::from_path(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    ExcelChartParser::with_config(spreadsheet, config)
        .with_context(|| format!("failed to parse {}", file.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
