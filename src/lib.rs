//! xlcharts - turn the charts of Excel workbooks into Plotly figures
//!
//! The library reads the chart definitions embedded in an `.xlsx` workbook,
//! resolves the cell ranges each series plots against an evaluated copy of
//! the workbook, and builds Plotly figure JSON from the result.
//!
//! # Features
//!
//! - **Chart discovery**: Every chart anchored in a worksheet or chartsheet drawing
//! - **Live data**: Series values come from the evaluated workbook, not the chart cache
//! - **Plotly output**: Line, bar, pie, doughnut, scatter and area charts
//! - **Tables**: Input and output parameter tables of calculation workbooks
//!
//! # Example - Building a figure
//!
//! ```no_run
//! use xlcharts::{ExcelChartParser, StaticSpreadsheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = ExcelChartParser::new(StaticSpreadsheet::from_path("beam.xlsx")?)?;
//! let figure = parser.get_plotly_figure_by_title("Deflection")?;
//! println!("{}", figure.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Listing charts
//!
//! ```no_run
//! use xlcharts::{ExcelChartParser, ParserConfig, StaticSpreadsheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ParserConfig::from_path("xlcharts.yaml")?;
//! let parser = ExcelChartParser::with_config(StaticSpreadsheet::from_path("beam.xlsx")?, config)?;
//! for info in parser.figure_infos() {
//!     println!("{} ({})", info.name, info.chart_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Low-level workbook access
//!
//! ```no_run
//! use xlcharts::ooxml::xlsx::Workbook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workbook = Workbook::open("beam.xlsx")?;
//! for value in workbook.resolve("Results!$B$2:$B$10")? {
//!     println!("{value}");
//! }
//! # Ok(())
//! # }
//! ```

/// Parser configuration
pub mod config;

/// Crate error type
pub mod error;

/// OOXML (Office Open XML) package, workbook and chart parsing
///
/// This module reads the parts of an `.xlsx` package the charts depend on:
/// relationships, sheets, shared strings, drawings and chart definitions.
pub mod ooxml;

/// Chart parser producing Plotly figures
pub mod parser;

/// Plotly figure model
pub mod plotly;

/// Spreadsheet calculation seam
pub mod spreadsheet;

pub use config::ParserConfig;
pub use error::{Error, Result};
pub use parser::{ChartData, ChartKind, ExcelChartParser, FigureInfo, InputCell, NamedFigure, OutputField};
pub use plotly::Figure;
pub use spreadsheet::{SpreadsheetCalculation, SpreadsheetResult, StaticSpreadsheet};
