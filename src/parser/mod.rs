//! Excel chart parser.
//!
//! [`ExcelChartParser`] reads the chart definitions of a workbook once, then
//! builds Plotly figures from the values of the evaluated workbook. The
//! calculation is evaluated lazily, at most once per parser.
//!
//! # Example
//!
//! ```no_run
//! use xlcharts::parser::ExcelChartParser;
//! use xlcharts::spreadsheet::StaticSpreadsheet;
//!
//! # fn main() -> xlcharts::Result<()> {
//! let parser = ExcelChartParser::new(StaticSpreadsheet::from_path("loads.xlsx")?)?;
//! for title in parser.chart_titles() {
//!     println!("{title}");
//! }
//! let figure = parser.get_plotly_figure_by_title("Deflection")?;
//! println!("{}", figure.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod chart_data;
pub mod figure_builder;
pub mod tables;

pub use chart_data::{AxisData, ChartData, ChartKind, SeriesData};
pub use figure_builder::build_figure;
pub use tables::{FigureInfo, InputCell, OutputField, concat_name};

use std::collections::BTreeMap;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::ooxml::charts::Chart;
use crate::ooxml::xlsx::cell::CellValue;
use crate::ooxml::xlsx::workbook::Workbook;
use crate::plotly::Figure;
use crate::spreadsheet::SpreadsheetCalculation;

/// A figure together with the title of its chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedFigure {
    pub title: String,
    pub figure: Figure,
}

#[derive(Debug)]
struct NamedChart {
    title: String,
    sheet: String,
    chart: Chart,
}

#[derive(Debug)]
struct Evaluated {
    workbook: Workbook,
    values: BTreeMap<String, CellValue>,
}

/// Parser for the charts of one spreadsheet calculation.
pub struct ExcelChartParser<C: SpreadsheetCalculation> {
    calculation: C,
    config: ParserConfig,
    template: Workbook,
    charts: Vec<NamedChart>,
    evaluated: OnceCell<Evaluated>,
}

impl<C: SpreadsheetCalculation> ExcelChartParser<C> {
    /// Create a parser with the default configuration.
    pub fn new(calculation: C) -> Result<Self> {
        Self::with_config(calculation, ParserConfig::default())
    }

    /// Create a parser, reading the charts of the template workbook.
    ///
    /// Charts without a title are named `"{untitled_prefix} {n}"` with `n`
    /// counting untitled charts from 1. When two charts share a title the
    /// later one wins.
    pub fn with_config(calculation: C, config: ParserConfig) -> Result<Self> {
        let template = {
            let bytes = calculation.template()?;
            load_workbook(&bytes)?
        };

        let mut charts: Vec<NamedChart> = Vec::new();
        let mut untitled = 0usize;
        for entry in template.charts()? {
            let title = match entry.chart.title.clone() {
                Some(title) => title,
                None => {
                    untitled += 1;
                    format!("{} {}", config.untitled_prefix, untitled)
                },
            };

            if let Some(existing) = charts.iter_mut().find(|c| c.title == title) {
                warn!(
                    title = %title,
                    previous = %existing.sheet,
                    sheet = %entry.sheet,
                    "duplicate chart title, keeping the later chart"
                );
                existing.sheet = entry.sheet;
                existing.chart = entry.chart;
            } else {
                charts.push(NamedChart {
                    title,
                    sheet: entry.sheet,
                    chart: entry.chart,
                });
            }
        }
        debug!(charts = charts.len(), "charts discovered");

        Ok(Self {
            calculation,
            config,
            template,
            charts,
            evaluated: OnceCell::new(),
        })
    }

    #[inline]
    pub fn calculation(&self) -> &C {
        &self.calculation
    }

    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The workbook the charts were read from.
    #[inline]
    pub fn template(&self) -> &Workbook {
        &self.template
    }

    /// Chart titles in discovery order.
    pub fn chart_titles(&self) -> Vec<&str> {
        self.charts.iter().map(|c| c.title.as_str()).collect()
    }

    /// Chart definition by title.
    pub fn chart(&self, title: &str) -> Result<&Chart> {
        self.find(title).map(|c| &c.chart)
    }

    /// Name of the sheet a chart is drawn on.
    pub fn chart_sheet(&self, title: &str) -> Result<&str> {
        self.find(title).map(|c| c.sheet.as_str())
    }

    /// Resolved data of a chart.
    pub fn chart_data(&self, title: &str) -> Result<ChartData> {
        let named = self.find(title)?;
        let evaluated = self.evaluated()?;
        chart_data::extract(&named.title, &named.chart, &evaluated.workbook, &self.config)
    }

    /// Plotly figure of the chart titled `title`.
    pub fn get_plotly_figure_by_title(&self, title: &str) -> Result<Figure> {
        let data = self.chart_data(title)?;
        Ok(build_figure(&data, &self.config))
    }

    /// Alias of [`get_plotly_figure_by_title`](Self::get_plotly_figure_by_title).
    #[inline]
    pub fn get_plotly_figure(&self, title: &str) -> Result<Figure> {
        self.get_plotly_figure_by_title(title)
    }

    /// Figures of all charts; unsupported charts are skipped.
    pub fn get_plotly_figures(&self) -> Result<Vec<NamedFigure>> {
        let mut figures = Vec::with_capacity(self.charts.len());
        for named in &self.charts {
            match self.chart_data(&named.title) {
                Ok(data) => figures.push(NamedFigure {
                    title: named.title.clone(),
                    figure: build_figure(&data, &self.config),
                }),
                Err(err @ Error::UnsupportedChartType { .. }) => {
                    warn!(title = %named.title, error = %err, "skipping chart");
                },
                Err(err) => return Err(err),
            }
        }
        Ok(figures)
    }

    /// Name, identifier and type of every chart.
    pub fn figure_infos(&self) -> Vec<FigureInfo> {
        self.charts
            .iter()
            .map(|c| FigureInfo {
                name: c.title.clone(),
                concat_name: concat_name(&c.title),
                chart_type: c
                    .chart
                    .chart_type()
                    .map_or("unknown", |t| t.xml_element_name())
                    .to_string(),
            })
            .collect()
    }

    /// Check that the input and output sheets exist.
    pub fn validate_sheet_names(&self) -> Result<()> {
        tables::validate_sheet_names(&self.template, &self.config)
    }

    /// Rows of the input table.
    pub fn input_cells(&self) -> Result<Vec<InputCell>> {
        tables::input_cells(&self.template, &self.config)
    }

    /// Rows of the output table with their evaluated values.
    pub fn outputs(&self) -> Result<Vec<OutputField>> {
        let evaluated = self.evaluated()?;
        tables::outputs(&evaluated.workbook, &evaluated.values, &self.config)
    }

    fn find(&self, title: &str) -> Result<&NamedChart> {
        self.charts
            .iter()
            .find(|c| c.title == title)
            .ok_or_else(|| Error::ChartNotFound(title.to_string()))
    }

    fn evaluated(&self) -> Result<&Evaluated> {
        self.evaluated.get_or_try_init(|| {
            debug!("evaluating spreadsheet");
            let result = self.calculation.evaluate()?;
            Ok(Evaluated {
                workbook: load_workbook(&result.file)?,
                values: result.values,
            })
        })
    }
}

fn load_workbook(bytes: &[u8]) -> Result<Workbook> {
    if bytes.is_empty() {
        return Err(Error::EmptySpreadsheet);
    }
    Ok(Workbook::from_bytes(bytes)?)
}
