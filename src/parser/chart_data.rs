//! Chart data extraction.
//!
//! Turns a parsed chart definition plus the evaluated workbook into plain
//! series data: resolved X and Y values, names, number formats and the
//! drawing hints the figure needs.

use serde::Serialize;
use tracing::warn;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::ooxml::charts::{
    Axis, Chart, ChartType, DataKind, DataSource, Grouping, Series, SeriesName, TypeGroup,
};
use crate::ooxml::error::OoxmlError;
use crate::ooxml::xlsx::cell::CellValue;
use crate::ooxml::xlsx::workbook::Workbook;

/// Chart kinds that can be rendered as Plotly traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Scatter,
    Area,
    Doughnut,
}

impl ChartKind {
    /// Renderable kind of a chart type; 2D and 3D variants share one.
    pub fn from_chart_type(chart_type: ChartType) -> Option<Self> {
        match chart_type {
            ChartType::Line | ChartType::Line3D => Some(Self::Line),
            ChartType::Bar | ChartType::Bar3D => Some(Self::Bar),
            ChartType::Pie | ChartType::Pie3D => Some(Self::Pie),
            ChartType::Scatter => Some(Self::Scatter),
            ChartType::Area | ChartType::Area3D => Some(Self::Area),
            ChartType::Doughnut => Some(Self::Doughnut),
            _ => None,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Area => "area",
            Self::Doughnut => "doughnut",
        }
    }

    /// Plotted against categories rather than X values.
    #[inline]
    pub const fn is_categorical(&self) -> bool {
        !matches!(self, Self::Scatter)
    }

    /// Pie-like kinds have no axes.
    #[inline]
    pub const fn is_radial(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

/// Axis settings carried into the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisData {
    pub title: Option<String>,
    /// Excel number format code for the tick labels
    pub number_format: Option<String>,
    pub logarithmic: bool,
    pub reversed: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One resolved series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub name: Option<String>,
    /// Kind of the type group the series belongs to
    pub kind: ChartKind,
    /// Categories or X values
    pub x: Vec<CellValue>,
    /// Values or Y values
    pub y: Vec<CellValue>,
    pub x_format: Option<String>,
    pub y_format: Option<String>,
    pub lines: bool,
    pub markers: bool,
    pub smooth: bool,
    /// Horizontal bars
    pub horizontal: bool,
    pub stacked: bool,
    /// Doughnut hole as a fraction of the radius
    pub hole: Option<f64>,
}

/// Everything needed to build the figure of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    /// Kind of the primary type group
    pub kind: ChartKind,
    pub x_axis: AxisData,
    pub y_axis: AxisData,
    pub show_legend: bool,
    pub grouping: Option<Grouping>,
    pub horizontal: bool,
    pub series: Vec<SeriesData>,
}

/// Extract the data of `chart` from the evaluated workbook.
pub(crate) fn extract(
    title: &str,
    chart: &Chart,
    workbook: &Workbook,
    config: &ParserConfig,
) -> Result<ChartData> {
    let primary = chart.primary_group().ok_or_else(|| Error::UnsupportedChartType {
        title: title.to_string(),
        kind: "empty".to_string(),
        allowed: config.allowed_chart_types.clone(),
    })?;
    let kind = renderable_kind(primary.chart_type, config).ok_or_else(|| {
        Error::UnsupportedChartType {
            title: title.to_string(),
            kind: primary.chart_type.kind().to_string(),
            allowed: config.allowed_chart_types.clone(),
        }
    })?;

    let mut series = Vec::with_capacity(chart.series_count());
    let mut shared_categories: Option<(Vec<CellValue>, Option<String>)> = None;

    for group in &chart.plot_area.type_groups {
        let Some(group_kind) = renderable_kind(group.chart_type, config) else {
            warn!(chart = title, kind = group.chart_type.kind(), "skipping unsupported type group");
            continue;
        };
        let categorical = group_kind.is_categorical();

        for s in group.ordered_series() {
            let y_source = s.y_source(categorical);
            let y = match y_source {
                Some(source) => resolve_source(title, source, workbook, config)?,
                None => Vec::new(),
            };
            let y_format = y_source.and_then(source_format);

            let (x, x_format) = match s.x_source(categorical) {
                Some(source) => {
                    let x = resolve_source(title, source, workbook, config)?;
                    let format = source_format(source);
                    if categorical {
                        shared_categories = Some((x.clone(), format.clone()));
                    }
                    (x, format)
                },
                None => match shared_categories.as_ref().filter(|_| categorical) {
                    Some((x, format)) => (x.clone(), format.clone()),
                    None => (index_values(y.len(), config.index_base), None),
                },
            };

            series.push(series_data(s, group, group_kind, workbook, x, y, x_format, y_format));
        }
    }

    let (x_axis, y_axis) = if kind.is_radial() {
        (AxisData::default(), AxisData::default())
    } else {
        axes_data(chart, primary, series.first())
    };

    Ok(ChartData {
        title: title.to_string(),
        kind,
        x_axis,
        y_axis,
        show_legend: chart.legend.is_some(),
        grouping: primary.grouping,
        horizontal: primary.is_horizontal(),
        series,
    })
}

fn renderable_kind(chart_type: ChartType, config: &ParserConfig) -> Option<ChartKind> {
    ChartKind::from_chart_type(chart_type).filter(|k| config.allows(k.name()))
}

/// Positions `index_base, index_base + 1, ...` for `len` points.
fn index_values(len: usize, index_base: i64) -> Vec<CellValue> {
    (0..len as i64).map(|i| CellValue::Int(index_base + i)).collect()
}

/// Number format of a source; `General` and string data have none.
fn source_format(source: &DataSource) -> Option<String> {
    if source.kind != DataKind::Number {
        return None;
    }
    normalize_format(source.format_code.as_deref())
}

fn normalize_format(code: Option<&str>) -> Option<String> {
    code.map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("General"))
        .map(str::to_string)
}

/// Values of a source from the evaluated workbook.
///
/// Literal sources and multi-level categories use their points directly.
fn resolve_source(
    title: &str,
    source: &DataSource,
    workbook: &Workbook,
    config: &ParserConfig,
) -> Result<Vec<CellValue>> {
    let formula = source.formula.as_deref().map(str::trim).filter(|f| !f.is_empty());
    let Some(formula) = formula.filter(|_| source.kind != DataKind::MultiLevel) else {
        return Ok(source.points.clone());
    };

    match workbook.resolve(formula) {
        Ok(values) => Ok(values),
        Err(
            err @ (OoxmlError::SheetNotFound(_)
            | OoxmlError::InvalidReference(_)
            | OoxmlError::UnresolvedReference(_)),
        ) if config.cache_fallback && !source.points.is_empty() => {
            warn!(chart = title, formula, error = %err, "using cached chart values");
            Ok(source.points.clone())
        },
        Err(err) => Err(err.into()),
    }
}

#[allow(clippy::too_many_arguments)]
fn series_data(
    series: &Series,
    group: &TypeGroup,
    kind: ChartKind,
    workbook: &Workbook,
    x: Vec<CellValue>,
    y: Vec<CellValue>,
    x_format: Option<String>,
    y_format: Option<String>,
) -> SeriesData {
    let (lines, markers, smooth) = match kind {
        ChartKind::Line => (
            true,
            group.show_markers == Some(true) && !series.marker_none,
            series.smooth == Some(true),
        ),
        ChartKind::Scatter => {
            let style = group.scatter_style.unwrap_or_default();
            let lines = style.has_lines() && !series.line_hidden;
            let markers = style.has_markers() && !series.marker_none;
            (lines, markers, lines && series.smooth.unwrap_or(style.is_smooth()))
        },
        ChartKind::Area => (true, false, false),
        ChartKind::Bar | ChartKind::Pie | ChartKind::Doughnut => (false, false, false),
    };

    let hole = (kind == ChartKind::Doughnut)
        .then(|| f64::from(group.hole_size.unwrap_or(50).min(90)) / 100.0);

    SeriesData {
        name: series_name(series, workbook),
        kind,
        x,
        y,
        x_format,
        y_format,
        lines,
        markers,
        smooth,
        horizontal: kind == ChartKind::Bar && group.is_horizontal(),
        stacked: group.is_stacked(),
        hole,
    }
}

/// Literal name, else the cached text, else the first value of the reference.
fn series_name(series: &Series, workbook: &Workbook) -> Option<String> {
    match series.name.as_ref()? {
        SeriesName::Literal(text) => Some(text.clone()).filter(|t| !t.is_empty()),
        SeriesName::Reference { formula, cache } => {
            cache.clone().filter(|c| !c.is_empty()).or_else(|| {
                workbook
                    .resolve(formula)
                    .ok()?
                    .into_iter()
                    .find(|v| !v.is_empty())
                    .map(|v| v.to_string())
            })
        },
    }
}

fn axes_data(chart: &Chart, primary: &TypeGroup, first: Option<&SeriesData>) -> (AxisData, AxisData) {
    let mut axes: Vec<&Axis> = chart.plot_area.axes_of(primary).collect();
    if axes.is_empty() {
        axes = chart.plot_area.axes.iter().collect();
    }

    let mut x_axis = axes.iter().copied().find(|a| a.is_horizontal());
    let mut y_axis = axes.iter().copied().find(|a| !a.is_horizontal());
    if primary.is_horizontal() && axes.iter().all(|a| a.position.is_none()) {
        std::mem::swap(&mut x_axis, &mut y_axis);
    }

    let mut x = x_axis.map(axis_data).unwrap_or_default();
    let mut y = y_axis.map(axis_data).unwrap_or_default();

    if let Some(first) = first {
        let (x_format, y_format) = if first.horizontal {
            (&first.y_format, &first.x_format)
        } else {
            (&first.x_format, &first.y_format)
        };
        if x_format.is_some() {
            x.number_format = x_format.clone();
        }
        if y_format.is_some() {
            y.number_format = y_format.clone();
        }
    }

    (x, y)
}

fn axis_data(axis: &Axis) -> AxisData {
    let number_format = axis
        .number_format
        .as_ref()
        .filter(|f| !f.source_linked)
        .and_then(|f| normalize_format(Some(&f.format_code)));

    AxisData {
        title: if axis.deleted { None } else { axis.title.clone() },
        number_format,
        logarithmic: axis.scaling.is_logarithmic(),
        reversed: axis.scaling.is_reversed(),
        min: axis.scaling.min,
        max: axis.scaling.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(ChartKind::from_chart_type(ChartType::Bar3D), Some(ChartKind::Bar));
        assert_eq!(ChartKind::from_chart_type(ChartType::Radar), None);
        assert!(!ChartKind::Scatter.is_categorical());
        assert!(ChartKind::Doughnut.is_radial());
    }

    #[test]
    fn test_index_values() {
        assert_eq!(
            index_values(3, 1),
            vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)]
        );
        assert_eq!(index_values(2, 0), vec![CellValue::Int(0), CellValue::Int(1)]);
        assert!(index_values(0, 1).is_empty());
    }

    #[test]
    fn test_normalize_format() {
        assert_eq!(normalize_format(Some("General")), None);
        assert_eq!(normalize_format(Some(" ")), None);
        assert_eq!(normalize_format(None), None);
        assert_eq!(normalize_format(Some("0.00")).as_deref(), Some("0.00"));
    }
}
