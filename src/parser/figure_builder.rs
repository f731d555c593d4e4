//! Plotly figure construction from extracted chart data.

use crate::config::ParserConfig;
use crate::ooxml::charts::Grouping;
use crate::plotly::{
    AutoRange, Axis, AxisScale, BarMode, BarTrace, Figure, Fill, Layout, Line, LineShape, Mode,
    Orientation, PieTrace, ScatterTrace, Title, Trace,
};
use crate::plotly::format::to_d3_format;

use super::chart_data::{AxisData, ChartData, ChartKind, SeriesData};

/// Build the figure of a chart.
pub fn build_figure(data: &ChartData, config: &ParserConfig) -> Figure {
    let mut figure = Figure::new();
    for series in &data.series {
        figure.add_trace(series_trace(series));
    }

    let mut layout = Layout {
        title: Some(Title::new(data.title.as_str())),
        showlegend: Some(data.show_legend),
        ..Layout::default()
    };
    if !data.kind.is_radial() {
        layout.xaxis = layout_axis(&data.x_axis, config);
        layout.yaxis = layout_axis(&data.y_axis, config);
    }
    if data.kind == ChartKind::Bar {
        layout.barmode = match data.grouping {
            Some(Grouping::Stacked) => Some(BarMode::Stack),
            Some(Grouping::PercentStacked) => Some(BarMode::Relative),
            _ => None,
        };
    }
    figure.layout = layout;
    figure
}

fn series_trace(series: &SeriesData) -> Trace {
    let name = series.name.clone();
    match series.kind {
        ChartKind::Line | ChartKind::Scatter => ScatterTrace {
            x: series.x.clone(),
            y: series.y.clone(),
            mode: Some(Mode::from_flags(series.lines, series.markers)),
            name,
            line: series.smooth.then_some(Line {
                shape: LineShape::Spline,
            }),
            ..ScatterTrace::default()
        }
        .into(),
        ChartKind::Area => ScatterTrace {
            x: series.x.clone(),
            y: series.y.clone(),
            mode: Some(Mode::Lines),
            name,
            fill: Some(if series.stacked { Fill::ToNextY } else { Fill::ToZeroY }),
            stackgroup: series.stacked.then(|| "stack".to_string()),
            ..ScatterTrace::default()
        }
        .into(),
        ChartKind::Bar if series.horizontal => BarTrace {
            x: series.y.clone(),
            y: series.x.clone(),
            name,
            orientation: Some(Orientation::Horizontal),
        }
        .into(),
        ChartKind::Bar => BarTrace {
            x: series.x.clone(),
            y: series.y.clone(),
            name,
            orientation: None,
        }
        .into(),
        ChartKind::Pie | ChartKind::Doughnut => PieTrace {
            labels: series.x.clone(),
            values: series.y.clone(),
            name,
            hole: series.hole,
        }
        .into(),
    }
}

/// Layout axis; `None` when no option is set.
fn layout_axis(axis: &AxisData, config: &ParserConfig) -> Option<Axis> {
    let mut out = Axis {
        title: axis.title.as_deref().map(Title::new),
        tickformat: axis.number_format.as_deref().and_then(|code| {
            if config.translate_number_formats {
                to_d3_format(code)
            } else {
                Some(code.to_string())
            }
        }),
        ..Axis::default()
    };

    if axis.logarithmic {
        out.scale = Some(AxisScale::Log);
    }

    // Plotly expects log axis ranges as exponents.
    let to_range = |v: f64| {
        if axis.logarithmic {
            (v > 0.0).then(|| v.log10())
        } else {
            Some(v)
        }
    };
    match (axis.min.and_then(to_range), axis.max.and_then(to_range)) {
        (Some(min), Some(max)) => {
            out.range = Some(if axis.reversed { [max, min] } else { [min, max] });
        },
        _ if axis.reversed => out.autorange = Some(AutoRange::Reversed),
        _ => {},
    }

    (!out.is_empty()).then_some(out)
}
