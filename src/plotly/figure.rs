//! Plotly figure model.
//!
//! Serializes to the JSON accepted by `Plotly.newPlot` and by
//! `plotly.io.from_json`. Unset options are left out of the output.

use serde::Serialize;

use crate::ooxml::xlsx::cell::CellValue;

/// A Plotly figure: traces plus layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_trace(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }

    /// Compact Plotly JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented Plotly JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// One trace; the variant becomes the Plotly `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Scatter(t) => t.name.as_deref(),
            Trace::Bar(t) => t.name.as_deref(),
            Trace::Pie(t) => t.name.as_deref(),
        }
    }
}

impl From<ScatterTrace> for Trace {
    fn from(trace: ScatterTrace) -> Self {
        Trace::Scatter(trace)
    }
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

impl From<PieTrace> for Trace {
    fn from(trace: PieTrace) -> Self {
        Trace::Pie(trace)
    }
}

/// Drawing mode of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "none")]
    None,
}

impl Mode {
    pub fn from_flags(lines: bool, markers: bool) -> Self {
        match (lines, markers) {
            (true, true) => Mode::LinesMarkers,
            (true, false) => Mode::Lines,
            (false, true) => Mode::Markers,
            (false, false) => Mode::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    Linear,
    Spline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub shape: LineShape,
}

/// Area fill of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    ToZeroY,
    ToNextY,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<CellValue>,
    pub y: Vec<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<CellValue>,
    pub y: Vec<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<CellValue>,
    pub values: Vec<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fraction of the radius cut out for doughnuts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
    Category,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRange {
    Reversed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scale: Option<AxisScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<AutoRange>,
}

impl Axis {
    /// An axis with no options set is left out of the layout.
    pub fn is_empty(&self) -> bool {
        self == &Axis::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
    Stack,
    Relative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
}
