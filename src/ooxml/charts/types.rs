//! Core chart types and enumerations.
//!
//! Each enumeration maps to the attribute values DrawingML uses, in both
//! directions: `xml_value` for display and `from_xml_value` for reading.

use phf::phf_map;
use serde::Serialize;
use std::fmt;

/// Chart type, one per plot-area type group element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Area chart (2D)
    Area,
    /// Area chart (3D)
    Area3D,
    /// Bar or column chart (2D)
    Bar,
    /// Bar or column chart (3D)
    Bar3D,
    /// Bubble chart
    Bubble,
    /// Doughnut chart
    Doughnut,
    /// Line chart
    Line,
    /// Line chart (3D)
    Line3D,
    /// Pie-of-pie or bar-of-pie chart
    OfPie,
    /// Pie chart
    Pie,
    /// Pie chart (3D)
    Pie3D,
    /// Radar chart
    Radar,
    /// Scatter (XY) chart
    Scatter,
    /// Stock chart
    Stock,
    /// Surface chart
    Surface,
    /// Surface chart (3D)
    Surface3D,
}

static CHART_ELEMENTS: phf::Map<&'static str, ChartType> = phf_map! {
    "areaChart" => ChartType::Area,
    "area3DChart" => ChartType::Area3D,
    "barChart" => ChartType::Bar,
    "bar3DChart" => ChartType::Bar3D,
    "bubbleChart" => ChartType::Bubble,
    "doughnutChart" => ChartType::Doughnut,
    "lineChart" => ChartType::Line,
    "line3DChart" => ChartType::Line3D,
    "ofPieChart" => ChartType::OfPie,
    "pieChart" => ChartType::Pie,
    "pie3DChart" => ChartType::Pie3D,
    "radarChart" => ChartType::Radar,
    "scatterChart" => ChartType::Scatter,
    "stockChart" => ChartType::Stock,
    "surfaceChart" => ChartType::Surface,
    "surface3DChart" => ChartType::Surface3D,
};

impl ChartType {
    /// Look up a type group by its element local name (`lineChart`, ...).
    pub fn from_element_name(name: &str) -> Option<Self> {
        CHART_ELEMENTS.get(name).copied()
    }

    /// Returns the XML element name for this chart type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area => "areaChart",
            Self::Area3D => "area3DChart",
            Self::Bar => "barChart",
            Self::Bar3D => "bar3DChart",
            Self::Bubble => "bubbleChart",
            Self::Doughnut => "doughnutChart",
            Self::Line => "lineChart",
            Self::Line3D => "line3DChart",
            Self::OfPie => "ofPieChart",
            Self::Pie => "pieChart",
            Self::Pie3D => "pie3DChart",
            Self::Radar => "radarChart",
            Self::Scatter => "scatterChart",
            Self::Stock => "stockChart",
            Self::Surface => "surfaceChart",
            Self::Surface3D => "surface3DChart",
        }
    }

    /// Chart kind with 2D and 3D variants folded together.
    ///
    /// This is the name matched against the allowed chart types.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Area | Self::Area3D => "area",
            Self::Bar | Self::Bar3D => "bar",
            Self::Bubble => "bubble",
            Self::Doughnut => "doughnut",
            Self::Line | Self::Line3D => "line",
            Self::OfPie => "ofPie",
            Self::Pie | Self::Pie3D => "pie",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::Stock => "stock",
            Self::Surface | Self::Surface3D => "surface",
        }
    }

    /// Returns true if this is a 3D chart type.
    #[inline]
    pub const fn is_3d(&self) -> bool {
        matches!(
            self,
            Self::Area3D | Self::Bar3D | Self::Line3D | Self::Pie3D | Self::Surface3D
        )
    }

    /// Returns true if this chart type plots against categories rather than X values.
    #[inline]
    pub const fn supports_categories(&self) -> bool {
        !matches!(self, Self::Scatter | Self::Bubble)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Axis type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// Category axis
    Category,
    /// Value axis
    Value,
    /// Date axis
    Date,
    /// Series axis (for 3D charts)
    Series,
}

impl AxisType {
    /// Axis type of an element local name (`catAx`, `valAx`, ...).
    pub fn from_element_name(name: &[u8]) -> Option<Self> {
        match name {
            b"catAx" => Some(Self::Category),
            b"valAx" => Some(Self::Value),
            b"dateAx" => Some(Self::Date),
            b"serAx" => Some(Self::Series),
            _ => None,
        }
    }

    /// Returns the XML element name for this axis type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category => "catAx",
            Self::Value => "valAx",
            Self::Date => "dateAx",
            Self::Series => "serAx",
        }
    }
}

/// Axis position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
}

impl AxisPosition {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "b" => Some(Self::Bottom),
            "l" => Some(Self::Left),
            "r" => Some(Self::Right),
            "t" => Some(Self::Top),
            _ => None,
        }
    }

    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
        }
    }

    /// Bottom and top axes run horizontally.
    #[inline]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }
}

/// Axis orientation (min to max or max to min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrientation {
    /// Min to max (normal)
    #[default]
    MinMax,
    /// Max to min (reversed)
    MaxMin,
}

impl AxisOrientation {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "minMax" => Some(Self::MinMax),
            "maxMin" => Some(Self::MaxMin),
            _ => None,
        }
    }

    /// Returns the XML value for this orientation.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::MinMax => "minMax",
            Self::MaxMin => "maxMin",
        }
    }
}

/// Bar/column direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars (columns)
    #[default]
    Column,
}

impl BarDirection {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "bar" => Some(Self::Bar),
            "col" => Some(Self::Column),
            _ => None,
        }
    }

    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "col",
        }
    }
}

/// Grouping of bar, line and area type groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    /// Clustered bars
    Clustered,
    /// Stacked series
    Stacked,
    /// 100% stacked series
    PercentStacked,
    /// Standard grouping
    Standard,
}

impl Grouping {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "clustered" => Some(Self::Clustered),
            "stacked" => Some(Self::Stacked),
            "percentStacked" => Some(Self::PercentStacked),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }

    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
            Self::Standard => "standard",
        }
    }

    #[inline]
    pub const fn is_stacked(&self) -> bool {
        matches!(self, Self::Stacked | Self::PercentStacked)
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    /// Bottom position
    Bottom,
    /// Left position
    Left,
    /// Right position
    Right,
    /// Top position
    Top,
    /// Top right corner
    TopRight,
}

impl LegendPosition {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "b" => Some(Self::Bottom),
            "l" => Some(Self::Left),
            "r" => Some(Self::Right),
            "t" => Some(Self::Top),
            "tr" => Some(Self::TopRight),
            _ => None,
        }
    }

    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::TopRight => "tr",
        }
    }
}

/// Scatter chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScatterStyle {
    /// Line with markers
    #[default]
    LineMarker,
    /// Line only
    Line,
    /// Markers only
    Marker,
    /// No line or markers
    None,
    /// Smooth line with markers
    SmoothMarker,
    /// Smooth line only
    Smooth,
}

impl ScatterStyle {
    pub fn from_xml_value(value: &str) -> Option<Self> {
        match value {
            "lineMarker" => Some(Self::LineMarker),
            "line" => Some(Self::Line),
            "marker" => Some(Self::Marker),
            "none" => Some(Self::None),
            "smoothMarker" => Some(Self::SmoothMarker),
            "smooth" => Some(Self::Smooth),
            _ => None,
        }
    }

    /// Returns the XML value for this scatter style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::LineMarker => "lineMarker",
            Self::Line => "line",
            Self::Marker => "marker",
            Self::None => "none",
            Self::SmoothMarker => "smoothMarker",
            Self::Smooth => "smooth",
        }
    }

    /// Whether the style draws connecting lines.
    #[inline]
    pub const fn has_lines(&self) -> bool {
        matches!(self, Self::LineMarker | Self::Line | Self::SmoothMarker | Self::Smooth)
    }

    /// Whether the style draws markers.
    ///
    /// Excel writes `lineMarker` for marker-only charts too and hides the
    /// line per series, so `None` is the only style without markers.
    #[inline]
    pub const fn has_markers(&self) -> bool {
        !matches!(self, Self::Line | Self::Smooth | Self::None)
    }

    #[inline]
    pub const fn is_smooth(&self) -> bool {
        matches!(self, Self::SmoothMarker | Self::Smooth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_lookup() {
        assert_eq!(ChartType::from_element_name("lineChart"), Some(ChartType::Line));
        assert_eq!(ChartType::from_element_name("bar3DChart"), Some(ChartType::Bar3D));
        assert_eq!(ChartType::from_element_name("plotArea"), None);
        assert_eq!(ChartType::Bar3D.kind(), "bar");
        assert_eq!(ChartType::Doughnut.to_string(), "doughnut");
        assert!(!ChartType::Scatter.supports_categories());
    }

    #[test]
    fn test_attribute_values() {
        for value in ["b", "l", "r", "t"] {
            assert_eq!(AxisPosition::from_xml_value(value).map(|p| p.xml_value()), Some(value));
        }
        assert_eq!(Grouping::from_xml_value("percentStacked"), Some(Grouping::PercentStacked));
        assert!(Grouping::Stacked.is_stacked());
        assert!(!Grouping::Clustered.is_stacked());
        assert_eq!(BarDirection::from_xml_value("bar"), Some(BarDirection::Bar));
        assert!(ScatterStyle::SmoothMarker.is_smooth());
        assert!(!ScatterStyle::Marker.has_lines());
    }
}
