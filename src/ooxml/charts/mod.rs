//! Chart support for Office Open XML formats.
//!
//! Reads DrawingML chart parts (`c:chartSpace`) into a typed model:
//!
//! - Core chart types and enumerations
//! - Series with their category, value and X/Y data sources
//! - Plot area type groups, axes and legend
//!
//! Every chart type DrawingML defines is read. Which of them can be
//! rendered is decided by the caller.
//!
//! # Example
//!
//! ```rust
//! use xlcharts::ooxml::charts::{parse_chart_space, ChartType};
//!
//! let xml = br#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
//!   <c:chart><c:plotArea><c:pieChart/></c:plotArea></c:chart>
//! </c:chartSpace>"#;
//! let chart = parse_chart_space(xml)?;
//! assert_eq!(chart.chart_type(), Some(ChartType::Pie));
//! assert!(chart.title.is_none());
//! # Ok::<(), xlcharts::ooxml::OoxmlError>(())
//! ```

pub mod axis;
pub mod chart;
pub mod legend;
pub mod models;
pub mod plot_area;
pub mod reader;
pub mod series;
pub mod types;

pub use axis::{Axis, NumberFormat, Scaling};
pub use chart::Chart;
pub use legend::Legend;
pub use models::{DataKind, DataSource, SeriesName};
pub use plot_area::{PlotArea, TypeGroup};
pub use reader::parse_chart_space;
pub use series::Series;
pub use types::{
    AxisOrientation, AxisPosition, AxisType, BarDirection, ChartType, Grouping, LegendPosition,
    ScatterStyle,
};
