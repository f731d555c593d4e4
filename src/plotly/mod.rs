//! Plotly figure objects.
//!
//! A small typed subset of the Plotly figure schema: the trace types and
//! layout options Excel charts map onto.

pub mod figure;
pub mod format;

pub use figure::{
    AutoRange, Axis, AxisScale, BarMode, BarTrace, Figure, Fill, Layout, Line, LineShape, Mode,
    Orientation, PieTrace, ScatterTrace, Title, Trace,
};
pub use format::to_d3_format;
