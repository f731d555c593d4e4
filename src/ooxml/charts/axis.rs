//! Chart axis models.

use crate::ooxml::charts::types::{AxisOrientation, AxisPosition, AxisType};

/// Number format of an axis (`c:numFmt`).
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Format code such as `0.00%`
    pub format_code: String,
    /// Whether the format follows the source cells
    pub source_linked: bool,
}

/// Axis scaling (`c:scaling`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scaling {
    pub orientation: AxisOrientation,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Base of a logarithmic axis
    pub log_base: Option<f64>,
}

impl Scaling {
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.orientation == AxisOrientation::MaxMin
    }

    #[inline]
    pub fn is_logarithmic(&self) -> bool {
        self.log_base.is_some()
    }
}

/// A chart axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub axis_type: AxisType,
    /// Axis ID (`c:axId`), referenced by type groups
    pub id: u32,
    /// ID of the axis this one crosses
    pub cross_axis: Option<u32>,
    pub position: Option<AxisPosition>,
    /// Hidden axis (`c:delete`)
    pub deleted: bool,
    pub title: Option<String>,
    pub number_format: Option<NumberFormat>,
    pub scaling: Scaling,
}

impl Axis {
    /// Create a new axis.
    #[inline]
    pub fn new(axis_type: AxisType, id: u32) -> Self {
        Self {
            axis_type,
            id,
            cross_axis: None,
            position: None,
            deleted: false,
            title: None,
            number_format: None,
            scaling: Scaling::default(),
        }
    }

    /// Whether the axis is drawn along the bottom or top edge.
    ///
    /// Axes without a position fall back to the usual layout: category and
    /// date axes horizontal, value axes vertical.
    pub fn is_horizontal(&self) -> bool {
        match self.position {
            Some(position) => position.is_horizontal(),
            None => matches!(self.axis_type, AxisType::Category | AxisType::Date),
        }
    }
}
