//! Main chart structure.
//!
//! Combines the title, plot area and legend of one chart part.

use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::plot_area::{PlotArea, TypeGroup};
use crate::ooxml::charts::types::ChartType;

/// A parsed `c:chartSpace`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    /// Title text; `None` for untitled charts
    pub title: Option<String>,
    /// Auto-generated title deleted
    pub auto_title_deleted: bool,
    /// Plot area with type groups and axes
    pub plot_area: PlotArea,
    /// Legend, when the chart shows one
    pub legend: Option<Legend>,
    /// Only plot visible cells
    pub plot_visible_only: bool,
    /// Dates use the 1904 epoch
    pub date_1904: bool,
}

impl Chart {
    /// Create a new empty chart.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The first type group; it decides the kind of the whole chart.
    #[inline]
    pub fn primary_group(&self) -> Option<&TypeGroup> {
        self.plot_area.type_groups.first()
    }

    #[inline]
    pub fn chart_type(&self) -> Option<ChartType> {
        self.primary_group().map(|g| g.chart_type)
    }

    /// Total number of series over all type groups.
    pub fn series_count(&self) -> usize {
        self.plot_area.type_groups.iter().map(|g| g.series.len()).sum()
    }
}
