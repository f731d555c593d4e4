//! Chart plot area models.
//!
//! A plot area holds one or more type groups (a combo chart has several)
//! and the axes they plot against.

use crate::ooxml::charts::axis::Axis;
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::types::{BarDirection, ChartType, Grouping, ScatterStyle};

/// A group of series with the same chart type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGroup {
    pub chart_type: ChartType,
    /// Bar direction of bar groups (`c:barDir`)
    pub bar_direction: Option<BarDirection>,
    /// Grouping of bar, line and area groups
    pub grouping: Option<Grouping>,
    /// Style of scatter groups
    pub scatter_style: Option<ScatterStyle>,
    /// Marker flag of line groups (`c:marker`)
    pub show_markers: Option<bool>,
    /// Hole size of doughnut groups, in percent
    pub hole_size: Option<u32>,
    /// Vary colors by point
    pub vary_colors: bool,
    /// Series in this group
    pub series: Vec<Series>,
    /// IDs of the axes the group plots against
    pub axis_ids: Vec<u32>,
}

impl TypeGroup {
    /// Create an empty type group.
    #[inline]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            bar_direction: None,
            grouping: None,
            scatter_style: None,
            show_markers: None,
            hole_size: None,
            vary_colors: false,
            series: Vec::new(),
            axis_ids: Vec::new(),
        }
    }

    /// Add a series.
    #[inline]
    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Horizontal bars.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.bar_direction == Some(BarDirection::Bar)
    }

    #[inline]
    pub fn is_stacked(&self) -> bool {
        self.grouping.is_some_and(|g| g.is_stacked())
    }

    /// Series sorted by plot order.
    pub fn ordered_series(&self) -> Vec<&Series> {
        let mut series: Vec<&Series> = self.series.iter().collect();
        series.sort_by_key(|s| s.order);
        series
    }
}

/// Plot area containing chart data and axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotArea {
    /// Chart type groups, in document order
    pub type_groups: Vec<TypeGroup>,
    /// All axes in the plot area
    pub axes: Vec<Axis>,
}

impl PlotArea {
    /// Create a new plot area.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis with the given ID.
    pub fn axis(&self, id: u32) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id == id)
    }

    /// Axes of a type group, in the group's `axId` order.
    pub fn axes_of<'a>(&'a self, group: &'a TypeGroup) -> impl Iterator<Item = &'a Axis> + 'a {
        group.axis_ids.iter().filter_map(move |id| self.axis(*id))
    }
}
