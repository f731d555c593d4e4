//! Chart series models.

use crate::ooxml::charts::models::{DataSource, SeriesName};

/// A data series of a type group (`c:ser`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Series index (`c:idx`)
    pub index: u32,
    /// Plot order (`c:order`)
    pub order: u32,
    /// Series name
    pub name: Option<SeriesName>,
    /// Category data (`c:cat`)
    pub categories: Option<DataSource>,
    /// Values (`c:val`)
    pub values: Option<DataSource>,
    /// X values of scatter series (`c:xVal`)
    pub x_values: Option<DataSource>,
    /// Y values of scatter series (`c:yVal`)
    pub y_values: Option<DataSource>,
    /// Line of the series is not drawn (`c:spPr/a:ln/a:noFill`)
    pub line_hidden: bool,
    /// Marker symbol is `none`
    pub marker_none: bool,
    /// Smoothed line (`c:smooth`)
    pub smooth: Option<bool>,
}

impl Series {
    /// Create a new series.
    #[inline]
    pub fn new(index: u32, order: u32) -> Self {
        Self {
            index,
            order,
            ..Self::default()
        }
    }

    /// Source plotted along the category or X axis.
    pub fn x_source(&self, categorical: bool) -> Option<&DataSource> {
        let source = if categorical {
            self.categories.as_ref()
        } else {
            self.x_values.as_ref()
        };
        source.filter(|s| !s.is_missing())
    }

    /// Source plotted along the value or Y axis.
    pub fn y_source(&self, categorical: bool) -> Option<&DataSource> {
        let source = if categorical {
            self.values.as_ref()
        } else {
            self.y_values.as_ref()
        };
        source.filter(|s| !s.is_missing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::models::DataKind;

    #[test]
    fn test_sources_by_chart_family() {
        let mut series = Series::new(0, 0);
        series.categories = Some(DataSource::from_ref(DataKind::String, "S!A1:A3"));
        series.values = Some(DataSource::from_ref(DataKind::Number, "S!B1:B3"));
        series.y_values = Some(DataSource::default());

        assert!(series.x_source(true).is_some());
        assert!(series.y_source(true).is_some());
        assert!(series.x_source(false).is_none());
        // Present but empty counts as missing
        assert!(series.y_source(false).is_none());
    }
}
