//! Chart legend models.

use crate::ooxml::charts::types::LegendPosition;

/// Chart legend configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Legend position
    pub position: LegendPosition,
    /// Overlay on chart area
    pub overlay: bool,
}

impl Legend {
    /// Create a new legend with default settings.
    #[inline]
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            overlay: false,
        }
    }
}

impl Default for Legend {
    #[inline]
    fn default() -> Self {
        Self::new(LegendPosition::Right)
    }
}
