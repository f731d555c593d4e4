//! Chart data models.
//!
//! Category and value data of a series point at worksheet cells through a
//! formula and carry a cache of the values Excel last displayed. Literal
//! sources hold their points inline and have no formula.

use crate::ooxml::xlsx::cell::CellValue;

/// Shape of the data a source holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataKind {
    /// `strRef` / `strLit`
    String,
    /// `numRef` / `numLit`
    #[default]
    Number,
    /// `multiLvlStrRef`, hierarchical category labels
    MultiLevel,
}

/// Category, value, X or Y data of a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSource {
    pub kind: DataKind,
    /// Reference formula such as `Sheet1!$A$2:$A$10`
    pub formula: Option<String>,
    /// Number format of the cached points (`c:formatCode`)
    pub format_code: Option<String>,
    /// Cached or literal points indexed by `idx`; gaps are `Empty`
    pub points: Vec<CellValue>,
    /// Whether the points are a literal (`strLit`/`numLit`)
    pub literal: bool,
}

impl DataSource {
    /// Create a data source referencing cells.
    #[inline]
    pub fn from_ref(kind: DataKind, formula: impl Into<String>) -> Self {
        Self {
            kind,
            formula: Some(formula.into()),
            ..Self::default()
        }
    }

    /// Create a literal data source.
    #[inline]
    pub fn from_points(kind: DataKind, points: Vec<CellValue>) -> Self {
        Self {
            kind,
            points,
            literal: true,
            ..Self::default()
        }
    }

    /// Set the format code.
    #[inline]
    pub fn with_format_code(mut self, format_code: impl Into<String>) -> Self {
        self.format_code = Some(format_code.into());
        self
    }

    /// Add cached points.
    #[inline]
    pub fn with_cached_points(mut self, points: Vec<CellValue>) -> Self {
        self.points = points;
        self
    }

    /// A source with neither a formula nor points carries no data.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.formula.as_deref().is_none_or(|f| f.trim().is_empty()) && self.points.is_empty()
    }
}

/// Name of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesName {
    /// Literal text (`c:tx/c:v`)
    Literal(String),
    /// Cell reference with the cached text (`c:tx/c:strRef`)
    Reference {
        formula: String,
        cache: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sources() {
        assert!(DataSource::default().is_missing());
        assert!(DataSource::from_ref(DataKind::Number, "  ").is_missing());
        assert!(!DataSource::from_ref(DataKind::Number, "Sheet1!$A$1").is_missing());
        let literal = DataSource::from_points(DataKind::Number, vec![CellValue::Int(3)]);
        assert!(!literal.is_missing());
        assert!(literal.literal);
    }
}
