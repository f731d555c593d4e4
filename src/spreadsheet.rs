//! The spreadsheet calculation a parser reads its workbook from.
//!
//! Chart definitions come from the template workbook. The data they plot
//! comes from the evaluated workbook, whose formulas have been recalculated
//! with the current inputs by whatever engine implements
//! [`SpreadsheetCalculation`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::ooxml::xlsx::cell::CellValue;

/// Result of evaluating a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpreadsheetResult {
    /// The filled `.xlsx` bytes
    pub file: Vec<u8>,
    /// Named output values
    pub values: BTreeMap<String, CellValue>,
}

/// A spreadsheet that can be evaluated.
pub trait SpreadsheetCalculation: Send + Sync {
    /// The workbook the charts are defined in.
    fn template(&self) -> Result<Cow<'_, [u8]>>;

    /// Recalculate the workbook and return the filled file and output values.
    fn evaluate(&self) -> Result<SpreadsheetResult>;
}

/// A workbook whose cached values are already current.
///
/// Evaluating returns the same bytes together with a fixed set of values.
#[derive(Debug, Clone, Default)]
pub struct StaticSpreadsheet {
    file: Vec<u8>,
    values: BTreeMap<String, CellValue>,
}

impl StaticSpreadsheet {
    pub fn new(file: impl Into<Vec<u8>>) -> Self {
        Self {
            file: file.into(),
            values: BTreeMap::new(),
        }
    }

    /// Read the workbook from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(std::fs::read(path)?))
    }

    /// Set the output values evaluation reports.
    pub fn with_values<I, K>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, CellValue)>,
        K: Into<String>,
    {
        self.values = values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

impl SpreadsheetCalculation for StaticSpreadsheet {
    fn template(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(&self.file))
    }

    fn evaluate(&self) -> Result<SpreadsheetResult> {
        Ok(SpreadsheetResult {
            file: self.file.clone(),
            values: self.values.clone(),
        })
    }
}
