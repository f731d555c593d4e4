//! Worksheet cell storage for Excel files.

use std::collections::BTreeMap;

use super::cell::{CellRef, CellValue};

static EMPTY: CellValue = CellValue::Empty;

/// Information about a worksheet entry of the workbook.
#[derive(Debug, Clone)]
pub struct WorksheetInfo {
    /// Worksheet name
    pub name: String,
    /// Relationship ID for the worksheet
    pub relationship_id: String,
    /// Sheet ID
    pub sheet_id: u32,
    /// Index in the workbook's `<sheets>` list, which `localSheetId` refers to
    pub position: usize,
    /// Whether the sheet is a chartsheet
    pub is_chartsheet: bool,
}

/// A loaded worksheet: its name and the non-empty cells.
#[derive(Debug, Clone)]
pub struct Worksheet {
    info: WorksheetInfo,
    cells: BTreeMap<CellRef, CellValue>,
}

impl Worksheet {
    pub fn new(info: WorksheetInfo, cells: BTreeMap<CellRef, CellValue>) -> Self {
        Self { info, cells }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    #[inline]
    pub fn info(&self) -> &WorksheetInfo {
        &self.info
    }

    /// Value at `at`, `Empty` when the cell is absent.
    pub fn cell(&self, at: CellRef) -> &CellValue {
        self.cells.get(&at).unwrap_or(&EMPTY)
    }

    /// Value at a 1-based row and column.
    #[inline]
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        self.cell(CellRef::new(row, col))
    }

    /// Last row holding a value, 0 for an empty sheet.
    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|c| c.row).max().unwrap_or(0)
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &CellValue)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Worksheet {
        let mut cells = BTreeMap::new();
        cells.insert(CellRef::new(1, 1), CellValue::String("name".into()));
        cells.insert(CellRef::new(4, 2), CellValue::Float(1.5));
        Worksheet::new(
            WorksheetInfo {
                name: "Data".into(),
                relationship_id: "rId1".into(),
                sheet_id: 1,
                position: 0,
                is_chartsheet: false,
            },
            cells,
        )
    }

    #[test]
    fn test_cell_lookup() {
        let ws = sheet();
        assert_eq!(ws.name(), "Data");
        assert_eq!(ws.value(4, 2), &CellValue::Float(1.5));
        assert_eq!(ws.value(2, 2), &CellValue::Empty);
        assert_eq!(ws.max_row(), 4);
        assert_eq!(ws.cell_count(), 2);
    }
}
