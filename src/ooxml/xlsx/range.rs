//! Range references as written in chart formulas (`c:f`).
//!
//! Chart series point at their data with formulas such as
//! `Sheet1!$B$2:$B$10`, `'Load cases'!$A$2:$A$4` or a union of areas
//! `(Sheet1!$A$2,Sheet1!$A$5:$A$6)`. Areas without a sheet prefix inherit the
//! sheet of the preceding area.

use smallvec::SmallVec;

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xlsx::cell::CellRef;

/// One rectangular block of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub sheet: Option<String>,
    pub start: CellRef,
    pub end: CellRef,
}

impl Area {
    /// Cells of the area in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        let (top, bottom) = min_max(self.start.row, self.end.row);
        let (left, right) = min_max(self.start.col, self.end.col);
        (top..=bottom).flat_map(move |row| (left..=right).map(move |col| CellRef::new(row, col)))
    }

    /// Number of cells in the area.
    pub fn len(&self) -> usize {
        let rows = self.start.row.abs_diff(self.end.row) as usize + 1;
        let cols = self.start.col.abs_diff(self.end.col) as usize + 1;
        rows * cols
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[inline]
fn min_max(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A parsed chart data reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRef {
    pub areas: SmallVec<[Area; 2]>,
}

impl RangeRef {
    /// Parse a chart formula into its areas.
    pub fn parse(formula: &str) -> Result<Self> {
        let mut text = formula.trim();
        text = text.strip_prefix('=').unwrap_or(text).trim();
        if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            text = inner;
        }
        if text.is_empty() {
            return Err(OoxmlError::InvalidReference(formula.to_string()));
        }

        let mut areas: SmallVec<[Area; 2]> = SmallVec::new();
        for piece in split_top_level(text) {
            let (sheet, cells) = split_sheet(piece.trim())
                .ok_or_else(|| OoxmlError::InvalidReference(formula.to_string()))?;
            let sheet = sheet.or_else(|| areas.last().and_then(|a| a.sheet.clone()));

            let (start, end) = match memchr::memchr(b':', cells.as_bytes()) {
                Some(pos) => (CellRef::parse(&cells[..pos])?, CellRef::parse(&cells[pos + 1..])?),
                None => {
                    let cell = CellRef::parse(cells)?;
                    (cell, cell)
                },
            };
            areas.push(Area { sheet, start, end });
        }

        Ok(Self { areas })
    }

    /// Sheet of the first area that names one.
    pub fn sheet(&self) -> Option<&str> {
        self.areas.iter().find_map(|a| a.sheet.as_deref())
    }

    /// Total number of cells over all areas.
    pub fn len(&self) -> usize {
        self.areas.iter().map(Area::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Split on commas that are not inside a quoted sheet name.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'\'' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                pieces.push(&text[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Split `sheet!cells`, unquoting `'My ''quoted'' sheet'`.
fn split_sheet(piece: &str) -> Option<(Option<String>, &str)> {
    if let Some(rest) = piece.strip_prefix('\'') {
        let mut name = String::new();
        let mut chars = rest.char_indices().peekable();
        while let Some((i, ch)) = chars.next() {
            if ch == '\'' {
                if matches!(chars.peek(), Some((_, '\''))) {
                    name.push('\'');
                    chars.next();
                    continue;
                }
                let after = &rest[i + 1..];
                return after.strip_prefix('!').map(|cells| (Some(name), cells));
            }
            name.push(ch);
        }
        return None;
    }

    match memchr::memrchr(b'!', piece.as_bytes()) {
        Some(pos) => Some((Some(piece[..pos].to_string()), &piece[pos + 1..])),
        None => Some((None, piece)),
    }
}
