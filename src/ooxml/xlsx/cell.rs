//! Cell values and A1 cell addresses.

use crate::ooxml::error::{OoxmlError, Result};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Error value such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Empty cells and blank strings carry no value.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text of a string cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of number cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Short name of the value's type, as reported for outputs.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "none",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "str",
            CellValue::Error(_) => "error",
        }
    }

    /// Parse the text of a numeric `<v>` element, preferring integers.
    pub fn from_number_text(text: &str) -> CellValue {
        if let Ok(int_val) = atoi_simd::parse::<i64>(text.as_bytes()) {
            CellValue::Int(int_val)
        } else if let Ok(float_val) = fast_float2::parse::<f64, _>(text) {
            CellValue::Float(float_val)
        } else {
            CellValue::String(text.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(s) | CellValue::Error(s) => f.write_str(s),
        }
    }
}

/// Cells serialize to plain JSON scalars; empty, error and non-finite
/// cells become `null` so Plotly leaves a gap.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty | CellValue::Error(_) => serializer.serialize_none(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            CellValue::Float(_) => serializer.serialize_none(),
            CellValue::String(s) => serializer.serialize_str(s),
        }
    }
}

/// A 1-based cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an A1 address; `$` anchors are ignored and letters may be lowercase.
    pub fn parse(reference: &str) -> Result<Self> {
        let bytes = reference.as_bytes();
        let mut col_num = 0u32;
        let mut i = 0;

        if bytes.first() == Some(&b'$') {
            i += 1;
        }
        let col_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
            col_num = col_num
                .checked_mul(26)
                .and_then(|n| n.checked_add((bytes[i].to_ascii_uppercase() - b'A' + 1) as u32))
                .ok_or_else(|| OoxmlError::InvalidReference(reference.to_string()))?;
            i += 1;
        }
        if i == col_start {
            return Err(OoxmlError::InvalidReference(reference.to_string()));
        }
        if bytes.get(i) == Some(&b'$') {
            i += 1;
        }

        let row_num: u32 = atoi_simd::parse(&bytes[i..])
            .map_err(|_| OoxmlError::InvalidReference(reference.to_string()))?;
        if row_num == 0 || row_num > MAX_ROWS || col_num > MAX_COLUMNS {
            return Err(OoxmlError::InvalidReference(reference.to_string()));
        }

        Ok(Self::new(row_num, col_num))
    }
}

/// Last column of a worksheet (`XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

/// Last row of a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Convert column number to Excel column letters (e.g., 1 -> "A", 27 -> "AA").
pub fn column_to_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut col = col;

    while col > 0 {
        col -= 1;
        letters.push((col % 26) as u8 + b'A');
        col /= 26;
    }
    letters.reverse();

    String::from_utf8(letters).unwrap_or_default()
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letters(self.col), self.row)
    }
}
