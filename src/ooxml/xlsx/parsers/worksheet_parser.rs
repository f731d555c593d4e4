//! Parser for Excel worksheet XML files.
//!
//! Extracts cell values from `<sheetData>` and the relationship IDs of
//! `<drawing>` elements. Formulas are ignored: the cached `<v>` value is what
//! a chart displays.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ooxml::error::Result;
use crate::ooxml::xlsx::cell::{CellRef, CellValue};
use crate::ooxml::xlsx::shared_strings::SharedStrings;

/// Cell data and drawing links of one worksheet part.
#[derive(Debug, Default)]
pub struct ParsedWorksheet {
    pub cells: BTreeMap<CellRef, CellValue>,
    pub drawing_ids: Vec<String>,
}

/// Per-cell parse state while inside a `<c>` element.
struct PendingCell {
    at: CellRef,
    cell_type: Option<String>,
    value: Option<String>,
    inline: Option<String>,
}

/// Parse worksheet (or chartsheet) XML.
pub fn parse_worksheet_xml(xml: &[u8], shared_strings: &SharedStrings) -> Result<ParsedWorksheet> {
    let mut parsed = ParsedWorksheet::default();
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut row = 0u32;
    let mut next_col = 1u32;
    let mut cell: Option<PendingCell> = None;
    let mut in_value = false;
    let mut in_inline_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"row" => {
                    row = row_number(e)?.unwrap_or(row + 1);
                    next_col = 1;
                },
                b"c" => {
                    let pending = start_cell(e, row, next_col)?;
                    next_col = pending.at.col + 1;
                    cell = Some(pending);
                },
                b"v" => in_value = cell.is_some(),
                b"t" => in_inline_text = cell.is_some(),
                b"drawing" => {
                    if let Some(id) = relationship_id(e)? {
                        parsed.drawing_ids.push(id);
                    }
                },
                _ => {},
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"row" => {
                    row = row_number(e)?.unwrap_or(row + 1);
                    next_col = 1;
                },
                b"c" => {
                    // Styled but valueless cell
                    let pending = start_cell(e, row, next_col)?;
                    next_col = pending.at.col + 1;
                },
                b"drawing" => {
                    if let Some(id) = relationship_id(e)? {
                        parsed.drawing_ids.push(id);
                    }
                },
                _ => {},
            },
            Event::Text(e) => {
                if let Some(pending) = cell.as_mut() {
                    if in_value {
                        pending.value.get_or_insert_with(String::new).push_str(&e.unescape()?);
                    } else if in_inline_text {
                        pending.inline.get_or_insert_with(String::new).push_str(&e.unescape()?);
                    }
                }
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                b"t" => in_inline_text = false,
                b"c" => {
                    if let Some(pending) = cell.take() {
                        let value = resolve_value(&pending, shared_strings);
                        if !matches!(value, CellValue::Empty) {
                            parsed.cells.insert(pending.at, value);
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(parsed)
}

fn row_number(e: &BytesStart) -> Result<Option<u32>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"r" {
            return Ok(atoi_simd::parse(&attr.value).ok());
        }
    }
    Ok(None)
}

fn start_cell(e: &BytesStart, row: u32, next_col: u32) -> Result<PendingCell> {
    let mut pending = PendingCell {
        at: CellRef::new(row.max(1), next_col),
        cell_type: None,
        value: None,
        inline: None,
    };
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"r" => pending.at = CellRef::parse(&attr.unescape_value()?)?,
            b"t" => pending.cell_type = Some(attr.unescape_value()?.into_owned()),
            _ => {},
        }
    }
    Ok(pending)
}

fn relationship_id(e: &BytesStart) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == b"id" && attr.key.prefix().is_some() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn resolve_value(cell: &PendingCell, shared_strings: &SharedStrings) -> CellValue {
    match (cell.cell_type.as_deref(), cell.value.as_deref()) {
        (Some("inlineStr"), _) => cell
            .inline
            .clone()
            .map(CellValue::String)
            .unwrap_or(CellValue::Empty),
        (Some("s"), Some(v)) => atoi_simd::parse::<usize>(v.trim().as_bytes())
            .ok()
            .and_then(|idx| shared_strings.get(idx))
            .map(|s| CellValue::String(s.to_string()))
            .unwrap_or(CellValue::Empty),
        (Some("str"), Some(v)) | (Some("d"), Some(v)) => CellValue::String(v.to_string()),
        (Some("b"), Some(v)) => match v.trim() {
            "1" | "true" => CellValue::Bool(true),
            "0" | "false" => CellValue::Bool(false),
            other => CellValue::Error(format!("invalid boolean {}", other)),
        },
        (Some("e"), Some(v)) => CellValue::Error(v.to_string()),
        (_, Some(v)) => CellValue::from_number_text(v.trim()),
        (_, None) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sst() -> SharedStrings {
        SharedStrings::parse(b"<sst><si><t>Mon</t></si><si><t>Tue</t></si></sst>").unwrap()
    }

    #[test]
    fn test_parse_cell_types() {
        let xml = br#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheetData>
    <row r="1"><c r="A1" t="s"><v>1</v></c><c r="B1"><v>10</v></c><c r="C1"><v>2.5</v></c></row>
    <row r="3"><c r="A3" t="b"><v>1</v></c><c r="B3" t="str"><f>A1&amp;"x"</f><v>Tuex</v></c><c r="C3" t="e"><v>#DIV/0!</v></c></row>
    <row r="4"><c r="A4" t="inlineStr"><is><t>inline &amp; text</t></is></c><c r="B4" s="1"/></row>
  </sheetData>
  <drawing r:id="rId7"/>
</worksheet>"#;
        let parsed = parse_worksheet_xml(xml, &sst()).unwrap();
        let get = |r: &str| parsed.cells.get(&CellRef::parse(r).unwrap()).cloned();

        assert_eq!(get("A1"), Some(CellValue::String("Tue".into())));
        assert_eq!(get("B1"), Some(CellValue::Int(10)));
        assert_eq!(get("C1"), Some(CellValue::Float(2.5)));
        assert_eq!(get("A3"), Some(CellValue::Bool(true)));
        assert_eq!(get("B3"), Some(CellValue::String("Tuex".into())));
        assert_eq!(get("C3"), Some(CellValue::Error("#DIV/0!".into())));
        assert_eq!(get("A4"), Some(CellValue::String("inline & text".into())));
        assert_eq!(get("B4"), None);
        assert_eq!(parsed.drawing_ids, vec!["rId7".to_string()]);
    }

    #[test]
    fn test_drawing_with_end_tag() {
        let xml = br#"<worksheet xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheetData/><drawing r:id="rId2"></drawing></worksheet>"#;
        let parsed = parse_worksheet_xml(xml, &SharedStrings::new()).unwrap();
        assert_eq!(parsed.drawing_ids, vec!["rId2".to_string()]);
    }

    #[test]
    fn test_cells_without_reference() {
        let xml = br#"<worksheet><sheetData>
            <row><c><v>1</v></c><c><v>2</v></c></row>
            <row><c r="B2"><v>3</v></c><c><v>4</v></c></row>
        </sheetData></worksheet>"#;
        let parsed = parse_worksheet_xml(xml, &SharedStrings::new()).unwrap();
        assert_eq!(parsed.cells.get(&CellRef::new(1, 1)), Some(&CellValue::Int(1)));
        assert_eq!(parsed.cells.get(&CellRef::new(1, 2)), Some(&CellValue::Int(2)));
        assert_eq!(parsed.cells.get(&CellRef::new(2, 2)), Some(&CellValue::Int(3)));
        assert_eq!(parsed.cells.get(&CellRef::new(2, 3)), Some(&CellValue::Int(4)));
    }
}
