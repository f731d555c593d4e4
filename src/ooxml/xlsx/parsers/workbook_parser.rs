//! Parser for Excel workbook.xml files.
//!
//! Extracts the ordered sheet list and the defined names. Chart series may
//! point at a defined name instead of a literal range, so both are needed to
//! resolve chart data.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ooxml::error::Result;

// Pre-allocate typical capacity for worksheets
const INITIAL_SHEETS_CAPACITY: usize = 16;

/// A `<sheet>` entry of workbook.xml.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetEntry {
    pub name: String,
    pub sheet_id: u32,
    pub relationship_id: String,
    /// `visible`, `hidden` or `veryHidden`
    pub state: Option<String>,
}

/// A `<definedName>` entry of workbook.xml.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinedName {
    pub name: String,
    /// Index into the sheet list when the name is sheet-scoped
    pub local_sheet_id: Option<usize>,
    pub formula: String,
}

/// Parse workbook.xml content.
pub fn parse_workbook_xml(xml: &[u8]) -> Result<(Vec<SheetEntry>, Vec<DefinedName>)> {
    let mut sheets = Vec::with_capacity(INITIAL_SHEETS_CAPACITY);
    let mut names = Vec::new();
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut pending_name: Option<DefinedName> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sheet" => {
                if let Some(entry) = parse_sheet_entry(e)? {
                    sheets.push(entry);
                }
            },
            Event::Start(ref e) if e.local_name().as_ref() == b"definedName" => {
                pending_name = Some(parse_defined_name(e)?);
            },
            Event::Text(e) => {
                if let Some(name) = pending_name.as_mut() {
                    name.formula.push_str(&e.unescape()?);
                }
            },
            Event::End(ref e) if e.local_name().as_ref() == b"definedName" => {
                if let Some(name) = pending_name.take() {
                    names.push(name);
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok((sheets, names))
}

fn parse_sheet_entry(e: &BytesStart) -> Result<Option<SheetEntry>> {
    let mut name = None;
    let mut sheet_id = None;
    let mut relationship_id = None;
    let mut state = None;

    for attr in e.attributes() {
        let attr = attr?;
        match (attr.key.prefix().is_some(), attr.key.local_name().as_ref()) {
            (false, b"name") => name = Some(attr.unescape_value()?.into_owned()),
            (false, b"sheetId") => sheet_id = atoi_simd::parse(&attr.value).ok(),
            (false, b"state") => state = Some(attr.unescape_value()?.into_owned()),
            (true, b"id") => relationship_id = Some(attr.unescape_value()?.into_owned()),
            _ => {},
        }
    }

    Ok(match (name, relationship_id) {
        (Some(name), Some(relationship_id)) => Some(SheetEntry {
            name,
            sheet_id: sheet_id.unwrap_or(0),
            relationship_id,
            state,
        }),
        _ => None,
    })
}

fn parse_defined_name(e: &BytesStart) -> Result<DefinedName> {
    let mut defined = DefinedName {
        name: String::new(),
        local_sheet_id: None,
        formula: String::new(),
    };
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"name" => defined.name = attr.unescape_value()?.into_owned(),
            b"localSheetId" => defined.local_sheet_id = atoi_simd::parse(&attr.value).ok(),
            _ => {},
        }
    }
    Ok(defined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workbook_xml() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <bookViews><workbookView activeTab="1"/></bookViews>
  <sheets>
    <sheet name="Data &amp; Results" sheetId="1" r:id="rId1"/>
    <sheet name="Hidden" sheetId="4" state="hidden" r:id="rId2"/>
    <sheet name="broken" sheetId="5"/>
  </sheets>
  <definedNames>
    <definedName name="loads">'Data &amp; Results'!$B$2:$B$4</definedName>
    <definedName name="_xlnm.Print_Area" localSheetId="1">Hidden!$A$1:$C$3</definedName>
  </definedNames>
</workbook>"#;
        let (sheets, names) = parse_workbook_xml(xml).unwrap();

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].name, "Data & Results");
        assert_eq!(sheets[0].relationship_id, "rId1");
        assert_eq!(sheets[1].sheet_id, 4);
        assert_eq!(sheets[1].state.as_deref(), Some("hidden"));

        assert_eq!(names.len(), 2);
        assert_eq!(names[0].name, "loads");
        assert_eq!(names[0].formula, "'Data & Results'!$B$2:$B$4");
        assert_eq!(names[0].local_sheet_id, None);
        assert_eq!(names[1].local_sheet_id, Some(1));
    }
}
