//! Shared strings table for Excel files.
//!
//! Excel uses a shared strings table to efficiently store string values.
//! String cells (`t="s"`) hold an index into this table.

use crate::ooxml::error::Result;
use quick_xml::Reader;
use quick_xml::events::Event;

// Pre-allocate typical capacity to reduce reallocations
const INITIAL_STRINGS_CAPACITY: usize = 256;

/// Shared strings table, in document order.
#[derive(Debug, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `xl/sharedStrings.xml`.
    ///
    /// Rich-text runs of one `<si>` are concatenated; phonetic hints
    /// (`<rPh>`) are skipped.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut strings = Vec::with_capacity(INITIAL_STRINGS_CAPACITY);
        let mut reader = Reader::from_reader(xml);

        let mut buf = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text = false;
        let mut phonetic_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => match e.local_name().as_ref() {
                    b"si" => current = Some(String::new()),
                    b"rPh" => phonetic_depth += 1,
                    b"t" if phonetic_depth == 0 => in_text = true,
                    _ => {},
                },
                Event::Empty(ref e) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                },
                Event::Text(e) if in_text => {
                    if let Some(s) = current.as_mut() {
                        s.push_str(&e.unescape()?);
                    }
                },
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                    b"si" => {
                        if let Some(s) = current.take() {
                            strings.push(s);
                        }
                    },
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(SharedStrings { strings })
    }

    /// Get a string by its index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_rich_strings() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="4" uniqueCount="4">
  <si><t>Length</t></si>
  <si><r><rPr><b/></rPr><t xml:space="preserve">Max </t></r><r><t>load</t></r></si>
  <si><t>R&amp;D</t><rPh sb="0" eb="1"><t>ignored</t></rPh></si>
  <si/>
</sst>"#;
        let sst = SharedStrings::parse(xml).unwrap();
        assert_eq!(sst.len(), 4);
        assert_eq!(sst.get(0), Some("Length"));
        assert_eq!(sst.get(1), Some("Max load"));
        assert_eq!(sst.get(2), Some("R&D"));
        assert_eq!(sst.get(3), Some(""));
        assert_eq!(sst.get(4), None);
    }
}
