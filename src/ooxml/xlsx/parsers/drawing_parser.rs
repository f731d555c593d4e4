//! Parser for SpreadsheetML drawing parts (`xl/drawings/drawingN.xml`).
//!
//! A drawing anchors graphic frames on a sheet. Frames whose graphic data is a
//! DrawingML chart reference the chart part through an `r:id`.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::ooxml::error::Result;

/// `uri` of `<a:graphicData>` holding a classic chart.
const CHART_GRAPHIC_URI: &[u8] = b"http://schemas.openxmlformats.org/drawingml/2006/chart";

/// Relationship IDs of the charts in a drawing, in anchor order.
///
/// Duplicates (the same chart inside `mc:Choice` and `mc:Fallback`) are
/// reported once.
pub fn parse_chart_ids(xml: &[u8]) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::new();
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut in_chart_data = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.local_name().as_ref() == b"graphicData" => {
                in_chart_data = false;
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"uri" {
                        in_chart_data = attr.value.as_ref() == CHART_GRAPHIC_URI;
                    }
                }
            },
            Event::End(ref e) if e.local_name().as_ref() == b"graphicData" => {
                in_chart_data = false;
            },
            Event::Start(ref e) | Event::Empty(ref e)
                if in_chart_data && e.local_name().as_ref() == b"chart" =>
            {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.local_name().as_ref() == b"id" && attr.key.prefix().is_some() {
                        let id = attr.unescape_value()?.into_owned();
                        if !ids.contains(&id) {
                            ids.push(id);
                        }
                    }
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(ids)
}
