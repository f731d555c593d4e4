//! Relationships between parts of an OPC package.
//!
//! Every part may own a `_rels/<name>.rels` part listing the parts it points
//! to. The workbook uses them to find worksheets, worksheets to find drawings
//! and drawings to find charts.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target_ref: String,
    base_uri: String,
    is_external: bool,
}

impl Relationship {
    pub fn new(
        r_id: impl Into<String>,
        reltype: impl Into<String>,
        target_ref: impl Into<String>,
        base_uri: impl Into<String>,
        is_external: bool,
    ) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target_ref: target_ref.into(),
            base_uri: base_uri.into(),
            is_external,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    /// Whether the relationship type ends with the given suffix
    /// (see [`crate::ooxml::opc::constants::relationship_type`]).
    #[inline]
    pub fn has_type(&self, suffix: &str) -> bool {
        self.reltype.ends_with(suffix)
    }

    /// Absolute part name of an internal relationship target.
    pub fn target_partname(&self) -> Result<PackURI> {
        if self.is_external {
            return Err(OpcError::InvalidRelationship(format!(
                "{} points outside the package ({})",
                self.r_id, self.target_ref
            )));
        }
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref)
    }
}

/// Relationships owned by one source part, in document order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: SmallVec<[Relationship; 8]>,
}

impl Relationships {
    /// Parse a `.rels` part. `base_uri` is the directory of the source part.
    pub fn from_xml(xml: &[u8], base_uri: &str) -> Result<Self> {
        let mut rels = SmallVec::new();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"Relationship" {
                        let mut r_id = None;
                        let mut reltype = None;
                        let mut target_ref = None;
                        let mut mode = target_mode::INTERNAL.to_string();

                        for attr in e.attributes() {
                            let attr = attr?;
                            match attr.key.as_ref() {
                                b"Id" => r_id = Some(attr.unescape_value()?.into_owned()),
                                b"Type" => reltype = Some(attr.unescape_value()?.into_owned()),
                                b"Target" => target_ref = Some(attr.unescape_value()?.into_owned()),
                                b"TargetMode" => mode = attr.unescape_value()?.into_owned(),
                                _ => {},
                            }
                        }

                        if let (Some(id), Some(rt), Some(tr)) = (r_id, reltype, target_ref) {
                            rels.push(Relationship::new(
                                id,
                                rt,
                                tr,
                                base_uri,
                                mode == target_mode::EXTERNAL,
                            ));
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(format!("Rels parse error: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        Ok(Self { rels })
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Resolve the target part of a relationship ID.
    pub fn target_of(&self, r_id: &str) -> Result<PackURI> {
        self.get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(r_id.to_string()))?
            .target_partname()
    }

    /// Internal relationships whose type ends with `suffix`, in document order.
    pub fn of_type<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.rels
            .iter()
            .filter(move |rel| !rel.is_external && rel.has_type(suffix))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    const WORKBOOK_RELS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
  <Relationship Id="rId9" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com" TargetMode="External"/>
</Relationships>"#;

    #[test]
    fn test_parse_relationships() {
        let rels = Relationships::from_xml(WORKBOOK_RELS, "/xl").unwrap();
        assert_eq!(rels.len(), 4);

        let sheet = rels.get("rId1").unwrap();
        assert!(sheet.has_type(rt::WORKSHEET));
        assert_eq!(
            sheet.target_partname().unwrap().as_str(),
            "/xl/worksheets/sheet1.xml"
        );
        assert!(rels.get("rId9").unwrap().is_external());
        assert!(rels.target_of("rId9").is_err());
        assert!(rels.target_of("rId42").is_err());
    }

    #[test]
    fn test_of_type_keeps_document_order() {
        let rels = Relationships::from_xml(WORKBOOK_RELS, "/xl").unwrap();
        let ids: Vec<&str> = rels.of_type(rt::WORKSHEET).map(|r| r.r_id()).collect();
        assert_eq!(ids, vec!["rId2", "rId1"]);
        assert_eq!(rels.of_type(rt::SHARED_STRINGS).count(), 1);
    }
}
