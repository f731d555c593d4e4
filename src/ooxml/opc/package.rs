//! In-memory view of a ZIP-based OPC package.
//!
//! Every member is decompressed once when the package is opened; parts are
//! then served from the member cache by [`PackURI`]. Workbooks embedding
//! charts are small enough that this beats repeated archive lookups.

use crate::ooxml::opc::constants::{DEFAULT_WORKBOOK_PART, relationship_type as rt};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// An opened OPC package (`.xlsx`).
#[derive(Debug)]
pub struct OpcPackage {
    members: HashMap<String, Vec<u8>>,
}

impl OpcPackage {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Open a package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Open a package from its raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut members = HashMap::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let mut blob = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut blob)?;
            members.insert(file.name().to_string(), blob);
        }

        Ok(Self { members })
    }

    /// Binary content of a part.
    pub fn part(&self, partname: &PackURI) -> Result<&[u8]> {
        self.members
            .get(partname.membername())
            .map(Vec::as_slice)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Whether a part exists in the package.
    #[inline]
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.members.contains_key(partname.membername())
    }

    /// Relationships sourced from `partname`; empty when it has no `.rels` part.
    pub fn rels_for(&self, partname: &PackURI) -> Result<Relationships> {
        match self.members.get(partname.rels_uri().membername()) {
            Some(xml) => Relationships::from_xml(xml, partname.base_uri()),
            None => Ok(Relationships::default()),
        }
    }

    /// Locate the main document part through the package relationships.
    pub fn main_document(&self) -> Result<PackURI> {
        let package = PackURI::new(PACKAGE_URI)?;
        let rels = self.rels_for(&package)?;
        match rels.of_type(rt::OFFICE_DOCUMENT).next() {
            Some(rel) => rel.target_partname(),
            None => PackURI::new(DEFAULT_WORKBOOK_PART),
        }
    }

    /// Member names in the package, unordered.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_main_document_from_package_rels() {
        let data = build_zip(&[
            (
                "_rels/.rels",
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/book.xml"/></Relationships>"#,
            ),
            ("xl/book.xml", "<workbook/>"),
        ]);
        let pkg = OpcPackage::from_bytes(&data).unwrap();
        let main = pkg.main_document().unwrap();
        assert_eq!(main.as_str(), "/xl/book.xml");
        assert_eq!(pkg.part(&main).unwrap(), b"<workbook/>");
    }

    #[test]
    fn test_main_document_fallback() {
        let data = build_zip(&[("xl/workbook.xml", "<workbook/>")]);
        let pkg = OpcPackage::from_bytes(&data).unwrap();
        assert_eq!(pkg.main_document().unwrap().as_str(), "/xl/workbook.xml");
        assert!(pkg.rels_for(&pkg.main_document().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_part_and_garbage_input() {
        let data = build_zip(&[("a.xml", "<a/>")]);
        let pkg = OpcPackage::from_bytes(&data).unwrap();
        let missing = PackURI::new("/b.xml").unwrap();
        assert!(matches!(pkg.part(&missing), Err(OpcError::PartNotFound(_))));

        assert!(OpcPackage::from_bytes(b"definitely not a zip").is_err());
        assert!(matches!(
            OpcPackage::open("/nonexistent/book.xlsx"),
            Err(OpcError::PackageNotFound(_))
        ));
    }
}
