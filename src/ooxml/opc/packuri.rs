//! Part names inside an OPC package.
//!
//! A [`PackURI`] is the absolute, slash-rooted name of a part
//! (`/xl/charts/chart1.xml`). Relationship targets are usually relative to the
//! directory of their source part, so most of this module is about resolving
//! `../drawings/drawing1.xml` style references.

use crate::ooxml::opc::error::{OpcError, Result};

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// Absolute name of a part within an OPC package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a PackURI, which must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relationship target against the directory of its source.
    ///
    /// Targets that are already absolute (`/xl/worksheets/sheet1.xml`) are
    /// only normalized; Excel writes both forms.
    pub fn from_rel_ref(base_uri: &str, target_ref: &str) -> Result<Self> {
        let joined = if target_ref.starts_with('/') {
            target_ref.to_string()
        } else if base_uri.ends_with('/') {
            format!("{}{}", base_uri, target_ref)
        } else {
            format!("{}/{}", base_uri, target_ref)
        };
        Self::new(normalize(&joined))
    }

    /// Directory portion, e.g. `/xl/charts` for `/xl/charts/chart1.xml`.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// File name portion, empty for the package pseudo-partname.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Name of the ZIP member backing this part (leading slash stripped).
    #[inline]
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// The `.rels` part holding relationships sourced from this part.
    ///
    /// `/xl/workbook.xml` → `/xl/_rels/workbook.xml.rels`, and the package
    /// itself → `/_rels/.rels`.
    pub fn rels_uri(&self) -> PackURI {
        let base = self.base_uri();
        let uri = if base == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base, self.filename())
        };
        PackURI { uri }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

/// Collapse `.` and `..` segments of a slash-rooted path.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            other => parts.push(other),
        }
    }

    let mut out = String::with_capacity(path.len());
    for part in parts {
        out.push('/');
        out.push_str(part);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/xl/workbook.xml").is_ok());
        assert!(PackURI::new("xl/workbook.xml").is_err());
    }

    #[test]
    fn test_base_uri_and_filename() {
        let uri = PackURI::new("/xl/charts/chart1.xml").unwrap();
        assert_eq!(uri.base_uri(), "/xl/charts");
        assert_eq!(uri.filename(), "chart1.xml");
        assert_eq!(uri.membername(), "xl/charts/chart1.xml");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
    }

    #[test]
    fn test_rels_uri() {
        let uri = PackURI::new("/xl/workbook.xml").unwrap();
        assert_eq!(uri.rels_uri().as_str(), "/xl/_rels/workbook.xml.rels");

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().as_str(), "/_rels/.rels");
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/xl/worksheets", "../drawings/drawing1.xml").unwrap();
        assert_eq!(uri.as_str(), "/xl/drawings/drawing1.xml");

        let uri = PackURI::from_rel_ref("/", "xl/workbook.xml").unwrap();
        assert_eq!(uri.as_str(), "/xl/workbook.xml");

        let uri = PackURI::from_rel_ref("/xl", "/xl/worksheets/./sheet2.xml").unwrap();
        assert_eq!(uri.as_str(), "/xl/worksheets/sheet2.xml");
    }
}
