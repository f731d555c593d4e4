//! Constant values used by the OPC layer.
//!
//! Relationship types are matched on their final path segment so that both
//! transitional (`schemas.openxmlformats.org`) and strict
//! (`purl.oclc.org/ooxml`) packages resolve the same way.

/// Relationship type suffixes.
#[allow(dead_code)]
pub mod relationship_type {
    pub const OFFICE_DOCUMENT: &str = "/officeDocument";
    pub const WORKSHEET: &str = "/worksheet";
    pub const CHARTSHEET: &str = "/chartsheet";
    pub const SHARED_STRINGS: &str = "/sharedStrings";
    pub const DRAWING: &str = "/drawing";
    pub const CHART: &str = "/chart";
}

/// Target mode attribute values.
pub mod target_mode {
    pub const INTERNAL: &str = "Internal";
    pub const EXTERNAL: &str = "External";
}

/// Fallback location of the workbook part when the package relationship is missing.
pub const DEFAULT_WORKBOOK_PART: &str = "/xl/workbook.xml";
