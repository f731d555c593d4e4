/// Open Packaging Conventions (OPC) implementation.
///
/// The read side of the OPC specification needed to walk a spreadsheet
/// package:
///
/// - ZIP-based physical packaging with every member decompressed up front
/// - Part names and resolution of relative relationship targets
/// - Relationship parts (`_rels/*.rels`) in document order
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod rel;

// Re-export commonly used types
pub use error::OpcError;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use rel::{Relationship, Relationships};
