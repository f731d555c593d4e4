//! Office Open XML (OOXML) reading for spreadsheets and their charts.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): ZIP package, part names and relationships
//! 2. **Spreadsheet Layer** (`xlsx`): sheets, cells, defined names and
//!    chart discovery
//! 3. **Chart Layer** (`charts`): the DrawingML chart model and its reader
pub mod charts;
pub mod error;
pub mod opc;
pub mod xlsx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
