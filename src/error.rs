//! Unified error type of the crate.
//!
//! Package and workbook errors keep their own types in `ooxml`; this type
//! wraps them together with the errors of the chart parser itself.

use thiserror::Error;

use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

/// Result type for chart parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Workbook or chart XML could not be read
    #[error("OOXML error: {0}")]
    Ooxml(OoxmlError),

    /// The ZIP package or its relationships could not be read
    #[error("OPC error: {0}")]
    Opc(OpcError),

    /// No chart carries the requested title
    #[error("No chart found with title: {0}")]
    ChartNotFound(String),

    /// The chart's kind cannot be rendered
    #[error("Chart '{title}' (type {kind}) cannot be parsed. Allowed types are: {}", .allowed.join(", "))]
    UnsupportedChartType {
        title: String,
        kind: String,
        allowed: Vec<String>,
    },

    /// The spreadsheet has no content
    #[error("Spreadsheet is empty")]
    EmptySpreadsheet,

    /// Required sheets are absent
    #[error("Missing sheets: {}", .0.join(", "))]
    MissingSheets(Vec<String>),

    /// The spreadsheet calculation failed
    #[error("Spreadsheet evaluation failed: {0}")]
    Evaluation(String),

    /// Invalid parser configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            other => Error::Opc(other),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            other => Error::Ooxml(other),
        }
    }
}
