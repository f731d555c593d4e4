//! XML part parsers for the xlsx reader.

pub mod drawing_parser;
pub mod workbook_parser;
pub mod worksheet_parser;
