//! Excel (.xlsx) workbook reading.
//!
//! Only what chart rendering needs is read: sheet cell values (the cached
//! results of formulas), shared strings, defined names, and the drawings that
//! anchor charts on sheets.
//!
//! # Example
//!
//! ```rust,no_run
//! use xlcharts::ooxml::xlsx::Workbook;
//!
//! let workbook = Workbook::open("report.xlsx")?;
//! for entry in workbook.charts()? {
//!     println!("{}: {:?}", entry.sheet, entry.chart.title);
//! }
//! let loads = workbook.resolve("Data!$B$2:$B$10")?;
//! # Ok::<(), xlcharts::ooxml::OoxmlError>(())
//! ```

pub mod cell;
pub mod parsers;
pub mod range;
pub mod shared_strings;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellRef, CellValue, column_to_letters};
pub use range::{Area, RangeRef};
pub use shared_strings::SharedStrings;
pub use workbook::{ChartEntry, Workbook};
pub use worksheet::{Worksheet, WorksheetInfo};
