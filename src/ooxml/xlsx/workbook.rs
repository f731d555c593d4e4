//! Excel workbook reader.
//!
//! Loads the sheets of an `.xlsx` package in workbook order, resolves chart
//! data references against their cells and discovers the charts embedded in
//! each sheet's drawings.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::ooxml::charts::{Chart, parse_chart_space};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{OpcPackage, PackURI};

use super::cell::{CellValue, MAX_ROWS};
use super::parsers::drawing_parser::parse_chart_ids;
use super::parsers::workbook_parser::{DefinedName, parse_workbook_xml};
use super::parsers::worksheet_parser::parse_worksheet_xml;
use super::range::RangeRef;
use super::shared_strings::SharedStrings;
use super::worksheet::{Worksheet, WorksheetInfo};

/// Defined names may refer to other names; this bounds the chain.
const MAX_NAME_DEPTH: usize = 8;

/// Most values a single reference may resolve to, Excel's limit on the
/// points of a chart series.
pub const MAX_REFERENCE_CELLS: usize = MAX_ROWS as usize;

/// A chart found in the workbook.
#[derive(Debug, Clone)]
pub struct ChartEntry {
    /// Sheet hosting the drawing that anchors the chart
    pub sheet: String,
    /// Chart part name, e.g. `/xl/charts/chart1.xml`
    pub partname: PackURI,
    pub chart: Chart,
}

/// Part location and drawing links of a loaded sheet.
#[derive(Debug)]
struct SheetPart {
    partname: PackURI,
    drawing_ids: Vec<String>,
}

/// An opened Excel workbook.
#[derive(Debug)]
pub struct Workbook {
    /// The underlying OPC package
    package: OpcPackage,
    /// Sheets in workbook order
    worksheets: Vec<Worksheet>,
    /// Parallel to `worksheets`
    sheet_parts: Vec<SheetPart>,
    defined_names: Vec<DefinedName>,
}

impl Workbook {
    /// Open a workbook from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_package(OpcPackage::open(path)?)
    }

    /// Open a workbook from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_package(OpcPackage::from_reader(reader)?)
    }

    /// Open a workbook from its raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_package(OpcPackage::from_bytes(data)?)
    }

    fn from_package(package: OpcPackage) -> Result<Self> {
        let workbook_part = package.main_document()?;
        let (entries, defined_names) = parse_workbook_xml(package.part(&workbook_part)?)?;
        let workbook_rels = package.rels_for(&workbook_part)?;

        let shared_strings = match workbook_rels.of_type(rt::SHARED_STRINGS).next() {
            Some(rel) => SharedStrings::parse(package.part(&rel.target_partname()?)?)?,
            None => SharedStrings::new(),
        };

        let mut worksheets = Vec::with_capacity(entries.len());
        let mut sheet_parts = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            let Some(rel) = workbook_rels.get(&entry.relationship_id) else {
                debug!(sheet = %entry.name, r_id = %entry.relationship_id, "sheet without relationship, skipped");
                continue;
            };
            let is_chartsheet = rel.has_type(rt::CHARTSHEET);
            if !is_chartsheet && !rel.has_type(rt::WORKSHEET) {
                debug!(sheet = %entry.name, reltype = rel.reltype(), "unsupported sheet type, skipped");
                continue;
            }

            let partname = rel.target_partname()?;
            let parsed = parse_worksheet_xml(package.part(&partname)?, &shared_strings)?;
            let info = WorksheetInfo {
                name: entry.name,
                relationship_id: entry.relationship_id,
                sheet_id: entry.sheet_id,
                position,
                is_chartsheet,
            };
            worksheets.push(Worksheet::new(info, parsed.cells));
            sheet_parts.push(SheetPart {
                partname,
                drawing_ids: parsed.drawing_ids,
            });
        }

        debug!(sheets = worksheets.len(), names = defined_names.len(), "workbook loaded");

        Ok(Self {
            package,
            worksheets,
            sheet_parts,
            defined_names,
        })
    }

    /// Sheets in workbook order.
    #[inline]
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(Worksheet::name).collect()
    }

    /// Sheet by name. Excel compares sheet names case-insensitively.
    pub fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheet_index(name).map(|i| &self.worksheets[i])
    }

    fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets
            .iter()
            .position(|ws| ws.name() == name)
            .or_else(|| {
                self.worksheets
                    .iter()
                    .position(|ws| ws.name().to_lowercase() == name.to_lowercase())
            })
    }

    #[inline]
    pub fn defined_names(&self) -> &[DefinedName] {
        &self.defined_names
    }

    /// Look up a defined name, preferring one scoped to `scope_sheet`.
    pub fn defined_name(&self, name: &str, scope_sheet: Option<&str>) -> Option<&DefinedName> {
        let scope = scope_sheet
            .and_then(|s| self.worksheet(s))
            .map(|ws| ws.info().position);
        let matches = |d: &&DefinedName| d.name.eq_ignore_ascii_case(name);
        scope
            .and_then(|idx| {
                self.defined_names
                    .iter()
                    .filter(matches)
                    .find(|d| d.local_sheet_id == Some(idx))
            })
            .or_else(|| {
                self.defined_names
                    .iter()
                    .filter(matches)
                    .find(|d| d.local_sheet_id.is_none())
            })
    }

    /// Values of a chart reference, row-major over its areas.
    ///
    /// References that are not cell ranges are looked up as defined names.
    /// Missing cells read as [`CellValue::Empty`]. References spanning more
    /// than [`MAX_REFERENCE_CELLS`] cells are rejected as invalid.
    pub fn resolve(&self, formula: &str) -> Result<Vec<CellValue>> {
        self.resolve_at_depth(formula, 0)
    }

    fn resolve_at_depth(&self, formula: &str, depth: usize) -> Result<Vec<CellValue>> {
        let range = match RangeRef::parse(formula) {
            Ok(range) => range,
            Err(err) => {
                if depth >= MAX_NAME_DEPTH {
                    return Err(err);
                }
                let (scope, name) = split_name_reference(formula);
                let defined = self
                    .defined_name(&name, scope.as_deref())
                    .ok_or_else(|| OoxmlError::UnresolvedReference(formula.to_string()))?;
                return self.resolve_at_depth(&defined.formula, depth + 1);
            },
        };

        let len = range.len();
        if len > MAX_REFERENCE_CELLS {
            return Err(OoxmlError::InvalidReference(formula.to_string()));
        }

        let mut values = Vec::with_capacity(len);
        for area in &range.areas {
            let sheet_name = area
                .sheet
                .as_deref()
                .ok_or_else(|| OoxmlError::InvalidReference(formula.to_string()))?;
            let worksheet = self
                .worksheet(sheet_name)
                .ok_or_else(|| OoxmlError::SheetNotFound(sheet_name.to_string()))?;
            values.extend(area.cells().map(|at| worksheet.cell(at).clone()));
        }
        Ok(values)
    }

    /// Every chart of the workbook, sheet by sheet in workbook order and in
    /// drawing anchor order within a sheet.
    pub fn charts(&self) -> Result<Vec<ChartEntry>> {
        let mut charts = Vec::new();

        for (worksheet, sheet_part) in self.worksheets.iter().zip(&self.sheet_parts) {
            if sheet_part.drawing_ids.is_empty() {
                continue;
            }
            let sheet_rels = self.package.rels_for(&sheet_part.partname)?;

            for drawing_id in &sheet_part.drawing_ids {
                let drawing_part = sheet_rels.target_of(drawing_id)?;
                let chart_ids = parse_chart_ids(self.package.part(&drawing_part)?)?;
                if chart_ids.is_empty() {
                    continue;
                }
                let drawing_rels = self.package.rels_for(&drawing_part)?;

                for chart_id in chart_ids {
                    let partname = drawing_rels.target_of(&chart_id)?;
                    let chart = parse_chart_space(self.package.part(&partname)?)?;
                    debug!(
                        sheet = worksheet.name(),
                        part = %partname,
                        title = chart.title.as_deref().unwrap_or(""),
                        "chart discovered"
                    );
                    charts.push(ChartEntry {
                        sheet: worksheet.name().to_string(),
                        partname,
                        chart,
                    });
                }
            }
        }

        Ok(charts)
    }
}

/// Split `Sheet1!name` or `'My sheet'!name` into scope and name.
fn split_name_reference(formula: &str) -> (Option<String>, String) {
    let text = formula.trim();
    let text = text.strip_prefix('=').unwrap_or(text);
    match text.rfind('!') {
        Some(pos) => {
            let scope = text[..pos].trim_matches('\'').replace("''", "'");
            (Some(scope), text[pos + 1..].to_string())
        },
        None => (None, text.to_string()),
    }
}
