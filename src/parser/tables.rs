//! Input and output tables and chart summaries.
//!
//! The input sheet lists one parameter per row starting at row 2: name,
//! unit, description and default value in columns A to D. The output sheet
//! lists name, unit and description; values come from the evaluation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::ooxml::xlsx::cell::CellValue;
use crate::ooxml::xlsx::workbook::Workbook;
use crate::ooxml::xlsx::worksheet::Worksheet;

/// First data row of the input and output tables.
const FIRST_ROW: u32 = 2;

/// A parameter of the input table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputCell {
    pub name: String,
    pub unit: String,
    pub description: CellValue,
    pub default: CellValue,
    /// `input_{i}`, `i` counting rows from row 2
    pub key: String,
}

/// A named result of the output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputField {
    pub name: String,
    pub unit: String,
    pub description: CellValue,
    /// `output_{i}`, `i` counting rows from row 2
    pub key: String,
    pub value: CellValue,
    #[serde(rename = "type")]
    pub value_type: &'static str,
}

/// Summary of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FigureInfo {
    pub name: String,
    /// Lower-case identifier derived from the name
    pub concat_name: String,
    /// Element name of the chart's primary type group, e.g. `lineChart`
    pub chart_type: String,
}

/// Lower-case the title, turn spaces into `_` and drop other punctuation.
pub fn concat_name(title: &str) -> String {
    title
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Error naming the configured table sheets the workbook lacks.
pub(crate) fn validate_sheet_names(workbook: &Workbook, config: &ParserConfig) -> Result<()> {
    let missing: Vec<String> = [&config.input_sheet, &config.output_sheet]
        .into_iter()
        .filter(|name| workbook.worksheet(name).is_none())
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingSheets(missing))
    }
}

pub(crate) fn input_cells(workbook: &Workbook, config: &ParserConfig) -> Result<Vec<InputCell>> {
    let sheet = table_sheet(workbook, &config.input_sheet)?;

    let mut inputs = Vec::new();
    for (index, row) in (FIRST_ROW..=sheet.max_row()).enumerate() {
        let name = sheet.value(row, 1);
        if name.is_empty() {
            continue;
        }
        inputs.push(InputCell {
            name: name.to_string(),
            unit: unit_of(sheet, row),
            description: sheet.value(row, 3).clone(),
            default: sheet.value(row, 4).clone(),
            key: format!("input_{index}"),
        });
    }
    Ok(inputs)
}

pub(crate) fn outputs(
    workbook: &Workbook,
    values: &BTreeMap<String, CellValue>,
    config: &ParserConfig,
) -> Result<Vec<OutputField>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    let sheet = table_sheet(workbook, &config.output_sheet)?;

    let mut outputs = Vec::new();
    for (index, row) in (FIRST_ROW..=sheet.max_row()).enumerate() {
        let name = sheet.value(row, 1);
        if name.is_empty() {
            continue;
        }
        let name = name.to_string();
        let Some(value) = values.get(&name).filter(|v| !v.is_empty()) else {
            continue;
        };
        outputs.push(OutputField {
            unit: unit_of(sheet, row),
            description: sheet.value(row, 3).clone(),
            key: format!("output_{index}"),
            value: value.clone(),
            value_type: value.type_name(),
            name,
        });
    }
    Ok(outputs)
}

fn table_sheet<'a>(workbook: &'a Workbook, name: &str) -> Result<&'a Worksheet> {
    workbook
        .worksheet(name)
        .ok_or_else(|| Error::MissingSheets(vec![name.to_string()]))
}

fn unit_of(sheet: &Worksheet, row: u32) -> String {
    let unit = sheet.value(row, 2);
    if unit.is_empty() {
        String::new()
    } else {
        unit.to_string()
    }
}
