//! In-memory `.xlsx` fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_SS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/spreadsheetDrawing";

struct Sheet {
    name: String,
    cells: Vec<(String, String)>,
    charts: Vec<String>,
    chartsheet: bool,
}

/// Builds a minimal workbook package.
#[derive(Default)]
pub struct XlsxBuilder {
    sheets: Vec<Sheet>,
    defined_names: Vec<(String, String)>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet. Cell values that parse as numbers are written as numbers,
    /// everything else as inline strings.
    pub fn sheet(mut self, name: &str, cells: &[(&str, &str)], charts: &[String]) -> Self {
        self.sheets.push(Sheet {
            name: name.to_string(),
            cells: cells.iter().map(|(r, v)| (r.to_string(), v.to_string())).collect(),
            charts: charts.to_vec(),
            chartsheet: false,
        });
        self
    }

    /// Add a chartsheet showing a single chart.
    pub fn chartsheet(mut self, name: &str, chart: String) -> Self {
        self.sheets.push(Sheet {
            name: name.to_string(),
            cells: Vec::new(),
            charts: vec![chart],
            chartsheet: true,
        });
        self
    }

    pub fn defined_name(mut self, name: &str, formula: &str) -> Self {
        self.defined_names.push((name.to_string(), formula.to_string()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut files: Vec<(String, String)> = vec![
            (
                "[Content_Types].xml".into(),
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#.into(),
            ),
            (
                "_rels/.rels".into(),
                format!(
                    r#"<Relationships xmlns="{NS_PKG_REL}"><Relationship Id="rId1" Type="{NS_REL}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
                ),
            ),
        ];

        let mut sheets_xml = String::new();
        let mut sheet_rels = String::new();
        let mut chart_number = 0;
        for (i, sheet) in self.sheets.iter().enumerate() {
            let n = i + 1;
            sheets_xml.push_str(&format!(
                r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#,
                escape(&sheet.name)
            ));
            let folder = if sheet.chartsheet { "chartsheets" } else { "worksheets" };
            let kind = if sheet.chartsheet { "chartsheet" } else { "worksheet" };
            sheet_rels.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="{NS_REL}/{kind}" Target="{folder}/sheet{n}.xml"/>"#
            ));

            let drawing = if sheet.charts.is_empty() { "" } else { r#"<drawing r:id="rId1"/>"# };
            let body = if sheet.chartsheet {
                format!(
                    r#"<chartsheet xmlns="{NS_MAIN}" xmlns:r="{NS_REL}"><sheetPr/><sheetViews><sheetView workbookViewId="0"/></sheetViews>{drawing}</chartsheet>"#
                )
            } else {
                format!(
                    r#"<worksheet xmlns="{NS_MAIN}" xmlns:r="{NS_REL}"><sheetData>{}</sheetData>{drawing}</worksheet>"#,
                    sheet_data(&sheet.cells)
                )
            };
            files.push((format!("xl/{folder}/sheet{n}.xml"), body));
            if sheet.charts.is_empty() {
                continue;
            }

            files.push((
                format!("xl/{folder}/_rels/sheet{n}.xml.rels"),
                format!(
                    r#"<Relationships xmlns="{NS_PKG_REL}"><Relationship Id="rId1" Type="{NS_REL}/drawing" Target="../drawings/drawing{n}.xml"/></Relationships>"#
                ),
            ));

            let mut anchors = String::new();
            let mut drawing_rels = String::new();
            for (k, chart) in sheet.charts.iter().enumerate() {
                chart_number += 1;
                let id = k + 1;
                let anchor = if sheet.chartsheet { "absoluteAnchor" } else { "twoCellAnchor" };
                anchors.push_str(&format!(
                    r#"<xdr:{anchor}><xdr:graphicFrame><a:graphic><a:graphicData uri="{NS_CHART}"><c:chart r:id="rId{id}"/></a:graphicData></a:graphic></xdr:graphicFrame></xdr:{anchor}>"#
                ));
                drawing_rels.push_str(&format!(
                    r#"<Relationship Id="rId{id}" Type="{NS_REL}/chart" Target="../charts/chart{chart_number}.xml"/>"#
                ));
                files.push((format!("xl/charts/chart{chart_number}.xml"), chart.clone()));
            }
            files.push((
                format!("xl/drawings/drawing{n}.xml"),
                format!(
                    r#"<xdr:wsDr xmlns:xdr="{NS_SS_DRAWING}" xmlns:a="{NS_DRAWING}" xmlns:c="{NS_CHART}" xmlns:r="{NS_REL}">{anchors}</xdr:wsDr>"#
                ),
            ));
            files.push((
                format!("xl/drawings/_rels/drawing{n}.xml.rels"),
                format!(r#"<Relationships xmlns="{NS_PKG_REL}">{drawing_rels}</Relationships>"#),
            ));
        }

        let defined_names: String = self
            .defined_names
            .iter()
            .map(|(name, formula)| {
                format!(r#"<definedName name="{}">{}</definedName>"#, escape(name), escape(formula))
            })
            .collect();
        files.push((
            "xl/workbook.xml".into(),
            format!(
                r#"<workbook xmlns="{NS_MAIN}" xmlns:r="{NS_REL}"><sheets>{sheets_xml}</sheets><definedNames>{defined_names}</definedNames></workbook>"#
            ),
        ));
        files.push((
            "xl/_rels/workbook.xml.rels".into(),
            format!(r#"<Relationships xmlns="{NS_PKG_REL}">{sheet_rels}</Relationships>"#),
        ));

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in files {
            writer.start_file(name, SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}

fn sheet_data(cells: &[(String, String)]) -> String {
    let mut rows: BTreeMap<u32, String> = BTreeMap::new();
    for (reference, value) in cells {
        let row: u32 = reference
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .unwrap();
        let cell = if value.parse::<f64>().is_ok() {
            format!(r#"<c r="{reference}"><v>{value}</v></c>"#)
        } else {
            format!(r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#, escape(value))
        };
        rows.entry(row).or_default().push_str(&cell);
    }
    rows.into_iter()
        .map(|(row, cells)| format!(r#"<row r="{row}">{cells}</row>"#))
        .collect()
}

pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A `c:chartSpace` document around a plot area body.
pub fn chart_space(title: Option<&str>, plot_area: &str, legend: bool) -> String {
    let title = title
        .map(|t| {
            format!(
                r#"<c:title><c:tx><c:rich><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p></c:rich></c:tx><c:overlay val="0"/></c:title><c:autoTitleDeleted val="0"/>"#,
                escape(t)
            )
        })
        .unwrap_or_else(|| r#"<c:autoTitleDeleted val="1"/>"#.to_string());
    let legend = if legend {
        r#"<c:legend><c:legendPos val="r"/><c:overlay val="0"/></c:legend>"#
    } else {
        ""
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><c:chartSpace xmlns:c="{NS_CHART}" xmlns:a="{NS_DRAWING}" xmlns:r="{NS_REL}"><c:date1904 val="0"/><c:chart>{title}<c:plotArea><c:layout/>{plot_area}</c:plotArea>{legend}<c:plotVisOnly val="1"/></c:chart></c:chartSpace>"#
    )
}

/// Category series: `cat` and `val` are reference formulas.
pub fn cat_series(idx: u32, name: Option<&str>, cat: Option<&str>, val: &str, format: &str) -> String {
    let tx = name
        .map(|n| format!("<c:tx><c:v>{}</c:v></c:tx>", escape(n)))
        .unwrap_or_default();
    let cat = cat
        .map(|f| format!("<c:cat><c:strRef><c:f>{}</c:f></c:strRef></c:cat>", escape(f)))
        .unwrap_or_default();
    format!(
        r#"<c:ser><c:idx val="{idx}"/><c:order val="{idx}"/>{tx}{cat}<c:val><c:numRef><c:f>{}</c:f><c:numCache><c:formatCode>{}</c:formatCode></c:numCache></c:numRef></c:val></c:ser>"#,
        escape(val),
        escape(format)
    )
}

/// Scatter series: `x` and `y` are reference formulas.
pub fn xy_series(idx: u32, name: Option<&str>, x: Option<&str>, y: &str) -> String {
    let tx = name
        .map(|n| format!("<c:tx><c:v>{}</c:v></c:tx>", escape(n)))
        .unwrap_or_default();
    let x = x
        .map(|f| {
            format!(
                "<c:xVal><c:numRef><c:f>{}</c:f><c:numCache><c:formatCode>General</c:formatCode></c:numCache></c:numRef></c:xVal>",
                escape(f)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<c:ser><c:idx val="{idx}"/><c:order val="{idx}"/>{tx}{x}<c:yVal><c:numRef><c:f>{}</c:f></c:numRef></c:yVal><c:smooth val="0"/></c:ser>"#,
        escape(y)
    )
}

/// A value and a category axis pair with ids 1 and 2.
pub fn cat_val_axes(x_title: Option<&str>, y_title: Option<&str>) -> String {
    format!(
        r#"<c:catAx><c:axId val="1"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="b"/>{}<c:crossAx val="2"/></c:catAx><c:valAx><c:axId val="2"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="l"/>{}<c:crossAx val="1"/></c:valAx>"#,
        axis_title(x_title),
        axis_title(y_title)
    )
}

/// Two value axes with ids 1 (bottom) and 2 (left).
pub fn val_val_axes(x_title: Option<&str>, y_title: Option<&str>) -> String {
    format!(
        r#"<c:valAx><c:axId val="1"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="b"/>{}<c:crossAx val="2"/></c:valAx><c:valAx><c:axId val="2"/><c:scaling><c:orientation val="minMax"/></c:scaling><c:delete val="0"/><c:axPos val="l"/>{}<c:crossAx val="1"/></c:valAx>"#,
        axis_title(x_title),
        axis_title(y_title)
    )
}

fn axis_title(title: Option<&str>) -> String {
    title
        .map(|t| {
            format!(
                r#"<c:title><c:tx><c:rich><a:p><a:r><a:t>{}</a:t></a:r></a:p></c:rich></c:tx></c:title>"#,
                escape(t)
            )
        })
        .unwrap_or_default()
}

pub const AXIS_IDS: &str = r#"<c:axId val="1"/><c:axId val="2"/>"#;
