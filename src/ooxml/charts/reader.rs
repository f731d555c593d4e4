//! Chart XML reader.
//!
//! Parses a chart part (`xl/charts/chartN.xml`, root `c:chartSpace`) into a
//! [`Chart`]. Elements are matched on local names so both `c:` prefixed and
//! default-namespace documents are read.

use crate::ooxml::charts::axis::{Axis, NumberFormat, Scaling};
use crate::ooxml::charts::chart::Chart;
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{DataKind, DataSource, SeriesName};
use crate::ooxml::charts::plot_area::{PlotArea, TypeGroup};
use crate::ooxml::charts::series::Series;
use crate::ooxml::charts::types::{
    AxisOrientation, AxisPosition, AxisType, BarDirection, ChartType, Grouping, LegendPosition,
    ScatterStyle,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::xlsx::cell::{CellValue, MAX_ROWS};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

type XmlReader<'x> = Reader<&'x [u8]>;

/// Parse a chart part.
pub fn parse_chart_space(xml: &[u8]) -> Result<Chart> {
    let mut reader = Reader::from_reader(xml);
    let mut chart = Chart::new();
    let mut found_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if !found_root && e.local_name().as_ref() == b"chartSpace" => {
                found_root = true;
                parse_chart_space_children(&mut reader, &mut chart)?;
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    if !found_root {
        return Err(OoxmlError::InvalidFormat(
            "chart part has no chartSpace element".to_string(),
        ));
    }
    Ok(chart)
}

/// Walk the children of the element whose start tag was just read.
///
/// `visit` gets each child start tag and whether it has content, and returns
/// `true` when it consumed that content. Content left unread is skipped, so
/// the walk always stays on the sibling level and ends at the parent's end tag.
fn for_each_child<'x, F>(reader: &mut XmlReader<'x>, mut visit: F) -> Result<()>
where
    F: FnMut(&mut XmlReader<'x>, &BytesStart<'_>, bool) -> Result<bool>,
{
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if !visit(reader, e, true)? {
                    let mut skipped = Vec::new();
                    reader.read_to_end_into(e.name(), &mut skipped)?;
                }
            },
            Event::Empty(ref e) => {
                visit(reader, e, false)?;
            },
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(OoxmlError::Xml("unexpected end of chart XML".to_string()));
            },
            _ => {},
        }
        buf.clear();
    }
}

/// Text content up to the end tag of the element just opened.
fn read_text(reader: &mut XmlReader<'_>) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            },
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Eof => {
                return Err(OoxmlError::Xml("unexpected end of chart XML".to_string()));
            },
            _ => {},
        }
        buf.clear();
    }

    Ok(text)
}

fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[inline]
fn val(e: &BytesStart<'_>) -> Result<Option<String>> {
    attr_value(e, b"val")
}

/// `CT_Boolean`: a missing `val` means true.
fn bool_val(e: &BytesStart<'_>) -> Result<bool> {
    Ok(match val(e)?.as_deref() {
        None | Some("1") | Some("true") => true,
        Some(_) => false,
    })
}

fn u32_val(e: &BytesStart<'_>) -> Result<Option<u32>> {
    Ok(val(e)?.and_then(|v| atoi_simd::parse::<u32>(v.trim().as_bytes()).ok()))
}

fn f64_val(e: &BytesStart<'_>) -> Result<Option<f64>> {
    Ok(val(e)?.and_then(|v| fast_float2::parse::<f64, _>(v.trim()).ok()))
}

fn parse_chart_space_children(reader: &mut XmlReader<'_>, chart: &mut Chart) -> Result<()> {
    for_each_child(reader, |reader, e, has_body| {
        match e.local_name().as_ref() {
            b"date1904" => chart.date_1904 = bool_val(e)?,
            b"chart" if has_body => {
                parse_chart_element(reader, chart)?;
                return Ok(true);
            },
            _ => {},
        }
        Ok(false)
    })
}

fn parse_chart_element(reader: &mut XmlReader<'_>, chart: &mut Chart) -> Result<()> {
    for_each_child(reader, |reader, e, has_body| {
        match e.local_name().as_ref() {
            b"title" if has_body => {
                chart.title = parse_title(reader)?;
                return Ok(true);
            },
            b"autoTitleDeleted" => chart.auto_title_deleted = bool_val(e)?,
            b"plotArea" if has_body => {
                chart.plot_area = parse_plot_area(reader)?;
                return Ok(true);
            },
            b"legend" if has_body => {
                chart.legend = Some(parse_legend(reader)?);
                return Ok(true);
            },
            b"legend" => chart.legend = Some(Legend::default()),
            b"plotVisOnly" => chart.plot_visible_only = bool_val(e)?,
            _ => {},
        }
        Ok(false)
    })
}

/// Title text of a chart or axis `c:title`; `None` when it has no text.
fn parse_title(reader: &mut XmlReader<'_>) -> Result<Option<String>> {
    let mut title = None;
    for_each_child(reader, |reader, e, has_body| {
        if has_body && e.local_name().as_ref() == b"tx" {
            title = parse_title_text(reader)?;
            return Ok(true);
        }
        Ok(false)
    })?;
    Ok(title.filter(|t| !t.is_empty()))
}

fn parse_title_text(reader: &mut XmlReader<'_>) -> Result<Option<String>> {
    let mut text = None;
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        match e.local_name().as_ref() {
            b"rich" => {
                text = Some(parse_first_paragraph(reader)?);
                Ok(true)
            },
            b"strRef" => {
                let source = parse_reference(reader, DataKind::String)?;
                text = first_text(&source.points);
                Ok(true)
            },
            _ => Ok(false),
        }
    })?;
    Ok(text)
}

/// Runs of the first `a:p` of a rich text body, concatenated.
fn parse_first_paragraph(reader: &mut XmlReader<'_>) -> Result<String> {
    let mut text = String::new();
    let mut seen = false;
    for_each_child(reader, |reader, e, has_body| {
        if e.local_name().as_ref() != b"p" || seen {
            return Ok(false);
        }
        seen = true;
        if has_body {
            collect_runs(reader, &mut text)?;
            return Ok(true);
        }
        Ok(false)
    })?;
    Ok(text)
}

/// Append the text of every `a:t` below the element just opened.
fn collect_runs(reader: &mut XmlReader<'_>, out: &mut String) -> Result<()> {
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        if e.local_name().as_ref() == b"t" {
            out.push_str(&read_text(reader)?);
        } else {
            collect_runs(reader, out)?;
        }
        Ok(true)
    })
}

fn first_text(points: &[CellValue]) -> Option<String> {
    points
        .iter()
        .find(|p| !p.is_empty())
        .map(|p| p.to_string())
}

fn parse_plot_area(reader: &mut XmlReader<'_>) -> Result<PlotArea> {
    let mut plot_area = PlotArea::new();
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        let name = e.local_name();
        if let Some(axis_type) = AxisType::from_element_name(name.as_ref()) {
            plot_area.axes.push(parse_axis(reader, axis_type)?);
            return Ok(true);
        }
        let element = std::str::from_utf8(name.as_ref()).unwrap_or_default();
        if let Some(chart_type) = ChartType::from_element_name(element) {
            plot_area.type_groups.push(parse_type_group(reader, chart_type)?);
            return Ok(true);
        }
        Ok(false)
    })?;
    Ok(plot_area)
}

fn parse_type_group(reader: &mut XmlReader<'_>, chart_type: ChartType) -> Result<TypeGroup> {
    let mut group = TypeGroup::new(chart_type);
    for_each_child(reader, |reader, e, has_body| {
        match e.local_name().as_ref() {
            b"ser" if has_body => {
                group.add_series(parse_series(reader)?);
                return Ok(true);
            },
            b"barDir" => {
                group.bar_direction = val(e)?.as_deref().and_then(BarDirection::from_xml_value);
            },
            b"grouping" => {
                group.grouping = val(e)?.as_deref().and_then(Grouping::from_xml_value);
            },
            b"scatterStyle" => {
                group.scatter_style = val(e)?.as_deref().and_then(ScatterStyle::from_xml_value);
            },
            b"marker" => group.show_markers = Some(bool_val(e)?),
            b"holeSize" => group.hole_size = u32_val(e)?,
            b"varyColors" => group.vary_colors = bool_val(e)?,
            b"axId" => {
                if let Some(id) = u32_val(e)? {
                    group.axis_ids.push(id);
                }
            },
            _ => {},
        }
        Ok(false)
    })?;
    Ok(group)
}

fn parse_series(reader: &mut XmlReader<'_>) -> Result<Series> {
    let mut series = Series::default();
    let mut order = None;
    for_each_child(reader, |reader, e, has_body| {
        match (e.local_name().as_ref(), has_body) {
            (b"idx", _) => series.index = u32_val(e)?.unwrap_or(0),
            (b"order", _) => order = u32_val(e)?,
            (b"smooth", _) => series.smooth = Some(bool_val(e)?),
            (b"tx", true) => {
                series.name = parse_series_name(reader)?;
                return Ok(true);
            },
            (b"cat", true) => {
                series.categories = parse_data_source(reader)?;
                return Ok(true);
            },
            (b"val", true) => {
                series.values = parse_data_source(reader)?;
                return Ok(true);
            },
            (b"xVal", true) => {
                series.x_values = parse_data_source(reader)?;
                return Ok(true);
            },
            (b"yVal", true) => {
                series.y_values = parse_data_source(reader)?;
                return Ok(true);
            },
            (b"spPr", true) => {
                series.line_hidden = parse_line_hidden(reader)?;
                return Ok(true);
            },
            (b"marker", true) => {
                series.marker_none = parse_marker_none(reader)?;
                return Ok(true);
            },
            _ => {},
        }
        Ok(false)
    })?;
    series.order = order.unwrap_or(series.index);
    Ok(series)
}

fn parse_series_name(reader: &mut XmlReader<'_>) -> Result<Option<SeriesName>> {
    let mut name = None;
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        match e.local_name().as_ref() {
            b"v" => {
                name = Some(SeriesName::Literal(read_text(reader)?));
                Ok(true)
            },
            b"strRef" => {
                let source = parse_reference(reader, DataKind::String)?;
                name = Some(SeriesName::Reference {
                    formula: source.formula.unwrap_or_default(),
                    cache: first_text(&source.points),
                });
                Ok(true)
            },
            _ => Ok(false),
        }
    })?;
    Ok(name)
}

/// Body of `c:cat`, `c:val`, `c:xVal` or `c:yVal`.
fn parse_data_source(reader: &mut XmlReader<'_>) -> Result<Option<DataSource>> {
    let mut source = None;
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        match e.local_name().as_ref() {
            b"numRef" => source = Some(parse_reference(reader, DataKind::Number)?),
            b"strRef" => source = Some(parse_reference(reader, DataKind::String)?),
            b"multiLvlStrRef" => source = Some(parse_reference(reader, DataKind::MultiLevel)?),
            b"numLit" => source = Some(parse_literal(reader, DataKind::Number)?),
            b"strLit" => source = Some(parse_literal(reader, DataKind::String)?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(source)
}

/// `numRef`, `strRef` or `multiLvlStrRef`: a formula plus its cache.
fn parse_reference(reader: &mut XmlReader<'_>, kind: DataKind) -> Result<DataSource> {
    let mut source = DataSource {
        kind,
        ..DataSource::default()
    };
    for_each_child(reader, |reader, e, has_body| {
        if !has_body {
            return Ok(false);
        }
        match e.local_name().as_ref() {
            b"f" => {
                let formula = read_text(reader)?;
                source.formula = Some(formula.trim().to_string());
            },
            b"numCache" | b"strCache" | b"multiLvlStrCache" => {
                let cache = parse_points(reader, kind)?;
                source.format_code = cache.format_code;
                source.points = cache.points;
            },
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    Ok(source)
}

fn parse_literal(reader: &mut XmlReader<'_>, kind: DataKind) -> Result<DataSource> {
    let cache = parse_points(reader, kind)?;
    let mut source = DataSource::from_points(kind, cache.points);
    source.format_code = cache.format_code;
    Ok(source)
}

struct PointCache {
    format_code: Option<String>,
    points: Vec<CellValue>,
}

/// Upper bound on the points of one cache, a full worksheet column.
const MAX_POINTS: usize = MAX_ROWS as usize;

/// Points of a cache or literal. Multi-level caches keep the first level,
/// which holds the innermost labels. Points at or past `ptCount` are dropped.
fn parse_points(reader: &mut XmlReader<'_>, kind: DataKind) -> Result<PointCache> {
    let mut format_code = None;
    let mut count = 0usize;
    let mut raw: Vec<(usize, String)> = Vec::new();
    let mut first_level: Option<PointCache> = None;

    for_each_child(reader, |reader, e, has_body| {
        match e.local_name().as_ref() {
            b"ptCount" => count = (u32_val(e)?.unwrap_or(0) as usize).min(MAX_POINTS),
            b"formatCode" if has_body => {
                format_code = Some(read_text(reader)?);
                return Ok(true);
            },
            b"pt" if has_body => {
                let idx = attr_value(e, b"idx")?
                    .and_then(|v| atoi_simd::parse::<usize>(v.trim().as_bytes()).ok())
                    .unwrap_or(raw.len());
                let mut text = None;
                for_each_child(reader, |reader, e, has_body| {
                    if has_body && e.local_name().as_ref() == b"v" {
                        text = Some(read_text(reader)?);
                        return Ok(true);
                    }
                    Ok(false)
                })?;
                if let Some(text) = text {
                    raw.push((idx, text));
                }
                return Ok(true);
            },
            b"lvl" if has_body && first_level.is_none() => {
                first_level = Some(parse_points(reader, kind)?);
                return Ok(true);
            },
            _ => {},
        }
        Ok(false)
    })?;

    if let Some(mut level) = first_level {
        if level.points.len() < count {
            level.points.resize(count, CellValue::Empty);
        }
        level.format_code = format_code.or(level.format_code);
        return Ok(level);
    }

    let limit = if count > 0 { count } else { MAX_POINTS };
    raw.retain(|(idx, _)| *idx < limit);
    let len = raw.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0).max(count);
    let mut points = vec![CellValue::Empty; len];
    for (idx, text) in raw {
        points[idx] = match kind {
            DataKind::Number => CellValue::from_number_text(text.trim()),
            DataKind::String | DataKind::MultiLevel => CellValue::String(text),
        };
    }

    Ok(PointCache {
        format_code,
        points,
    })
}

/// Whether a series `c:spPr` hides the line (`a:ln/a:noFill`).
fn parse_line_hidden(reader: &mut XmlReader<'_>) -> Result<bool> {
    let mut hidden = false;
    for_each_child(reader, |reader, e, has_body| {
        if has_body && e.local_name().as_ref() == b"ln" {
            for_each_child(reader, |_, e, _| {
                if e.local_name().as_ref() == b"noFill" {
                    hidden = true;
                }
                Ok(false)
            })?;
            return Ok(true);
        }
        Ok(false)
    })?;
    Ok(hidden)
}

/// Whether a series `c:marker` sets the symbol to `none`.
fn parse_marker_none(reader: &mut XmlReader<'_>) -> Result<bool> {
    let mut none = false;
    for_each_child(reader, |_, e, _| {
        if e.local_name().as_ref() == b"symbol" {
            none = val(e)?.as_deref() == Some("none");
        }
        Ok(false)
    })?;
    Ok(none)
}

fn parse_axis(reader: &mut XmlReader<'_>, axis_type: AxisType) -> Result<Axis> {
    let mut axis = Axis::new(axis_type, 0);
    for_each_child(reader, |reader, e, has_body| {
        match e.local_name().as_ref() {
            b"axId" => axis.id = u32_val(e)?.unwrap_or(0),
            b"crossAx" => axis.cross_axis = u32_val(e)?,
            b"axPos" => axis.position = val(e)?.as_deref().and_then(AxisPosition::from_xml_value),
            b"delete" => axis.deleted = bool_val(e)?,
            b"numFmt" => {
                axis.number_format = attr_value(e, b"formatCode")?.map(|format_code| NumberFormat {
                    format_code,
                    source_linked: matches!(
                        attr_value(e, b"sourceLinked").ok().flatten().as_deref(),
                        Some("1") | Some("true")
                    ),
                });
            },
            b"title" if has_body => {
                axis.title = parse_title(reader)?;
                return Ok(true);
            },
            b"scaling" if has_body => {
                axis.scaling = parse_scaling(reader)?;
                return Ok(true);
            },
            _ => {},
        }
        Ok(false)
    })?;
    Ok(axis)
}

fn parse_scaling(reader: &mut XmlReader<'_>) -> Result<Scaling> {
    let mut scaling = Scaling::default();
    for_each_child(reader, |_, e, _| {
        match e.local_name().as_ref() {
            b"orientation" => {
                scaling.orientation = val(e)?
                    .as_deref()
                    .and_then(AxisOrientation::from_xml_value)
                    .unwrap_or_default();
            },
            b"min" => scaling.min = f64_val(e)?,
            b"max" => scaling.max = f64_val(e)?,
            b"logBase" => scaling.log_base = f64_val(e)?,
            _ => {},
        }
        Ok(false)
    })?;
    Ok(scaling)
}

fn parse_legend(reader: &mut XmlReader<'_>) -> Result<Legend> {
    let mut legend = Legend::default();
    for_each_child(reader, |_, e, _| {
        match e.local_name().as_ref() {
            b"legendPos" => {
                if let Some(position) = val(e)?.as_deref().and_then(LegendPosition::from_xml_value) {
                    legend.position = position;
                }
            },
            b"overlay" => legend.overlay = bool_val(e)?,
            _ => {},
        }
        Ok(false)
    })?;
    Ok(legend)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_CHART: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <c:date1904 val="0"/>
  <c:chart>
    <c:title>
      <c:tx><c:rich><a:bodyPr/><a:p><a:pPr><a:defRPr/></a:pPr><a:r><a:rPr lang="en-US"/><a:t>Force</a:t></a:r><a:r><a:t> (kN)</a:t></a:r></a:p><a:p><a:r><a:t>second line</a:t></a:r></a:p></c:rich></c:tx>
      <c:overlay val="0"/>
    </c:title>
    <c:autoTitleDeleted val="0"/>
    <c:plotArea>
      <c:layout/>
      <c:lineChart>
        <c:grouping val="standard"/>
        <c:varyColors val="0"/>
        <c:ser>
          <c:idx val="0"/><c:order val="0"/>
          <c:tx><c:strRef><c:f>Data!$B$1</c:f><c:strCache><c:ptCount val="1"/><c:pt idx="0"><c:v>Load A</c:v></c:pt></c:strCache></c:strRef></c:tx>
          <c:spPr><a:ln w="28575"><a:solidFill><a:schemeClr val="accent1"/></a:solidFill></a:ln></c:spPr>
          <c:marker><c:symbol val="none"/></c:marker>
          <c:cat><c:strRef><c:f>Data!$A$2:$A$4</c:f><c:strCache><c:ptCount val="3"/><c:pt idx="0"><c:v>Mon</c:v></c:pt><c:pt idx="2"><c:v>Wed</c:v></c:pt></c:strCache></c:strRef></c:cat>
          <c:val><c:numRef><c:f>Data!$B$2:$B$4</c:f><c:numCache><c:formatCode>0.0</c:formatCode><c:ptCount val="3"/><c:pt idx="0"><c:v>1</c:v></c:pt><c:pt idx="1"><c:v>2.5</c:v></c:pt><c:pt idx="2"><c:v>4</c:v></c:pt></c:numCache></c:numRef></c:val>
          <c:smooth val="1"/>
        </c:ser>
        <c:ser>
          <c:idx val="1"/><c:order val="1"/>
          <c:tx><c:v>Literal name</c:v></c:tx>
          <c:val><c:numLit><c:formatCode>General</c:formatCode><c:ptCount val="2"/><c:pt idx="1"><c:v>7</c:v></c:pt></c:numLit></c:val>
        </c:ser>
        <c:marker val="1"/>
        <c:axId val="500"/>
        <c:axId val="600"/>
      </c:lineChart>
      <c:catAx>
        <c:axId val="500"/>
        <c:scaling><c:orientation val="minMax"/></c:scaling>
        <c:delete val="0"/>
        <c:axPos val="b"/>
        <c:title><c:tx><c:rich><a:p><a:r><a:t>Day</a:t></a:r></a:p></c:rich></c:tx></c:title>
        <c:crossAx val="600"/>
      </c:catAx>
      <c:valAx>
        <c:axId val="600"/>
        <c:scaling><c:logBase val="10"/><c:orientation val="maxMin"/><c:max val="100"/><c:min val="0.5"/></c:scaling>
        <c:delete val="0"/>
        <c:axPos val="l"/>
        <c:numFmt formatCode="0.00%" sourceLinked="0"/>
        <c:crossAx val="500"/>
      </c:valAx>
    </c:plotArea>
    <c:legend><c:legendPos val="b"/><c:overlay val="0"/></c:legend>
    <c:plotVisOnly val="1"/>
  </c:chart>
</c:chartSpace>"#;

    #[test]
    fn test_parse_line_chart() {
        let chart = parse_chart_space(LINE_CHART.as_bytes()).unwrap();

        assert_eq!(chart.title.as_deref(), Some("Force (kN)"));
        assert!(!chart.date_1904);
        assert!(chart.plot_visible_only);
        assert_eq!(chart.legend.as_ref().map(|l| l.position), Some(LegendPosition::Bottom));
        assert_eq!(chart.chart_type(), Some(ChartType::Line));
        assert_eq!(chart.series_count(), 2);

        let group = chart.primary_group().unwrap();
        assert_eq!(group.grouping, Some(Grouping::Standard));
        assert_eq!(group.show_markers, Some(true));
        assert_eq!(group.axis_ids, vec![500, 600]);

        let first = &group.series[0];
        assert_eq!(
            first.name,
            Some(SeriesName::Reference {
                formula: "Data!$B$1".into(),
                cache: Some("Load A".into()),
            })
        );
        assert!(first.marker_none);
        assert!(!first.line_hidden);
        assert_eq!(first.smooth, Some(true));

        let categories = first.categories.as_ref().unwrap();
        assert_eq!(categories.kind, DataKind::String);
        assert_eq!(categories.formula.as_deref(), Some("Data!$A$2:$A$4"));
        assert_eq!(
            categories.points,
            vec![CellValue::String("Mon".into()), CellValue::Empty, CellValue::String("Wed".into())]
        );

        let values = first.values.as_ref().unwrap();
        assert_eq!(values.format_code.as_deref(), Some("0.0"));
        assert_eq!(
            values.points,
            vec![CellValue::Int(1), CellValue::Float(2.5), CellValue::Int(4)]
        );

        let second = &group.series[1];
        assert_eq!(second.name, Some(SeriesName::Literal("Literal name".into())));
        let literal = second.values.as_ref().unwrap();
        assert!(literal.literal);
        assert_eq!(literal.points, vec![CellValue::Empty, CellValue::Int(7)]);
        assert!(second.categories.is_none());
    }

    #[test]
    fn test_parse_axes() {
        let chart = parse_chart_space(LINE_CHART.as_bytes()).unwrap();
        let axes = &chart.plot_area.axes;
        assert_eq!(axes.len(), 2);

        assert_eq!(axes[0].axis_type, AxisType::Category);
        assert_eq!(axes[0].title.as_deref(), Some("Day"));
        assert_eq!(axes[0].position, Some(AxisPosition::Bottom));
        assert_eq!(axes[0].cross_axis, Some(600));

        let value_axis = chart.plot_area.axis(600).unwrap();
        assert!(value_axis.scaling.is_reversed());
        assert_eq!(value_axis.scaling.log_base, Some(10.0));
        assert_eq!(value_axis.scaling.min, Some(0.5));
        assert_eq!(value_axis.scaling.max, Some(100.0));
        assert_eq!(
            value_axis.number_format,
            Some(NumberFormat {
                format_code: "0.00%".into(),
                source_linked: false,
            })
        );
    }

    #[test]
    fn test_untitled_scatter_chart() {
        let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
  <c:chart>
    <c:autoTitleDeleted val="1"/>
    <c:plotArea>
      <c:scatterChart>
        <c:scatterStyle val="lineMarker"/>
        <c:ser>
          <c:idx val="3"/>
          <c:spPr><a:ln w="19050"><a:noFill/></a:ln></c:spPr>
          <c:xVal><c:numRef><c:f>Sheet1!$A$2:$A$4</c:f></c:numRef></c:xVal>
          <c:yVal><c:numRef><c:f>Sheet1!$B$2:$B$4</c:f></c:numRef></c:yVal>
        </c:ser>
      </c:scatterChart>
    </c:plotArea>
  </c:chart>
</c:chartSpace>"#;
        let chart = parse_chart_space(xml.as_bytes()).unwrap();
        assert_eq!(chart.title, None);
        assert!(chart.auto_title_deleted);
        assert!(chart.legend.is_none());

        let group = chart.primary_group().unwrap();
        assert_eq!(group.scatter_style, Some(ScatterStyle::LineMarker));
        let series = &group.series[0];
        assert_eq!(series.order, 3);
        assert!(series.line_hidden);
        assert!(series.x_values.is_some());
        assert!(series.y_values.as_ref().unwrap().points.is_empty());
    }

    #[test]
    fn test_combo_and_doughnut_groups() {
        let xml = r#"<chartSpace xmlns="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <chart>
    <title><overlay val="0"/></title>
    <plotArea>
      <barChart><barDir val="bar"/><grouping val="percentStacked"/><ser><idx val="0"/></ser></barChart>
      <doughnutChart><holeSize val="60"/><ser><idx val="1"/></ser></doughnutChart>
      <radarChart><radarStyle val="marker"/></radarChart>
    </plotArea>
    <legend/>
  </chart>
</chartSpace>"#;
        let chart = parse_chart_space(xml.as_bytes()).unwrap();
        assert_eq!(chart.title, None);
        assert!(chart.legend.is_some());

        let groups = &chart.plot_area.type_groups;
        let types: Vec<ChartType> = groups.iter().map(|g| g.chart_type).collect();
        assert_eq!(types, vec![ChartType::Bar, ChartType::Doughnut, ChartType::Radar]);
        assert!(groups[0].is_horizontal());
        assert_eq!(groups[0].grouping, Some(Grouping::PercentStacked));
        assert_eq!(groups[1].hole_size, Some(60));
    }

    #[test]
    fn test_title_from_cell_reference() {
        let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <c:chart>
    <c:title><c:tx><c:strRef><c:f>Sheet1!$D$1</c:f><c:strCache><c:ptCount val="1"/><c:pt idx="0"><c:v>Deflection &amp; rotation</c:v></c:pt></c:strCache></c:strRef></c:tx></c:title>
    <c:plotArea><c:pieChart><c:varyColors val="1"/></c:pieChart></c:plotArea>
  </c:chart>
</c:chartSpace>"#;
        let chart = parse_chart_space(xml.as_bytes()).unwrap();
        assert_eq!(chart.title.as_deref(), Some("Deflection & rotation"));
        assert!(chart.primary_group().unwrap().vary_colors);
    }

    #[test]
    fn test_points_past_count_are_dropped() {
        let xml = r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart">
  <c:chart>
    <c:plotArea>
      <c:lineChart>
        <c:ser>
          <c:idx val="0"/>
          <c:val><c:numRef><c:f>Data!$B$2</c:f><c:numCache><c:ptCount val="1"/><c:pt idx="0"><c:v>2</c:v></c:pt><c:pt idx="4000000000"><c:v>9</c:v></c:pt></c:numCache></c:numRef></c:val>
        </c:ser>
        <c:ser>
          <c:idx val="1"/>
          <c:val><c:numLit><c:pt idx="3000000"><c:v>1</c:v></c:pt><c:pt idx="1"><c:v>5</c:v></c:pt></c:numLit></c:val>
        </c:ser>
        <c:ser>
          <c:idx val="2"/>
          <c:val><c:numLit><c:ptCount val="4000000000"/></c:numLit></c:val>
        </c:ser>
      </c:lineChart>
    </c:plotArea>
  </c:chart>
</c:chartSpace>"#;
        let chart = parse_chart_space(xml.as_bytes()).unwrap();
        let group = chart.primary_group().unwrap();

        let cached = group.series[0].values.as_ref().unwrap();
        assert_eq!(cached.points, vec![CellValue::Int(2)]);

        let uncounted = group.series[1].values.as_ref().unwrap();
        assert_eq!(uncounted.points, vec![CellValue::Empty, CellValue::Int(5)]);

        let oversized = group.series[2].values.as_ref().unwrap();
        assert_eq!(oversized.points.len(), MAX_POINTS);
    }

    #[test]
    fn test_rejects_non_chart_parts() {
        assert!(parse_chart_space(b"<worksheet/>").is_err());
        assert!(parse_chart_space(b"<c:chartSpace xmlns:c=\"x\"><c:chart>").is_err());
    }
}
