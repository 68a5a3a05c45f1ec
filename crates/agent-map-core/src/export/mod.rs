//! Export formats for associate records.
//!
//! - CSV of segment totals
//! - JSON dump of the full mapping
//! - Plain-text report with focus recommendations
//! - Coloured console view of the grid
//! - Pie chart of the totals (SVG)

mod chart;
mod console;
mod recommend;
mod report;

pub use chart::{PieChart, PieSlice};
pub use console::{format_associates_console, format_record_console};
pub use recommend::recommendations;
pub use report::format_report;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use strum::{EnumString, IntoStaticStr};

use crate::error::Result;
use crate::grid::{Segment, Totals};
use crate::record::{AssociateRecord, MappingExport};

/// Output kinds offered for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Svg,
    Report,
}

impl ExportFormat {
    /// Suffix appended to the associate name for the default file name
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Json => "_map1.json",
            Self::Csv => "_totals.csv",
            Self::Svg => "_chart.svg",
            Self::Report => "_report.txt",
        }
    }

    /// `Alex Tan` -> `Alex_Tan_map1.json`
    pub fn file_name(&self, key: &str) -> String {
        format!("{}{}", key.replace(' ', "_"), self.file_suffix())
    }
}

/// Width of the level label column in text tables
pub(crate) const LEVEL_COLUMN_WIDTH: usize = 12;

pub(crate) fn segment_column_width(segment: Segment) -> usize {
    segment.name().len().max(3)
}

/// `Segment,Total` header followed by one row per segment
pub fn format_totals_csv(totals: &Totals) -> String {
    let mut output = String::from("Segment,Total\n");
    for (segment, total) in totals.iter() {
        let _ = writeln!(output, "{},{}", csv_field(segment.name()), total);
    }
    output
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty JSON of `{profile, scores, totals}` with live totals
pub fn format_mapping_json(record: &AssociateRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MappingExport::from_record(record))?)
}

/// Render `record` in `format`
pub fn render(record: &AssociateRecord, format: ExportFormat, chart_size: (u32, u32)) -> Result<String> {
    match format {
        ExportFormat::Json => format_mapping_json(record),
        ExportFormat::Csv => Ok(format_totals_csv(&record.scores.compute_totals())),
        ExportFormat::Report => Ok(format_report(record)),
        ExportFormat::Svg => match PieChart::from_totals(&record.scores.compute_totals()) {
            Some(chart) => chart.render_svg(chart_size.0, chart_size.1),
            None => Err(crate::error::Error::Chart(
                "no scores entered yet, nothing to chart".to_string(),
            )),
        },
    }
}

/// Render and write an export, returning the path written
pub fn write_export(
    record: &AssociateRecord,
    format: ExportFormat,
    path: &Path,
    chart_size: (u32, u32),
) -> Result<PathBuf> {
    let content = render(record, format, chart_size)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::grid::Level;
    use tempfile::TempDir;

    #[test]
    fn test_totals_csv() {
        let mut record = AssociateRecord::new("Alex");
        record.scores.set_cell(Level::Interest, Segment::IndusComm, 3);
        record.scores.set_cell(Level::Support, Segment::IndusComm, 4);
        let csv = format_totals_csv(&record.scores.compute_totals());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Segment,Total");
        assert_eq!(lines[1], "HDB,0");
        assert_eq!(lines[7], "Indus/Comm,7");
        assert_eq!(lines[8], "Social Media,0");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("HDB"), "HDB");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_mapping_json_uses_live_totals() {
        let mut record = AssociateRecord::new("Alex");
        record.scores.set_cell(Level::Interest, Segment::Hdb, 2);
        let json = format_mapping_json(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["name"], "Alex");
        assert_eq!(value["scores"]["Interest"]["HDB"], 2);
        assert_eq!(value["scores"]["Interest"]["Landed"], "");
        assert_eq!(value["totals"]["HDB"], 2);
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Json.file_name("Alex Tan"), "Alex_Tan_map1.json");
        assert_eq!(ExportFormat::Csv.file_name("Alex Tan"), "Alex_Tan_totals.csv");
        assert_eq!("report".parse::<ExportFormat>().unwrap(), ExportFormat::Report);
    }

    #[test]
    fn test_svg_requires_scores() {
        let record = AssociateRecord::new("Alex");
        assert!(matches!(
            render(&record, ExportFormat::Svg, (400, 400)),
            Err(Error::Chart(_))
        ));
    }

    #[test]
    fn test_write_export() {
        let temp_dir = TempDir::new().unwrap();
        let record = AssociateRecord::new("Alex Tan");
        let path = temp_dir.path().join("out").join(ExportFormat::Csv.file_name("Alex Tan"));

        let written = write_export(&record, ExportFormat::Csv, &path, (400, 400)).unwrap();
        let content = fs::read_to_string(written).unwrap();
        assert!(content.starts_with("Segment,Total\nHDB,0\n"));
    }
}
