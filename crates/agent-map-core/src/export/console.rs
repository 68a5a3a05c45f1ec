//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

use super::{LEVEL_COLUMN_WIDTH, segment_column_width};
use crate::grid::{Level, Segment, Totals};
use crate::record::AssociateRecord;

/// Grid with header, per-level rows and a totals footer.
///
/// Incomplete rows get a dimmed marker; the highest total is highlighted.
pub fn format_record_console(record: &AssociateRecord) -> String {
    let mut output = String::new();
    let totals = record.scores.compute_totals();
    let profile = &record.profile;

    let _ = writeln!(output, "  {}", profile.name.bold());
    let contact: Vec<&str> = [&profile.mobile, &profile.email, &profile.manager]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect();
    if !contact.is_empty() {
        let _ = writeln!(output, "  {}", contact.join(" / ").dimmed());
    }

    let mut header = format!("{:<LEVEL_COLUMN_WIDTH$}", "Level");
    for segment in Segment::iter() {
        let _ = write!(header, " {:^w$}", segment.name(), w = segment_column_width(segment));
    }
    let border = "━".repeat(header.chars().count());
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", border.dimmed());

    for level in Level::iter() {
        let _ = write!(output, "{:<LEVEL_COLUMN_WIDTH$}", level.name());
        for (segment, cell) in record.scores.row(level) {
            let width = segment_column_width(segment);
            match cell {
                Some(rank) => {
                    let _ = write!(output, " {:^width$}", rank.value());
                }
                None => {
                    let _ = write!(output, " {}", format!("{:^width$}", "·").dimmed());
                }
            }
        }
        if !record.scores.is_row_complete(level) {
            let _ = write!(output, "  {}", "incomplete".yellow());
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = write!(output, "{}", format!("{:<LEVEL_COLUMN_WIDTH$}", "TOTAL").bold());
    let best = best_total(&totals);
    for (segment, total) in totals.iter() {
        let cell = format!("{:^w$}", total, w = segment_column_width(segment));
        if Some(total) == best {
            let _ = write!(output, " {}", cell.green().bold());
        } else {
            let _ = write!(output, " {}", cell);
        }
    }
    let _ = writeln!(output);
    let _ = write!(output, "{}", border.dimmed());

    output
}

fn best_total(totals: &Totals) -> Option<u32> {
    totals.iter().map(|(_, total)| total).filter(|&t| t > 0).max()
}

/// Table of stored associates for the "view saved associates" listing
pub fn format_associates_console(records: &[(String, AssociateRecord)]) -> String {
    if records.is_empty() {
        return "No records yet.".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{}",
        format!(
            "{:<24} {:<14} {:<28} {:<18} {}",
            "Associate", "Mobile", "Email", "Manager", "Status"
        )
        .bold()
    );
    for (key, record) in records {
        let name = if record.profile.name.is_empty() {
            key.as_str()
        } else {
            record.profile.name.as_str()
        };
        let status = if record.is_complete() {
            "complete".green().to_string()
        } else {
            format!("{}/72", record.scores.filled_count()).yellow().to_string()
        };
        let _ = writeln!(
            output,
            "{:<24} {:<14} {:<28} {:<18} {}",
            name, record.profile.mobile, record.profile.email, record.profile.manager, status
        );
    }
    output.pop();
    output
}
