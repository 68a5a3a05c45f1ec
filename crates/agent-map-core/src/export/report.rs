use std::fmt::Write as _;

use strum::IntoEnumIterator;

use super::{LEVEL_COLUMN_WIDTH, recommendations, segment_column_width};
use crate::grid::{Level, Segment};
use crate::record::AssociateRecord;

/// Number of segments listed under "Focus segments"
const FOCUS_COUNT: usize = 3;

/// Plain-text report: profile, grid, totals and the top focus segments
pub fn format_report(record: &AssociateRecord) -> String {
    let mut output = String::new();
    let profile = &record.profile;
    let totals = record.scores.compute_totals();

    let _ = writeln!(output, "AGENT PROFILING MAP");
    let _ = writeln!(output, "===================");
    let _ = writeln!(output, "Associate : {}", profile.name);
    let _ = writeln!(output, "Mobile    : {}", or_dash(&profile.mobile));
    let _ = writeln!(output, "Email     : {}", or_dash(&profile.email));
    let _ = writeln!(output, "Manager   : {}", or_dash(&profile.manager));
    let _ = writeln!(output, "Created   : {}", record.created_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(output, "Updated   : {}", record.updated_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(output);

    let _ = write!(output, "{:<LEVEL_COLUMN_WIDTH$}", "Level");
    for segment in Segment::iter() {
        let _ = write!(output, " | {:^w$}", segment.name(), w = segment_column_width(segment));
    }
    let _ = writeln!(output);
    let rule_width = output.lines().last().map_or(0, str::len);
    let _ = writeln!(output, "{}", "-".repeat(rule_width));

    for level in Level::iter() {
        let _ = write!(output, "{:<LEVEL_COLUMN_WIDTH$}", level.name());
        for (segment, cell) in record.scores.row(level) {
            let value = cell.map(|rank| rank.to_string()).unwrap_or_default();
            let _ = write!(output, " | {:^w$}", value, w = segment_column_width(segment));
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "{}", "-".repeat(rule_width));
    let _ = write!(output, "{:<LEVEL_COLUMN_WIDTH$}", "TOTAL");
    for (segment, total) in totals.iter() {
        let _ = write!(output, " | {:^w$}", total, w = segment_column_width(segment));
    }
    let _ = writeln!(output);
    let _ = writeln!(output);

    let incomplete: Vec<&str> = Level::iter()
        .filter(|&level| !record.scores.is_row_complete(level))
        .map(|level| level.name())
        .collect();
    if incomplete.is_empty() {
        let _ = writeln!(output, "Status: complete");
    } else {
        let _ = writeln!(
            output,
            "Status: incomplete ({}/{} cells filled; unfinished levels: {})",
            record.scores.filled_count(),
            Level::iter().count() * Segment::iter().count(),
            incomplete.join(", ")
        );
    }
    let _ = writeln!(output);

    let focus = totals.top(FOCUS_COUNT);
    let _ = writeln!(output, "Focus segments");
    if focus.is_empty() {
        let _ = writeln!(output, "  (enter scores to see recommendations)");
    }
    for (i, (segment, total)) in focus.into_iter().enumerate() {
        let _ = writeln!(output, "{}. {} ({})", i + 1, segment, total);
        for tip in recommendations(segment) {
            let _ = writeln!(output, "   - {}", tip);
        }
    }

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_top_segments() {
        let mut record = AssociateRecord::new("Alex Tan");
        record
            .scores
            .set_row(Level::Interest, &[1, 2, 8, 3, 4, 7, 5, 6])
            .unwrap();
        let report = format_report(&record);

        assert!(report.contains("Associate : Alex Tan"));
        assert!(report.contains("Mobile    : -"));
        assert!(report.contains("1. Landed (8)"));
        assert!(report.contains("2. Referral (7)"));
        assert!(report.contains("3. Social Media (6)"));
        assert!(!report.contains("4. "));
        assert!(report.contains("Status: incomplete (8/72 cells filled"));
        assert!(!report.contains("unfinished levels: Interest,"));
    }

    #[test]
    fn test_report_without_scores() {
        let record = AssociateRecord::new("Sam");
        let report = format_report(&record);
        assert!(report.contains("(enter scores to see recommendations)"));
        assert!(report.contains("TOTAL"));
    }
}
