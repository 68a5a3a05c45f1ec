//! CLI command implementations.

pub mod edit;
pub mod export;
pub mod form;
pub mod list;
pub mod show;

use agent_map_core::{CellUpdate, PieChart, Totals};

/// One line per cleared or rejected cell
pub(crate) fn describe_warnings(update: &CellUpdate) -> Vec<String> {
    let mut lines = Vec::new();
    if update.rejected {
        lines.push(format!(
            "{} / {}: only numbers 1-8 are allowed, cell cleared",
            update.level, update.segment
        ));
    }
    for segment in &update.cleared {
        lines.push(format!(
            "{} / {}: number already used in this level, cell cleared",
            update.level, segment
        ));
    }
    lines
}

/// Text rendering of the totals pie: one bar per segment
pub(crate) fn format_chart_bars(totals: &Totals) -> String {
    let Some(chart) = PieChart::from_totals(totals) else {
        return "Totals will appear here once you enter scores.".to_string();
    };
    chart
        .slices()
        .iter()
        .map(|slice| {
            let bar = "█".repeat((slice.fraction * 40.0).round() as usize);
            format!(
                "{:<14} {:>4} {:<40} {:>4}",
                slice.segment.name(),
                slice.value,
                bar,
                slice.percent_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
