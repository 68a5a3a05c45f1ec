//! Show one associate's grid, totals and chart.

use agent_map_core::Config;
use agent_map_core::export::{format_mapping_json, format_record_console};
use anyhow::{Context, Result};

use super::format_chart_bars;
use crate::cli_utils;

pub fn run(config: &Config, name: &str, json: bool) -> Result<()> {
    let mut session = cli_utils::open_session(config)?;
    cli_utils::open_existing(&mut session, name)?;
    let record = session.current().context("associate not open")?;

    if json {
        println!("{}", format_mapping_json(record)?);
        return Ok(());
    }

    println!("{}", format_record_console(record));
    println!();
    println!("FOCUS SEGMENTATION");
    println!("{}", format_chart_bars(&record.scores.compute_totals()));
    Ok(())
}
