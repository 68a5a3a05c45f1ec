//! One-shot edits: set a cell, set a row, edit the profile.

use agent_map_core::{Config, Level, ProfileUpdate};
use anyhow::{Result, bail};

use super::describe_warnings;
use crate::cli_utils;

/// Set one cell and save
pub fn set(config: &Config, name: &str, level: &str, segment: &str, value: &str) -> Result<()> {
    let mut session = cli_utils::open_session(config)?;
    session.open(name)?;

    let update = session.set_cell_by_key(level, segment, value)?;
    for line in describe_warnings(&update) {
        eprintln!("warning: {}", line);
    }
    session.save()?;

    let totals = session.totals()?;
    let shown = update
        .stored
        .map(|rank| rank.to_string())
        .unwrap_or_else(|| "(empty)".to_string());
    println!(
        "{} / {} = {} ({} total: {})",
        update.level,
        update.segment,
        shown,
        update.segment,
        totals.get(update.segment)
    );
    Ok(())
}

/// Set a whole level row and save; "-" stands for an empty cell
pub fn row(config: &Config, name: &str, level: &str, values: &[String]) -> Result<()> {
    let level = Level::from_key(level)?;
    let inputs: Vec<&str> = values
        .iter()
        .map(|v| if v == "-" { "" } else { v.as_str() })
        .collect();

    let mut session = cli_utils::open_session(config)?;
    session.open(name)?;
    let updates = session.set_row(level, &inputs)?;
    for update in &updates {
        for line in describe_warnings(update) {
            eprintln!("warning: {}", line);
        }
    }
    session.save()?;

    let record = session.current();
    let complete = record.is_some_and(|r| r.scores.is_row_complete(level));
    println!(
        "{}: {}",
        level,
        if complete { "complete" } else { "incomplete" }
    );
    Ok(())
}

/// Edit contact fields and save
pub fn profile(config: &Config, name: &str, update: &ProfileUpdate) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update: pass --display-name, --mobile, --email or --manager");
    }
    let mut session = cli_utils::open_session(config)?;
    session.open(name)?;
    session.update_profile(update)?;
    session.save()?;
    println!("Saved profile for {}", name.trim());
    Ok(())
}
