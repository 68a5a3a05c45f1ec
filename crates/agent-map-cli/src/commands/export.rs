//! Export command for writing an associate's mapping to a file.

use std::path::PathBuf;

use agent_map_core::Config;
use agent_map_core::export::{ExportFormat, write_export};
use anyhow::{Context, Result};

use crate::cli_utils;

pub fn run(
    config: &Config,
    name: &str,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut session = cli_utils::open_session(config)?;
    cli_utils::open_existing(&mut session, name)?;
    let key = session.key().context("associate not open")?;
    let record = session.current().context("associate not open")?;

    let path = output.unwrap_or_else(|| config.export.dir.join(format.file_name(key)));
    let written = write_export(
        record,
        format,
        &path,
        (config.chart.width, config.chart.height),
    )?;
    eprintln!("Exported to: {}", written.display());
    Ok(())
}
