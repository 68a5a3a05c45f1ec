//! List saved associates.

use agent_map_core::Config;
use agent_map_core::export::format_associates_console;
use anyhow::Result;

use crate::cli_utils;

pub fn run(config: &Config) -> Result<()> {
    let session = cli_utils::open_session(config)?;
    let records = session.associates()?;
    println!("{}", format_associates_console(&records));
    Ok(())
}
