mod cli;
mod cli_utils;
mod commands;

use agent_map_core::ProfileUpdate;
use agent_map_core::guide::format_guide;
use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Warnings only unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agent_map=warn,agent_map_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::resolve_config(&args);

    match args.command {
        Command::List => commands::list::run(&config),
        Command::Show { name, json } => commands::show::run(&config, &name, json),
        Command::Set {
            name,
            level,
            segment,
            value,
        } => commands::edit::set(&config, &name, &level, &segment, &value),
        Command::Row {
            name,
            level,
            values,
        } => commands::edit::row(&config, &name, &level, &values),
        Command::Profile {
            name,
            display_name,
            mobile,
            email,
            manager,
        } => {
            let update = ProfileUpdate {
                name: display_name,
                mobile,
                email,
                manager,
            };
            commands::edit::profile(&config, &name, &update)
        }
        Command::Export {
            name,
            format,
            output,
        } => commands::export::run(&config, &name, format, output),
        Command::Form { name } => commands::form::run(&config, &name),
        Command::Levels => {
            print!("{}", format_guide());
            Ok(())
        }
    }
}
