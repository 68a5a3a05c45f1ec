//! Interactive form session on stdin.

use std::io::{self, BufRead, Write};

use agent_map_core::export::format_record_console;
use agent_map_core::{Config, FormSession, Level, ProfileUpdate, RecordStore};
use anyhow::Result;

use super::{describe_warnings, format_chart_bars};
use crate::cli_utils;

const HELP: &str = "\
Commands:
  set <level> <segment> [value]   set a cell (no value clears it)
  row <level> <v1> ... <v8>       set a whole level, '-' for empty
  profile <field> <value...>      field: name, mobile, email, manager
  show                            print the grid
  totals | chart                  print the totals chart
  save                            save to the store
  help                            this text
  quit                            leave (quit! discards unsaved changes)
Levels and segments accept a name (e.g. private-resale) or a 1-based index.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Set {
        level: String,
        segment: String,
        value: String,
    },
    Row {
        level: String,
        values: Vec<String>,
    },
    Profile {
        field: String,
        value: String,
    },
    Show,
    Chart,
    Save,
    Help,
    Quit {
        force: bool,
    },
    Empty,
}

impl FormCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match (command.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("set", [level, segment]) => Ok(Self::Set {
                level: level.to_string(),
                segment: segment.to_string(),
                value: String::new(),
            }),
            ("set", [level, segment, value]) => Ok(Self::Set {
                level: level.to_string(),
                segment: segment.to_string(),
                value: value.to_string(),
            }),
            ("set", _) => Err("usage: set <level> <segment> [value]".to_string()),
            ("row", [level, values @ ..]) if values.len() == 8 => Ok(Self::Row {
                level: level.to_string(),
                values: values
                    .iter()
                    .map(|v| if *v == "-" { String::new() } else { v.to_string() })
                    .collect(),
            }),
            ("row", _) => Err("usage: row <level> <v1> ... <v8>".to_string()),
            ("profile", [field, value @ ..]) if !value.is_empty() => Ok(Self::Profile {
                field: field.to_ascii_lowercase(),
                value: value.join(" "),
            }),
            ("profile", _) => Err("usage: profile <field> <value...>".to_string()),
            ("show", []) => Ok(Self::Show),
            ("totals" | "chart", []) => Ok(Self::Chart),
            ("save", []) => Ok(Self::Save),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit", []) => Ok(Self::Quit { force: false }),
            ("quit!" | "exit!", []) => Ok(Self::Quit { force: true }),
            (other, _) => Err(format!("unknown command {:?}, type help", other)),
        }
    }
}

pub fn run(config: &Config, name: &str) -> Result<()> {
    let mut session = cli_utils::open_session(config)?;
    session.open(name)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock())
}

/// Read commands until `quit` or end of input
pub fn run_loop<S, R, W>(session: &mut FormSession<S>, input: R, mut output: W) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let mut dirty = false;
    if let Some(record) = session.current() {
        writeln!(output, "{}", format_record_console(record))?;
    }
    writeln!(output, "Type help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            FormCommand::Empty => {}
            FormCommand::Set {
                level,
                segment,
                value,
            } => match session.set_cell_by_key(&level, &segment, value) {
                Ok(update) => {
                    dirty = true;
                    for warning in describe_warnings(&update) {
                        writeln!(output, "warning: {}", warning)?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            FormCommand::Row { level, values } => match Level::from_key(&level) {
                Ok(level) => {
                    let updates = session.set_row(level, &values)?;
                    dirty = true;
                    for update in &updates {
                        for warning in describe_warnings(update) {
                            writeln!(output, "warning: {}", warning)?;
                        }
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            FormCommand::Profile { field, value } => {
                let mut update = ProfileUpdate::default();
                match field.as_str() {
                    "name" => update.name = Some(value),
                    "mobile" => update.mobile = Some(value),
                    "email" => update.email = Some(value),
                    "manager" => update.manager = Some(value),
                    other => {
                        writeln!(output, "unknown profile field {:?}", other)?;
                        continue;
                    }
                }
                session.update_profile(&update)?;
                dirty = true;
            }
            FormCommand::Show => {
                if let Some(record) = session.current() {
                    writeln!(output, "{}", format_record_console(record))?;
                }
            }
            FormCommand::Chart => {
                writeln!(output, "{}", format_chart_bars(&session.totals()?))?;
            }
            FormCommand::Save => {
                session.save()?;
                dirty = false;
                writeln!(output, "Saved successfully.")?;
            }
            FormCommand::Help => writeln!(output, "{}", HELP)?,
            FormCommand::Quit { force } => {
                if dirty && !force {
                    writeln!(output, "Unsaved changes: save first, or quit! to discard.")?;
                    continue;
                }
                break;
            }
        }
    }

    if dirty {
        writeln!(output, "Unsaved changes discarded.")?;
    }
    Ok(())
}
