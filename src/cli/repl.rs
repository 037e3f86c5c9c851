//! Interactive editor loop
//!
//! Reads one command per line, dispatches it, reports errors without
//! mutating state, and keeps going until `exit` or end of input.

use super::EditorState;
use crate::models::EditorConfig;
use crate::parser::Command;
use crate::store::EditError;
use crate::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};

const COMMANDS: &[(&str, &str)] = &[
    ("load [data.csv alias.txt]", "load data files (default: auto-discover)"),
    ("dump [data.csv] [alias.txt]", "write data files (default: overwrite sources)"),
    ("alias OLD NEW [issue...]", "rename an institution"),
    ("del ID [issue...]", "delete a record"),
    ("outdate ID [issue...]", "mark a record outdated"),
    ("view ID [ID...]", "show records"),
    ("generate", "render the change log to Markdown"),
    ("help", "show this list"),
    ("exit", "leave the editor"),
];

pub fn run(config: EditorConfig) -> Result<()> {
    let mut state = EditorState::new(config);

    println!("{}", "University survey record editor".cyan().bold());
    println!("Type 'help' or '?' for commands, 'exit' or Ctrl-D to quit.");

    loop {
        let line: String = match Input::new()
            .with_prompt("(editor)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // end of input or no usable terminal
            Err(_) => {
                println!();
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().yellow());
                continue;
            }
        };

        match command {
            Command::Exit => {
                if state.dirty && !confirm_exit() {
                    continue;
                }
                break;
            }
            Command::Help => print_help(),
            other => {
                if let Err(e) = dispatch(&mut state, other) {
                    report(&e);
                }
            }
        }
    }

    Ok(())
}

fn dispatch(state: &mut EditorState, command: Command) -> Result<()> {
    match command {
        Command::Load(files) => super::load::run(state, files),
        Command::Dump(files) => super::dump::run(state, files),
        Command::Alias {
            old,
            new,
            issue_ids,
        } => super::alias::run(state, &old, &new, issue_ids),
        Command::Delete { id, issue_ids } => super::del::run(state, &id, issue_ids),
        Command::Outdate { id, issue_ids } => super::outdate::run(state, &id, issue_ids),
        Command::View(ids) => super::view::run(state, &ids),
        Command::Generate => super::generate::run(state),
        Command::Help | Command::Exit => unreachable!("handled by the loop"),
    }
}

/// Failed mutations report their kind; everything else reports the chain.
fn report(error: &anyhow::Error) {
    match error.downcast_ref::<EditError>() {
        Some(e) => eprintln!("{}", format!("error ({}): {}", e.kind(), e).red()),
        None => eprintln!("{}", format!("error: {:#}", error).red()),
    }
}

fn confirm_exit() -> bool {
    Confirm::new()
        .with_prompt("Unsaved edits will be lost; exit anyway?")
        .default(false)
        .interact()
        // no terminal: do not block the exit
        .unwrap_or(true)
}

fn print_help() {
    let width = COMMANDS.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0) + 2;
    println!("Commands:");
    for (cmd, desc) in COMMANDS {
        println!("  {:<width$}-- {}", cmd, desc, width = width);
    }
}
