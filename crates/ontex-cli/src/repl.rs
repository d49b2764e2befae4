//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, GroupsArgs, QueryArgs, ShowArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(session: &Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "Ontex REPL on {} - Type 'help' for commands, 'exit' to quit",
            session.source().display()
        ))
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("ontex> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, session, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let args = &parts[1..];
    let command = match parts[0] {
        "exit" | "quit" | "q" => return Ok(ReplCommand::Exit),
        "help" | "?" => return Ok(ReplCommand::Help),
        "summary" => Command::Summary,
        "schema" => Command::Schema,
        "guide" => Command::Guide,
        "groups" => Command::Groups(GroupsArgs {
            bucket: args.first().map(|s| s.to_string()),
        }),
        "show" => match args {
            [id] => Command::Show(ShowArgs { id: id.to_string() }),
            _ => return Err(CliError::InvalidInput("Usage: show <id>".to_string())),
        },
        "query" => Command::Query(QueryArgs {
            text: args.iter().map(|s| s.to_string()).collect(),
        }),
        "repl" => {
            return Err(CliError::InvalidInput("Already in the REPL".to_string()));
        }
        other => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )));
        }
    };

    Ok(ReplCommand::Command(command))
}

/// Execute a REPL command.
fn execute_repl_command(cmd: Command, session: &Session, formatter: &Formatter) -> Result<()> {
    match cmd {
        Command::Summary => commands::execute_summary(session, formatter),
        Command::Schema => commands::execute_schema(session, formatter),
        Command::Groups(args) => commands::execute_groups(args, session, formatter),
        Command::Show(args) => commands::execute_show(args, session, formatter),
        Command::Query(args) => commands::execute_query(args, session, formatter),
        Command::Guide => commands::execute_guide(formatter),
        Command::Repl => Ok(()),
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  summary                        - Entity counts");
    println!("  schema                         - Class tree and property schemas");
    println!("  groups [bucket]                - Individuals by bucket");
    println!("  show <id>                      - Details of one individual");
    println!("  query <text>                   - Filter individuals (see 'guide')");
    println!("  guide                          - Example queries");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
