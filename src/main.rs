//! minish - a tiny interactive shell
//!
//! Usage:
//!   minish            Start the interactive session
//!   minish -c "cmd"   Run a single line through the shell pipeline

use std::env;
use std::process::ExitCode;

use minish::{prompt, Shell, Status};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"minish {} - a tiny interactive shell

USAGE:
    minish                  Start the interactive session
    minish -c <command>     Run a single command and exit
    minish --help           Show this help message
    minish --version        Show version

BUILT-INS:
    exit                    Leave the shell
    cd <path>               Change the working directory
    alias <name>=<command>  Define or overwrite an alias
    alias                   List aliases as name=command
    history                 List the last {} commands as "number command"
    !<N>                    Re-run history entry N (1 = most recent)

Anything else is passed verbatim to /bin/sh -c."#,
        VERSION,
        minish::HISTORY_CAPACITY
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_help();
            ExitCode::SUCCESS
        }
        Some("--version") | Some("-V") => {
            println!("minish {}", VERSION);
            ExitCode::SUCCESS
        }
        Some("-c") => match args.get(2) {
            Some(cmd) => run_command(cmd),
            None => {
                eprintln!("minish: -c requires a command");
                ExitCode::FAILURE
            }
        },
        Some(arg) => {
            eprintln!("minish: unrecognized argument: {}", arg);
            ExitCode::FAILURE
        }
        None => match run_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("minish: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Run one line through a fresh session, mapping its status to our exit code.
fn run_command(cmd: &str) -> ExitCode {
    let mut shell = Shell::new();
    match shell.eval_line(cmd) {
        Ok(Status::Exit) => ExitCode::SUCCESS,
        Ok(Status::Continue(0)) => ExitCode::SUCCESS,
        Ok(Status::Continue(code)) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// The read/expand/dispatch loop. Only `exit` and end-of-input leave it.
fn run_repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut shell = Shell::new();

    loop {
        match rl.readline(&prompt::render()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                // Line-editing recall is separate from the shell's own ring.
                let _ = rl.add_history_entry(trimmed);

                match shell.eval_line(trimmed) {
                    Ok(Status::Exit) => break,
                    Ok(Status::Continue(_)) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the line, keep the session
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
