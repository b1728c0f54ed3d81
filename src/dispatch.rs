//! Classification of resolved lines and external command execution.

use std::io;
use std::process::Command;

/// How a resolved line is handled. Classification order matters: the
/// built-in checks run first and fall through to an external command.
#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Exit,
    ChangeDir(&'a str),
    DefineAlias(&'a str),
    ListAliases,
    ShowHistory,
    External(&'a str),
}

/// Session status after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Keep reading; carries the exit code of the handled command.
    Continue(i32),
    /// The `exit` built-in was entered.
    Exit,
}

/// Classify `line` into the built-in it names, or an external command.
pub fn classify(line: &str) -> Action<'_> {
    if line == "exit" {
        Action::Exit
    } else if let Some(path) = line.strip_prefix("cd ") {
        Action::ChangeDir(path)
    } else if let Some(definition) = line.strip_prefix("alias ") {
        Action::DefineAlias(definition)
    } else if line == "alias" {
        Action::ListAliases
    } else if line == "history" {
        Action::ShowHistory
    } else {
        Action::External(line)
    }
}

/// Run `line` through `/bin/sh -c`, inheriting stdio, and block until the
/// child exits. Quoting, pipes, and redirection are the interpreter's
/// business, not ours.
pub fn run_external(line: &str) -> io::Result<i32> {
    let status = Command::new("/bin/sh").arg("-c").arg(line).status()?;
    Ok(status.code().unwrap_or(1))
}
