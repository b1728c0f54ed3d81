//! The shell session: owns the alias table and history ring and runs each
//! input line through expansion and dispatch.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::alias::{self, AliasError, AliasTable};
use crate::dispatch::{self, Action, Status};
use crate::expand::{self, ExpandError};
use crate::history::HistoryRing;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    Expand(#[from] ExpandError),
    #[error("{0}")]
    Alias(#[from] AliasError),
    #[error("cd failed: {0}")]
    ChangeDir(io::Error),
    #[error("failed to run command: {0}")]
    Spawn(io::Error),
}

/// One interactive session. Single-threaded by construction: commands run
/// strictly one at a time and the tables need no locking.
#[derive(Default)]
pub struct Shell {
    aliases: AliasTable,
    history: HistoryRing,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// Run one raw input line through the expand/dispatch pipeline.
    ///
    /// Errors are user-level diagnostics; the session continues after every
    /// one of them. Only [`Status::Exit`] ends the session.
    pub fn eval_line(&mut self, input: &str) -> Result<Status, ShellError> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(Status::Continue(0));
        }

        let resolved = expand::resolve(line, &mut self.history, &self.aliases)?;
        if let Some(warning) = &resolved.warning {
            eprintln!("{}", warning);
        }

        match dispatch::classify(&resolved.line) {
            Action::Exit => Ok(Status::Exit),
            Action::ChangeDir(path) => {
                std::env::set_current_dir(Path::new(path)).map_err(ShellError::ChangeDir)?;
                Ok(Status::Continue(0))
            }
            Action::DefineAlias(definition) => {
                let (name, command) = alias::parse_definition(definition)?;
                self.aliases.set(name, command)?;
                Ok(Status::Continue(0))
            }
            Action::ListAliases => {
                for (name, command) in self.aliases.entries() {
                    println!("{}={}", name, command);
                }
                Ok(Status::Continue(0))
            }
            Action::ShowHistory => {
                for (offset, line) in self.history.entries() {
                    println!("{} {}", offset, line);
                }
                Ok(Status::Continue(0))
            }
            Action::External(command) => {
                let code = dispatch::run_external(command).map_err(ShellError::Spawn)?;
                Ok(Status::Continue(code))
            }
        }
    }
}
