//! Alias storage: a fixed-capacity name to command mapping.

use thiserror::Error;

/// Number of alias slots available in a session.
pub const ALIAS_CAPACITY: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AliasError {
    #[error("invalid alias command")]
    InvalidSyntax,
    #[error("maximum number of aliases reached")]
    TableFull,
}

#[derive(Debug)]
struct AliasEntry {
    name: String,
    command: String,
}

/// Fixed-capacity table of alias definitions, unique by name.
///
/// Entries are never deleted, so free slots always trail the occupied ones.
#[derive(Debug)]
pub struct AliasTable {
    slots: Vec<Option<AliasEntry>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasTable {
    pub fn new() -> Self {
        Self {
            slots: (0..ALIAS_CAPACITY).map(|_| None).collect(),
        }
    }

    /// Exact whole-string match against stored alias names.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .flatten()
            .find(|entry| entry.name == name)
            .map(|entry| entry.command.as_str())
    }

    /// Define or overwrite an alias.
    ///
    /// Takes the first slot that is free or already holds `name`. A full
    /// table rejects a new name with [`AliasError::TableFull`] and stays
    /// unchanged.
    pub fn set(&mut self, name: &str, command: &str) -> Result<(), AliasError> {
        for slot in &mut self.slots {
            match slot {
                Some(entry) if entry.name == name => {
                    entry.command = command.to_string();
                    return Ok(());
                }
                None => {
                    *slot = Some(AliasEntry {
                        name: name.to_string(),
                        command: command.to_string(),
                    });
                    return Ok(());
                }
                Some(_) => {}
            }
        }
        Err(AliasError::TableFull)
    }

    /// All definitions in storage order. Backs the no-argument `alias`
    /// built-in.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.name.as_str(), entry.command.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split an `alias` argument of the form `name=command` on its first `=`.
///
/// Both sides must be non-empty.
pub fn parse_definition(arg: &str) -> Result<(&str, &str), AliasError> {
    let (name, command) = arg.split_once('=').ok_or(AliasError::InvalidSyntax)?;
    if name.is_empty() || command.is_empty() {
        return Err(AliasError::InvalidSyntax);
    }
    Ok((name, command))
}
