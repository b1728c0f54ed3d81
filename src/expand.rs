//! Resolution of raw input into a final command line.
//!
//! Two substitutions run in a fixed order: a leading `!N` history reference
//! is replaced by the recorded command it names, then the whole resulting
//! line is looked up as an alias name. Lines that are not history references
//! are recorded into the ring before alias substitution, so an alias
//! invocation re-runs as itself through `!N`, not as its expansion.

use thiserror::Error;

use crate::alias::AliasTable;
use crate::history::{HistoryError, HistoryRing};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpandError {
    /// The text after `!` did not parse as an integer. The line is dropped.
    #[error("invalid command number")]
    InvalidReference,
}

/// A fully resolved input line, ready for dispatch.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved {
    pub line: String,
    /// Range diagnostic from a `!N` whose offset failed the range check.
    /// The literal text still goes on to execute; the caller is expected to
    /// surface this to the user.
    pub warning: Option<HistoryError>,
}

/// Resolve one trimmed input line against the session tables.
///
/// `!0` parses as a valid zero and fails `get`'s range check, so it warns
/// and runs as the literal text `!0`. A reference to an in-range slot that
/// has never been written is a silent miss: the literal stands without a
/// diagnostic.
pub fn resolve(
    line: &str,
    history: &mut HistoryRing,
    aliases: &AliasTable,
) -> Result<Resolved, ExpandError> {
    let mut warning = None;

    let mut resolved = if let Some(reference) = line.strip_prefix('!') {
        let offset: i64 = reference.parse().map_err(|_| ExpandError::InvalidReference)?;
        match history.get(offset) {
            Ok(Some(text)) => text.to_string(),
            Ok(None) => line.to_string(),
            Err(err) => {
                warning = Some(err);
                line.to_string()
            }
        }
    } else {
        history.record(line);
        line.to_string()
    };

    if let Some(command) = aliases.lookup(&resolved) {
        resolved = command.to_string();
    }

    Ok(Resolved {
        line: resolved,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (HistoryRing, AliasTable) {
        (HistoryRing::new(), AliasTable::new())
    }

    #[test]
    fn plain_line_is_recorded_verbatim() {
        let (mut history, aliases) = tables();
        let resolved = resolve("echo hi", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "echo hi");
        assert_eq!(history.get(1), Ok(Some("echo hi")));
    }

    #[test]
    fn reference_hit_replaces_line_without_recording() {
        let (mut history, aliases) = tables();
        resolve("echo hi", &mut history, &aliases).unwrap();
        let resolved = resolve("!1", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "echo hi");
        assert_eq!(resolved.warning, None);
        // still exactly one entry; "!1" was not recorded
        assert_eq!(history.entries().count(), 1);
    }

    #[test]
    fn reference_to_empty_slot_keeps_literal_silently() {
        let (mut history, aliases) = tables();
        let resolved = resolve("!3", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "!3");
        assert_eq!(resolved.warning, None);
        assert_eq!(history.entries().count(), 0);
    }

    #[test]
    fn out_of_range_reference_warns_and_keeps_literal() {
        let (mut history, aliases) = tables();
        let resolved = resolve("!0", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "!0");
        assert_eq!(resolved.warning, Some(HistoryError::InvalidOffset(0)));

        let resolved = resolve("!99", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "!99");
        assert_eq!(resolved.warning, Some(HistoryError::InvalidOffset(99)));
    }

    #[test]
    fn non_numeric_reference_is_rejected() {
        let (mut history, aliases) = tables();
        assert_eq!(
            resolve("!abc", &mut history, &aliases),
            Err(ExpandError::InvalidReference)
        );
        assert_eq!(
            resolve("!", &mut history, &aliases),
            Err(ExpandError::InvalidReference)
        );
        assert_eq!(history.entries().count(), 0);
    }

    #[test]
    fn alias_replaces_whole_line_only() {
        let (mut history, mut aliases) = tables();
        aliases.set("ll", "ls -la").unwrap();
        let resolved = resolve("ll", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "ls -la");
        // a prefix match is not an alias invocation
        let resolved = resolve("ll /tmp", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "ll /tmp");
    }

    #[test]
    fn alias_applies_after_history_expansion() {
        let (mut history, mut aliases) = tables();
        aliases.set("ll", "ls -la").unwrap();
        resolve("ll", &mut history, &aliases).unwrap();
        // history holds the raw "ll", and expanding it re-applies the alias
        let resolved = resolve("!1", &mut history, &aliases).unwrap();
        assert_eq!(resolved.line, "ls -la");
    }
}
