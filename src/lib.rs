//! minish - a tiny interactive shell
//!
//! # Overview
//!
//! minish reads one line at a time, expands it, and runs it. The pipeline
//! is deliberately small:
//!
//! 1. A leading `!N` is a **history reference**: it is replaced by the N-th
//!    most recently recorded command (1 = newest) and is never itself
//!    recorded. Any other line is recorded into a fixed-size ring first.
//! 2. The whole resulting line is looked up as an **alias** name; on a
//!    match it is replaced by the alias's stored command.
//! 3. The resolved line is either one of the built-ins (`exit`, `cd`,
//!    `alias`, `history`) or handed verbatim to `/bin/sh -c`, with the
//!    session blocking until the child exits.
//!
//! ```text
//! alias ll=ls -la      # define an alias
//! ll                   # runs: ls -la
//! history              # 1 ll
//!                      # 2 alias ll=ls -la
//! !1                   # runs: ls -la again, without re-recording
//! ```
//!
//! There is no job control, no pipelines or quoting of our own (the
//! interpreter handles those), and nothing persists across sessions.
//!
//! # Example
//!
//! ```rust
//! use minish::{Shell, Status};
//!
//! let mut shell = Shell::new();
//! let status = shell.eval_line("echo hello").unwrap();
//! assert_eq!(status, Status::Continue(0));
//! ```

pub mod alias;
pub mod dispatch;
pub mod expand;
pub mod history;
pub mod prompt;
pub mod shell;

// Re-export commonly used items
pub use alias::{AliasError, AliasTable, ALIAS_CAPACITY};
pub use dispatch::{Action, Status};
pub use expand::{ExpandError, Resolved};
pub use history::{HistoryError, HistoryRing, HISTORY_CAPACITY};
pub use shell::{Shell, ShellError};
