//! Circular log of the most recently entered commands.

use thiserror::Error;

/// Number of commands retained before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("invalid command number: {0}")]
    InvalidOffset(i64),
}

/// Fixed-capacity ring of raw command lines.
///
/// Offsets are 1-based and count backwards from the newest entry: offset 1
/// is the command recorded last, offset `capacity` the oldest one that can
/// still be retained.
#[derive(Debug)]
pub struct HistoryRing {
    slots: Vec<Option<String>>,
    /// Next write position; the newest entry sits just behind it.
    cursor: usize,
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRing {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `line` as the newest entry, evicting the oldest when full.
    pub fn record(&mut self, line: &str) {
        self.slots[self.cursor] = Some(line.to_string());
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Look up the command at 1-based `offset` (1 = most recent).
    ///
    /// Returns `Ok(None)` for an in-range slot that has never been written.
    pub fn get(&self, offset: i64) -> Result<Option<&str>, HistoryError> {
        let capacity = self.slots.len();
        if offset < 1 || offset > capacity as i64 {
            return Err(HistoryError::InvalidOffset(offset));
        }
        let slot = (self.cursor + capacity - offset as usize) % capacity;
        Ok(self.slots[slot].as_deref())
    }

    /// All retained entries as `(offset, line)` pairs, offsets ascending
    /// (1 = newest). Backs the `history` built-in.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (1..=self.slots.len()).filter_map(move |offset| {
            self.get(offset as i64)
                .ok()
                .flatten()
                .map(|line| (offset, line))
        })
    }
}
