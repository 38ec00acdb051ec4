// src/dag/duration.rs

//! Task duration models.
//!
//! A duration model is a pure function from task id to a number of ticks.
//! The scheduler evaluates it once per task before the first tick.

/// Alphabet used when none is configured: `A` = 1 ... `Z` = 26.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps a task id to its execution duration in ticks.
///
/// Returning `None` means the model cannot price the task (including a
/// duration that does not fit in `u64`); the scheduler turns that into [`crate::errors::StepdagError::NoDuration`].
pub trait DurationModel {
    fn duration_of(&self, task: &str) -> Option<u64>;
}

impl<F> DurationModel for F
where
    F: Fn(&str) -> Option<u64>,
{
    fn duration_of(&self, task: &str) -> Option<u64> {
        self(task)
    }
}

/// `base_offset + position of the id in a fixed alphabet (1-based)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetDurations {
    pub base_offset: u64,
    alphabet: String,
}

impl AlphabetDurations {
    pub fn new(base_offset: u64) -> Self {
        Self {
            base_offset,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }

    /// Use a custom alphabet. Its characters must be distinct and listed in
    /// ascending order for the ordinal to agree with the tie-break order;
    /// `config::validate` checks both.
    pub fn with_alphabet(base_offset: u64, alphabet: impl Into<String>) -> Self {
        Self {
            base_offset,
            alphabet: alphabet.into(),
        }
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }
}

impl Default for AlphabetDurations {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DurationModel for AlphabetDurations {
    fn duration_of(&self, task: &str) -> Option<u64> {
        ordinal_in(&self.alphabet, task).and_then(|ord| self.base_offset.checked_add(ord))
    }
}

/// 1-based position of a single-character id in `alphabet`.
fn ordinal_in(alphabet: &str, task: &str) -> Option<u64> {
    let mut chars = task.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    alphabet
        .chars()
        .position(|a| a == c)
        .map(|pos| pos as u64 + 1)
}

/// Ordinal of a task id in [`DEFAULT_ALPHABET`] (`A` = 1).
pub fn ordinal_value(task: &str) -> Option<u64> {
    ordinal_in(DEFAULT_ALPHABET, task)
}

/// `base_offset + ordinal_value(task)`, or `None` on overflow.
pub fn duration(task: &str, base_offset: u64) -> Option<u64> {
    ordinal_value(task).and_then(|ord| base_offset.checked_add(ord))
}
