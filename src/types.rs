// src/types.rs

//! Small shared types used across the core and the shell.

use std::fmt;

/// Public type alias for task identifiers.
///
/// Identifiers are compared byte-wise (`Ord for String`), and that order is
/// the only tie-break rule the scheduler uses.
pub type TaskName = String;

/// A single precedence constraint: `prerequisite` must finish before
/// `dependent` may start.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constraint {
    pub prerequisite: TaskName,
    pub dependent: TaskName,
}

impl Constraint {
    pub fn new(prerequisite: impl Into<TaskName>, dependent: impl Into<TaskName>) -> Self {
        Self {
            prerequisite: prerequisite.into(),
            dependent: dependent.into(),
        }
    }

    /// True if the constraint names the same task on both sides.
    pub fn is_self_loop(&self) -> bool {
        self.prerequisite == self.dependent
    }
}

impl<P, D> From<(P, D)> for Constraint
where
    P: Into<TaskName>,
    D: Into<TaskName>,
{
    fn from((prerequisite, dependent): (P, D)) -> Self {
        Constraint::new(prerequisite, dependent)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.prerequisite, self.dependent)
    }
}
