// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::types::TaskName;

#[derive(Error, Debug)]
pub enum StepdagError {
    /// A constraint names the same task as prerequisite and dependent.
    #[error("Invalid constraint: task '{task}' cannot depend on itself")]
    InvalidConstraint { task: TaskName },

    /// A scheduling iteration made no progress while tasks were outstanding.
    ///
    /// `remaining` holds every task that never reached `Done`, sorted.
    #[error("Unschedulable: no progress possible, {} task(s) outstanding: {}", .remaining.len(), .remaining.join(", "))]
    Unschedulable { remaining: Vec<TaskName> },

    /// `WorkerPool::assign` was called with every slot occupied.
    #[error("No idle worker available for task '{task}'")]
    NoIdleWorker { task: TaskName },

    #[error("No duration known for task '{task}'")]
    NoDuration { task: TaskName },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error on line {line}: unrecognised instruction {content:?}")]
    ParseError { line: usize, content: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StepdagError>;
