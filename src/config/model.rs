// src/config/model.rs

use serde::Deserialize;

use crate::dag::duration::DEFAULT_ALPHABET;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [schedule]
/// workers = 5
/// base_offset = 60
///
/// [graph]
/// tasks = ["Q"]
/// constraints = [["C", "A"], ["C", "F"]]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Simulation parameters from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// Tasks and constraints given inline from `[graph]`.
    #[serde(default)]
    pub graph: GraphSection,
}

/// Validated configuration. Only obtainable through
/// `ConfigFile::try_from(RawConfigFile)` (see `config::validate`).
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
    pub graph: GraphSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(schedule: ScheduleSection, graph: GraphSection) -> Self {
        Self { schedule, graph }
    }

    /// Apply command-line overrides and re-validate.
    pub fn with_overrides(
        self,
        workers: Option<usize>,
        base_offset: Option<u64>,
    ) -> crate::errors::Result<Self> {
        let mut raw = RawConfigFile::from(self);
        if let Some(w) = workers {
            raw.schedule.workers = w;
        }
        if let Some(b) = base_offset {
            raw.schedule.base_offset = b;
        }
        ConfigFile::try_from(raw)
    }
}

impl From<ConfigFile> for RawConfigFile {
    fn from(cfg: ConfigFile) -> Self {
        Self {
            schedule: cfg.schedule,
            graph: cfg.graph,
        }
    }
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// Number of simulated workers (>= 1).
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Added to every task's alphabet ordinal to get its duration.
    #[serde(default = "default_base_offset")]
    pub base_offset: u64,

    /// Alphabet whose 1-based positions give task ordinals.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

fn default_workers() -> usize {
    5
}

fn default_base_offset() -> u64 {
    60
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_offset: default_base_offset(),
            alphabet: default_alphabet(),
        }
    }
}

/// `[graph]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GraphSection {
    /// Extra tasks that take part in the schedule even if no constraint
    /// mentions them.
    #[serde(default)]
    pub tasks: Vec<String>,

    /// `[prerequisite, dependent]` pairs.
    #[serde(default)]
    pub constraints: Vec<(String, String)>,
}
