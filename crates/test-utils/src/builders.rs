#![allow(dead_code)]

use stepdag::config::{ConfigFile, GraphSection, RawConfigFile, ScheduleSection};
use stepdag::dag::DagGraph;
use stepdag::types::Constraint;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                schedule: ScheduleSection::default(),
                graph: GraphSection::default(),
            },
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.schedule.workers = workers;
        self
    }

    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.config.schedule.base_offset = base_offset;
        self
    }

    pub fn alphabet(mut self, alphabet: &str) -> Self {
        self.config.schedule.alphabet = alphabet.to_string();
        self
    }

    pub fn with_task(mut self, name: &str) -> Self {
        self.config.graph.tasks.push(name.to_string());
        self
    }

    pub fn with_constraint(mut self, prerequisite: &str, dependent: &str) -> Self {
        self.config
            .graph
            .constraints
            .push((prerequisite.to_string(), dependent.to_string()));
        self
    }

    /// The raw, unvalidated config (for testing validation itself).
    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `DagGraph`.
#[derive(Default)]
pub struct GraphBuilder {
    tasks: Vec<String>,
    constraints: Vec<Constraint>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `prerequisite` must finish before `dependent` starts.
    pub fn edge(mut self, prerequisite: &str, dependent: &str) -> Self {
        self.constraints.push(Constraint::new(prerequisite, dependent));
        self
    }

    /// Add edges from a list of pairs.
    pub fn edges(mut self, pairs: &[(&str, &str)]) -> Self {
        self.constraints
            .extend(pairs.iter().map(|&(p, d)| Constraint::new(p, d)));
        self
    }

    /// Add an isolated task.
    pub fn task(mut self, name: &str) -> Self {
        self.tasks.push(name.to_string());
        self
    }

    pub fn build(self) -> DagGraph {
        DagGraph::build_with_tasks(self.tasks, self.constraints)
            .expect("Failed to build graph from builder")
    }
}
