// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::errors::{Result, StepdagError};
use crate::types::{Constraint, TaskName};

/// Internal node structure: stores immediate prerequisites and successors.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Tasks that must be `Done` before this one can start.
    prerequisites: BTreeSet<TaskName>,
    /// Tasks that list this one as a prerequisite.
    successors: BTreeSet<TaskName>,
}

/// Immutable in-memory precedence graph keyed by task name.
///
/// Every id that appears in any constraint becomes a task. Acyclicity is not
/// checked here; the scheduler detects a stuck run instead, and
/// [`crate::dag::analysis::find_cycle`] can name a task on a cycle.
#[derive(Debug, Clone, Default)]
pub struct DagGraph {
    nodes: BTreeMap<TaskName, DagNode>,
    edge_count: usize,
}

impl DagGraph {
    /// Build a graph from precedence pairs.
    ///
    /// - self-referential pairs are rejected with `InvalidConstraint`
    /// - repeated pairs are absorbed
    pub fn build<I, C>(constraints: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constraint>,
    {
        Self::build_with_tasks(std::iter::empty::<TaskName>(), constraints)
    }

    /// Like [`DagGraph::build`], but also registers `tasks` that may not
    /// appear in any constraint (isolated tasks with no prerequisites).
    pub fn build_with_tasks<T, I, C>(tasks: T, constraints: I) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: Into<TaskName>,
        I: IntoIterator<Item = C>,
        C: Into<Constraint>,
    {
        let mut graph = DagGraph::default();

        for task in tasks {
            graph.nodes.entry(task.into()).or_default();
        }

        for constraint in constraints {
            let constraint = constraint.into();
            if constraint.is_self_loop() {
                return Err(StepdagError::InvalidConstraint {
                    task: constraint.dependent,
                });
            }

            let Constraint {
                prerequisite,
                dependent,
            } = constraint;

            let inserted = graph
                .nodes
                .entry(dependent.clone())
                .or_default()
                .prerequisites
                .insert(prerequisite.clone());

            if !inserted {
                debug!(%prerequisite, %dependent, "duplicate constraint ignored");
                continue;
            }

            graph
                .nodes
                .entry(prerequisite)
                .or_default()
                .successors
                .insert(dependent);
            graph.edge_count += 1;
        }

        debug!(
            tasks = graph.nodes.len(),
            edges = graph.edge_count,
            "built dependency graph"
        );

        Ok(graph)
    }

    /// All task names, in ascending order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct constraints.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, task: &str) -> bool {
        self.nodes.contains_key(task)
    }

    /// Immediate prerequisites of a task. Empty for unknown tasks.
    pub fn prerequisites(&self, task: &str) -> impl Iterator<Item = &str> {
        self.nodes
            .get(task)
            .into_iter()
            .flat_map(|n| n.prerequisites.iter().map(|s| s.as_str()))
    }

    /// Tasks that list `task` as a prerequisite. Empty for unknown tasks.
    pub fn successors(&self, task: &str) -> impl Iterator<Item = &str> {
        self.nodes
            .get(task)
            .into_iter()
            .flat_map(|n| n.successors.iter().map(|s| s.as_str()))
    }

    /// Number of prerequisites of `task` that are not in `completed`.
    ///
    /// Unknown tasks have no prerequisites.
    pub fn unmet_prerequisite_count(&self, task: &str, completed: &BTreeSet<TaskName>) -> usize {
        self.prerequisites(task)
            .filter(|p| !completed.contains(*p))
            .count()
    }

    /// Every constraint in the graph, ordered by (prerequisite, dependent).
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().flat_map(|(name, node)| {
            node.successors
                .iter()
                .map(move |succ| (name.as_str(), succ.as_str()))
        })
    }
}
