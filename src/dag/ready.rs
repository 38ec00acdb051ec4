// src/dag/ready.rs

//! Ready-set derivation.

use std::collections::BTreeSet;

use crate::dag::graph::DagGraph;
use crate::types::TaskName;

/// Tasks whose prerequisites are all in `completed` and that are neither
/// completed nor in flight, sorted ascending.
///
/// The ascending order is the scheduler's only tie-break: whenever several
/// tasks are eligible, the first element of this list goes first.
pub fn ready_tasks(
    graph: &DagGraph,
    completed: &BTreeSet<TaskName>,
    in_flight: &BTreeSet<TaskName>,
) -> Vec<TaskName> {
    // `tasks()` already iterates in ascending order.
    graph
        .tasks()
        .filter(|task| !completed.contains(*task) && !in_flight.contains(*task))
        .filter(|task| graph.unmet_prerequisite_count(task, completed) == 0)
        .map(|task| task.to_string())
        .collect()
}
