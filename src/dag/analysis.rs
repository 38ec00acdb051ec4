// src/dag/analysis.rs

//! Whole-graph analysis backed by `petgraph`: cycle detection and the
//! duration-weighted critical path.
//!
//! None of this is needed to run a schedule; the shell uses it for dry-run
//! output and diagnostics, and the tests use it to check makespan bounds.

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::DagGraph;
use crate::types::TaskName;

/// The longest duration-weighted chain of tasks through the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    /// Sum of the durations along the path.
    pub length: u64,
    /// Tasks on the path, first to last.
    pub tasks: Vec<TaskName>,
}

/// Edge direction: prerequisite -> dependent.
fn to_graph_map(graph: &DagGraph) -> DiGraphMap<&str, ()> {
    let mut map: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in graph.tasks() {
        map.add_node(task);
    }
    for (prerequisite, dependent) in graph.constraints() {
        map.add_edge(prerequisite, dependent, ());
    }

    map
}

/// A task that lies on a cycle, or `None` if the graph is acyclic.
pub fn find_cycle(graph: &DagGraph) -> Option<TaskName> {
    match toposort(&to_graph_map(graph), None) {
        Ok(_) => None,
        Err(cycle) => Some(cycle.node_id().to_string()),
    }
}

/// Critical path given per-task durations.
///
/// Tasks missing from `durations` count as zero. Returns `None` when the
/// graph has a cycle. Ties between equally long chains resolve towards the
/// smaller task name. Lengths saturate at `u64::MAX`.
pub fn critical_path(graph: &DagGraph, durations: &BTreeMap<TaskName, u64>) -> Option<CriticalPath> {
    let map = to_graph_map(graph);
    let topo = toposort(&map, None).ok()?;

    let weight = |task: &str| durations.get(task).copied().unwrap_or(0);

    // finish time of the longest chain ending at each task, plus the
    // predecessor on that chain
    let mut finish: BTreeMap<&str, (u64, Option<&str>)> = BTreeMap::new();

    for task in topo {
        let mut best: (u64, Option<&str>) = (0, None);
        for prerequisite in graph.prerequisites(task) {
            let (f, _) = finish.get(prerequisite).copied().unwrap_or((0, None));
            if best.1.is_none() || f > best.0 {
                best = (f, Some(prerequisite));
            }
        }
        finish.insert(task, (best.0.saturating_add(weight(task)), best.1));
    }

    // BTreeMap iteration is ascending, so `>` keeps the smallest name on ties.
    let mut end: Option<(&str, u64)> = None;
    for (task, (f, _)) in finish.iter() {
        if end.is_none_or(|(_, best)| *f > best) {
            end = Some((*task, *f));
        }
    }

    let Some((last, length)) = end else {
        return Some(CriticalPath {
            length: 0,
            tasks: Vec::new(),
        });
    };

    let mut tasks = vec![last.to_string()];
    let mut cursor = finish.get(last).and_then(|(_, prev)| *prev);
    while let Some(task) = cursor {
        tasks.push(task.to_string());
        cursor = finish.get(task).and_then(|(_, prev)| *prev);
    }
    tasks.reverse();

    Some(CriticalPath { length, tasks })
}

/// Sum of all task durations: the makespan with exactly one worker.
/// Saturates at `u64::MAX`.
pub fn total_work(durations: &BTreeMap<TaskName, u64>) -> u64 {
    durations.values().fold(0, |acc, d| acc.saturating_add(*d))
}
