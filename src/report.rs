// src/report.rs

//! Plain-text rendering of scheduling results.
//!
//! Everything here returns a `String`; `lib.rs` decides where it goes.

use std::fmt::Write as _;

use crate::dag::analysis::{critical_path, find_cycle};
use crate::dag::scheduler::resolve_durations;
use crate::dag::{DagGraph, DurationModel, SchedulerStep};
use crate::types::TaskName;

/// Join an order for display.
///
/// Single-character ids are concatenated (`CABDFE`); anything longer is
/// separated by spaces.
pub fn format_order(order: &[TaskName]) -> String {
    if order.iter().all(|t| t.chars().count() == 1) {
        order.concat()
    } else {
        order.join(" ")
    }
}

/// Second-by-second worker table for a traced run.
///
/// ```text
/// Second   Worker 1   Worker 2   Done
///    0        C          .
///    1        C          .
/// ```
pub fn render_trace(steps: &[SchedulerStep]) -> String {
    let workers = steps.first().map(|s| s.workers.len()).unwrap_or(0);

    // Column width fits the longest task name (at least the header).
    let name_width = steps
        .iter()
        .flat_map(|s| s.workers.iter().flatten())
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(1);
    let col = name_width.max(format!("Worker {workers}").len());

    let mut out = String::new();
    let _ = write!(out, "Second");
    for w in 1..=workers {
        let _ = write!(out, "   {:<col$}", format!("Worker {w}"));
    }
    let _ = writeln!(out, "   Done");

    for step in steps {
        let _ = write!(out, "{:>4}  ", step.second);
        for slot in &step.workers {
            let cell = slot.as_deref().unwrap_or(".");
            let _ = write!(out, "   {:^col$}", cell);
        }
        let _ = writeln!(out, "   {}", format_order(&step.done));
    }

    out
}

/// Dry-run summary: every task with its prerequisites and duration, then the
/// critical path (or the task found on a cycle).
pub fn render_dry_run<D>(graph: &DagGraph, model: &D, workers: usize) -> String
where
    D: DurationModel + ?Sized,
{
    let mut out = String::new();
    let _ = writeln!(out, "stepdag dry-run");
    let _ = writeln!(out, "  workers = {workers}");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "tasks ({}), constraints ({}):",
        graph.len(),
        graph.edge_count()
    );
    for task in graph.tasks() {
        let duration = model
            .duration_of(task)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        let _ = writeln!(out, "  - {task} (duration {duration})");

        let prerequisites: Vec<&str> = graph.prerequisites(task).collect();
        if !prerequisites.is_empty() {
            let _ = writeln!(out, "      after: {:?}", prerequisites);
        }
    }
    let _ = writeln!(out);

    if let Some(task) = find_cycle(graph) {
        let _ = writeln!(out, "cycle detected involving task '{task}'");
        return out;
    }

    match resolve_durations(graph, model) {
        Ok(durations) => {
            if let Some(path) = critical_path(graph, &durations) {
                if path.length == u64::MAX {
                    let _ = writeln!(
                        out,
                        "critical path: {} (length overflows u64)",
                        format_order(&path.tasks)
                    );
                } else {
                    let _ = writeln!(
                        out,
                        "critical path: {} ({} seconds)",
                        format_order(&path.tasks),
                        path.length
                    );
                }
            }
        }
        Err(e) => {
            let _ = writeln!(out, "critical path unavailable: {e}");
        }
    }

    out
}
