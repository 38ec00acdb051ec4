// src/dag/scheduler_step.rs

//! Per-tick snapshot of a timed simulation.

use crate::types::TaskName;

/// What the simulation looked like during one simulated second.
///
/// Recorded only when [`crate::dag::SchedulerOptions::record_trace`] is set.
/// The final record of a trace has every worker idle and marks the makespan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerStep {
    /// Seconds elapsed at the start of this step.
    pub second: u64,
    /// Task held by each worker during this second (`None` = idle).
    pub workers: Vec<Option<TaskName>>,
    /// Tasks completed before this second began, in completion order.
    pub done: Vec<TaskName>,
}
