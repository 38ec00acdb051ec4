// src/dag/mod.rs

//! DAG representation and scheduling.
//!
//! - [`graph`] holds the immutable precedence graph.
//! - [`duration`] maps task ids to durations.
//! - [`ready`] derives which tasks are eligible to start.
//! - [`worker_pool`] simulates a fixed set of workers.
//! - [`scheduler`] runs the single-worker ordering and the timed simulation.
//! - [`scheduler_step`] defines the per-tick trace record.
//! - [`analysis`] computes the critical path and finds cycles.

pub mod analysis;
pub mod duration;
pub mod graph;
pub mod ready;
pub mod scheduler;
pub mod scheduler_step;
pub mod worker_pool;

pub use duration::{AlphabetDurations, DurationModel};
pub use graph::DagGraph;
pub use ready::ready_tasks;
pub use scheduler::{
    Schedule, Scheduler, SchedulerOptions, schedule_single_worker, schedule_with_workers,
};
pub use scheduler_step::SchedulerStep;
pub use worker_pool::WorkerPool;
