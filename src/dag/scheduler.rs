// src/dag/scheduler.rs

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, trace};

use crate::dag::duration::{AlphabetDurations, DurationModel};
use crate::dag::graph::DagGraph;
use crate::dag::ready::ready_tasks;
use crate::dag::scheduler_step::SchedulerStep;
use crate::dag::worker_pool::WorkerPool;
use crate::errors::{Result, StepdagError};
use crate::types::TaskName;

/// Knobs for a timed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerOptions {
    /// Number of simulated workers; must be at least 1.
    pub workers: usize,
    /// Record one [`SchedulerStep`] per simulated second.
    pub record_trace: bool,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            record_trace: false,
        }
    }
}

/// Result of a timed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Tasks in the order they reached `Done`.
    pub order: Vec<TaskName>,
    /// Simulated time until the last task finished (the makespan).
    pub total_ticks: u64,
    /// Per-second snapshots; empty unless tracing was requested.
    pub trace: Vec<SchedulerStep>,
}

/// Timed multi-worker scheduler.
///
/// Holds the immutable graph and the durations resolved once at
/// construction. All per-run state (completed set, worker slots, clock)
/// lives inside [`Scheduler::run`] and is dropped when it returns, so a
/// scheduler can be run repeatedly with identical results.
#[derive(Debug)]
pub struct Scheduler<'g> {
    graph: &'g DagGraph,
    durations: BTreeMap<TaskName, u64>,
    options: SchedulerOptions,
}

impl<'g> Scheduler<'g> {
    /// Validate options and price every task with `model`.
    pub fn new<D>(graph: &'g DagGraph, model: &D, options: SchedulerOptions) -> Result<Self>
    where
        D: DurationModel + ?Sized,
    {
        if options.workers == 0 {
            return Err(StepdagError::ConfigError(
                "worker count must be >= 1 (got 0)".to_string(),
            ));
        }

        let durations = resolve_durations(graph, model)?;

        Ok(Self {
            graph,
            durations,
            options,
        })
    }

    /// Durations used for this run, keyed by task.
    pub fn durations(&self) -> &BTreeMap<TaskName, u64> {
        &self.durations
    }

    /// Run the simulation to completion.
    ///
    /// Each tick:
    /// 1. compute the ready set from the completed set and the tasks held
    ///    by workers,
    /// 2. hand the smallest ready tasks to idle workers,
    /// 3. advance every worker by one tick,
    /// 4. record the tasks that finished.
    ///
    /// A tick that starts with every worker idle and nothing assignable can
    /// never make progress and fails with `Unschedulable`.
    pub fn run(&self) -> Result<Schedule> {
        let total = self.graph.len();
        let mut completed: BTreeSet<TaskName> = BTreeSet::new();
        let mut order: Vec<TaskName> = Vec::with_capacity(total);
        let mut pool = WorkerPool::new(self.options.workers);
        let mut clock: u64 = 0;
        let mut steps = Vec::new();

        info!(
            tasks = total,
            workers = self.options.workers,
            "scheduler: starting timed run"
        );

        while completed.len() < total {
            let in_flight = pool.in_flight();
            let ready = ready_tasks(self.graph, &completed, &in_flight);

            let idle = pool.idle_count();
            for task in ready.iter().take(idle) {
                let duration = self.duration_of(task)?;
                pool.assign(task, duration)?;
            }

            if pool.busy_count() == 0 {
                return Err(unschedulable(self.graph, &completed));
            }

            if self.options.record_trace {
                steps.push(self.snapshot(clock, &pool, &order));
            }

            let finished = pool.tick();
            clock += 1;

            for task in finished {
                debug!(task = %task, second = clock, "task done");
                completed.insert(task.clone());
                order.push(task);
            }

            trace!(second = clock, done = completed.len(), "tick complete");
        }

        if self.options.record_trace {
            steps.push(self.snapshot(clock, &pool, &order));
        }

        info!(total_ticks = clock, "scheduler: timed run finished");

        Ok(Schedule {
            order,
            total_ticks: clock,
            trace: steps,
        })
    }

    fn duration_of(&self, task: &str) -> Result<u64> {
        self.durations
            .get(task)
            .copied()
            .ok_or_else(|| StepdagError::NoDuration {
                task: task.to_string(),
            })
    }

    fn snapshot(&self, second: u64, pool: &WorkerPool, order: &[TaskName]) -> SchedulerStep {
        SchedulerStep {
            second,
            workers: pool
                .slots()
                .iter()
                .map(|slot| slot.as_ref().map(|s| s.task.clone()))
                .collect(),
            done: order.to_vec(),
        }
    }
}

/// Evaluate `model` once for every task in the graph.
///
/// A task occupies a worker for at least one tick, so zero durations are
/// stored as 1.
pub fn resolve_durations<D>(graph: &DagGraph, model: &D) -> Result<BTreeMap<TaskName, u64>>
where
    D: DurationModel + ?Sized,
{
    graph
        .tasks()
        .map(|task| {
            model
                .duration_of(task)
                .map(|d| (task.to_string(), d.max(1)))
                .ok_or_else(|| StepdagError::NoDuration {
                    task: task.to_string(),
                })
        })
        .collect()
}

/// Single-worker completion order: repeatedly complete the smallest ready
/// task. This is a topological sort with lexicographic tie-break.
pub fn schedule_single_worker(graph: &DagGraph) -> Result<Vec<TaskName>> {
    let total = graph.len();
    let mut completed: BTreeSet<TaskName> = BTreeSet::new();
    let mut order: Vec<TaskName> = Vec::with_capacity(total);
    let in_flight = BTreeSet::new();

    while order.len() < total {
        let Some(next) = ready_tasks(graph, &completed, &in_flight).into_iter().next() else {
            return Err(unschedulable(graph, &completed));
        };

        debug!(task = %next, position = order.len(), "ordered task");
        completed.insert(next.clone());
        order.push(next);
    }

    Ok(order)
}

/// Timed run with `workers` workers and alphabet durations offset by
/// `base_offset`.
pub fn schedule_with_workers(graph: &DagGraph, workers: usize, base_offset: u64) -> Result<Schedule> {
    let model = AlphabetDurations::new(base_offset);
    let options = SchedulerOptions {
        workers,
        record_trace: false,
    };
    Scheduler::new(graph, &model, options)?.run()
}

fn unschedulable(graph: &DagGraph, completed: &BTreeSet<TaskName>) -> StepdagError {
    let remaining: Vec<TaskName> = graph
        .tasks()
        .filter(|t| !completed.contains(*t))
        .map(|t| t.to_string())
        .collect();

    debug!(?remaining, "no task can make progress");
    StepdagError::Unschedulable { remaining }
}
