// src/dag/worker_pool.rs

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::errors::{Result, StepdagError};
use crate::types::TaskName;

/// A task held by a worker, with the ticks it still needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub task: TaskName,
    pub remaining: u64,
}

/// Fixed number of identical simulated workers.
///
/// Each slot is either idle (`None`) or holds one task counting down to zero.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    slots: Vec<Option<Slot>>,
}

impl WorkerPool {
    /// Create a pool with `capacity` idle workers.
    ///
    /// Callers validate `capacity >= 1`; a zero-capacity pool can never make
    /// progress and the scheduler reports that as `Unschedulable`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn idle_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn busy_count(&self) -> usize {
        self.capacity() - self.idle_count()
    }

    /// Occupy the lowest-numbered idle worker with `task`.
    ///
    /// A task always occupies its worker for at least one tick, so a
    /// `duration` of 0 is treated as 1. Returns the worker index.
    pub fn assign(&mut self, task: &str, duration: u64) -> Result<usize> {
        let Some(index) = self.slots.iter().position(|s| s.is_none()) else {
            return Err(StepdagError::NoIdleWorker {
                task: task.to_string(),
            });
        };

        debug!(task, worker = index, duration, "assigned task to worker");
        self.slots[index] = Some(Slot {
            task: task.to_string(),
            remaining: duration.max(1),
        });
        Ok(index)
    }

    /// Advance every occupied worker by one tick.
    ///
    /// Returns the tasks that finished during this tick, in ascending order,
    /// and frees their workers.
    pub fn tick(&mut self) -> Vec<TaskName> {
        let mut finished = Vec::new();

        for slot in self.slots.iter_mut() {
            let Some(current) = slot.as_mut() else {
                continue;
            };

            current.remaining -= 1;
            trace!(task = %current.task, remaining = current.remaining, "tick");

            if current.remaining == 0 {
                if let Some(done) = slot.take() {
                    finished.push(done.task);
                }
            }
        }

        finished.sort();
        finished
    }

    /// Names of the tasks currently held by a worker.
    pub fn in_flight(&self) -> BTreeSet<TaskName> {
        self.slots
            .iter()
            .flatten()
            .map(|s| s.task.clone())
            .collect()
    }

    /// Read-only view of every worker, indexed by worker number.
    pub fn slots(&self) -> &[Option<Slot>] {
        &self.slots
    }
}
