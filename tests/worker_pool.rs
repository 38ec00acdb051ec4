mod common;
use crate::common::{TestResult, init_tracing, names};

use stepdag::dag::WorkerPool;
use stepdag::errors::StepdagError;

#[test]
fn assign_fills_lowest_idle_worker_first() -> TestResult {
    init_tracing();

    let mut pool = WorkerPool::new(3);
    assert_eq!(pool.idle_count(), 3);

    assert_eq!(pool.assign("B", 2)?, 0);
    assert_eq!(pool.assign("A", 1)?, 1);
    assert_eq!(pool.idle_count(), 1);
    assert_eq!(pool.busy_count(), 2);

    // A finishes; its slot is reused before the untouched third one.
    assert_eq!(pool.tick(), names(&["A"]));
    assert_eq!(pool.assign("C", 5)?, 1);

    Ok(())
}

#[test]
fn assign_without_idle_worker_fails() -> TestResult {
    init_tracing();

    let mut pool = WorkerPool::new(1);
    pool.assign("A", 3)?;

    match pool.assign("B", 1) {
        Err(StepdagError::NoIdleWorker { task }) => assert_eq!(task, "B"),
        other => panic!("Expected NoIdleWorker, got: {:?}", other),
    }

    Ok(())
}

#[test]
fn tick_reports_tasks_reaching_zero_in_ascending_order() -> TestResult {
    init_tracing();

    let mut pool = WorkerPool::new(3);
    pool.assign("Q", 2)?;
    pool.assign("B", 2)?;
    pool.assign("M", 3)?;

    assert!(pool.tick().is_empty());
    assert_eq!(
        pool.in_flight().into_iter().collect::<Vec<_>>(),
        names(&["B", "M", "Q"])
    );

    assert_eq!(pool.tick(), names(&["B", "Q"]));
    assert_eq!(pool.idle_count(), 2);

    let slot = pool.slots()[2].as_ref().ok_or("worker 2 should be busy")?;
    assert_eq!(slot.task, "M");
    assert_eq!(slot.remaining, 1);

    assert_eq!(pool.tick(), names(&["M"]));
    assert_eq!(pool.idle_count(), 3);

    // Ticking an idle pool is a no-op.
    assert!(pool.tick().is_empty());

    Ok(())
}

#[test]
fn zero_duration_occupies_one_tick() -> TestResult {
    init_tracing();

    let mut pool = WorkerPool::new(1);
    pool.assign("A", 0)?;
    assert_eq!(pool.idle_count(), 0);
    assert_eq!(pool.tick(), names(&["A"]));

    Ok(())
}
