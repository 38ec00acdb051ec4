mod common;
use crate::common::{TestResult, example_graph, init_tracing, names};

use std::collections::BTreeMap;

use stepdag::dag::analysis::{critical_path, total_work};
use stepdag::dag::duration::{duration, ordinal_value};
use stepdag::dag::{AlphabetDurations, DurationModel, Scheduler, SchedulerOptions};
use stepdag::report::render_dry_run;
use stepdag::errors::StepdagError;
use stepdag_test_utils::builders::GraphBuilder;

#[test]
fn ordinal_is_one_based_alphabet_position() {
    assert_eq!(ordinal_value("A"), Some(1));
    assert_eq!(ordinal_value("C"), Some(3));
    assert_eq!(ordinal_value("Z"), Some(26));
    assert_eq!(ordinal_value("a"), None);
    assert_eq!(ordinal_value("AB"), None);
    assert_eq!(ordinal_value(""), None);
}

#[test]
fn duration_adds_base_offset() {
    assert_eq!(duration("A", 60), Some(61));
    assert_eq!(duration("Z", 60), Some(86));
    assert_eq!(duration("E", 0), Some(5));

    let model = AlphabetDurations::new(60);
    assert_eq!(model.duration_of("A"), duration("A", 60));
    assert_eq!(model.duration_of("A"), model.duration_of("A"));
}

#[test]
fn custom_alphabet_changes_ordinals() {
    let model = AlphabetDurations::with_alphabet(10, "abc");
    assert_eq!(model.duration_of("a"), Some(11));
    assert_eq!(model.duration_of("c"), Some(13));
    assert_eq!(model.duration_of("A"), None);
    assert_eq!(model.alphabet(), "abc");
}

#[test]
fn closures_work_as_duration_models() -> TestResult {
    init_tracing();

    let graph = example_graph();
    let unit = |_: &str| -> Option<u64> { Some(1) };
    let options = SchedulerOptions {
        workers: 1,
        record_trace: false,
    };

    // With unit durations and one worker the timed order is the plain order.
    let schedule = Scheduler::new(&graph, &unit, options)?.run()?;
    assert_eq!(schedule.order, names(&["C", "A", "B", "D", "F", "E"]));
    assert_eq!(schedule.total_ticks, 6);

    Ok(())
}

#[test]
fn unpriced_task_fails_before_first_tick() {
    init_tracing();

    let graph = GraphBuilder::new().edge("A", "step-two").build();
    let model = AlphabetDurations::new(0);

    match Scheduler::new(&graph, &model, SchedulerOptions::default()) {
        Err(StepdagError::NoDuration { task }) => assert_eq!(task, "step-two"),
        other => panic!("Expected NoDuration, got: {:?}", other),
    }
}

#[test]
fn durations_are_resolved_once_per_task() -> TestResult {
    init_tracing();

    let graph = example_graph();
    let model = AlphabetDurations::new(60);
    let scheduler = Scheduler::new(&graph, &model, SchedulerOptions::default())?;

    let durations: Vec<(&str, u64)> = scheduler
        .durations()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(
        durations,
        vec![("A", 61), ("B", 62), ("C", 63), ("D", 64), ("E", 65), ("F", 66)]
    );

    Ok(())
}

#[test]
fn durations_past_u64_max_are_unpriced() {
    init_tracing();

    assert_eq!(duration("A", u64::MAX), None);
    assert_eq!(duration("A", u64::MAX - 1), Some(u64::MAX));
    assert_eq!(AlphabetDurations::new(u64::MAX).duration_of("A"), None);

    let graph = GraphBuilder::new().edge("A", "B").build();
    let model = AlphabetDurations::new(u64::MAX);
    match Scheduler::new(&graph, &model, SchedulerOptions::default()) {
        Err(StepdagError::NoDuration { task }) => assert_eq!(task, "A"),
        other => panic!("Expected NoDuration, got: {:?}", other),
    }
}

#[test]
fn long_chains_saturate_instead_of_overflowing() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .edges(&[("A", "B"), ("B", "C")])
        .build();
    let half = u64::MAX / 2;
    let durations: BTreeMap<String, u64> = [("A", half), ("B", half), ("C", half)]
        .into_iter()
        .map(|(t, d)| (t.to_string(), d))
        .collect();

    let path = critical_path(&graph, &durations).ok_or("graph is acyclic")?;
    assert_eq!(path.length, u64::MAX);
    assert_eq!(path.tasks, names(&["A", "B", "C"]));
    assert_eq!(total_work(&durations), u64::MAX);

    let out = render_dry_run(&graph, &AlphabetDurations::new(half), 2);
    assert!(out.contains("critical path: ABC (length overflows u64)"));

    Ok(())
}
