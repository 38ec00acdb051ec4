// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod report;
pub mod types;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default};
use crate::dag::analysis::find_cycle;
use crate::dag::{
    AlphabetDurations, DagGraph, Scheduler, SchedulerOptions, schedule_single_worker,
};
use crate::errors::StepdagError;
use crate::input::{UnknownLine, read_instructions};
use crate::types::Constraint;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - reading instructions
/// - graph construction
/// - the single-worker order and the timed simulation
/// - report printing
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?
        .with_overrides(args.workers, args.base_offset)?;

    let constraints = gather_constraints(&args, &cfg)?;
    let graph = DagGraph::build_with_tasks(cfg.graph.tasks.iter().cloned(), constraints)?;
    let model =
        AlphabetDurations::with_alphabet(cfg.schedule.base_offset, cfg.schedule.alphabet.clone());

    info!(
        tasks = graph.len(),
        constraints = graph.edge_count(),
        workers = cfg.schedule.workers,
        base_offset = cfg.schedule.base_offset,
        "graph ready"
    );

    if args.dry_run {
        print!(
            "{}",
            report::render_dry_run(&graph, &model, cfg.schedule.workers)
        );
        debug!("dry-run complete (no scheduling)");
        return Ok(());
    }

    if args.mode.wants_order() {
        let order = schedule_single_worker(&graph).inspect_err(|e| explain_failure(&graph, e))?;
        println!("Order:     {}", report::format_order(&order));
    }

    if args.mode.wants_timed() {
        let options = SchedulerOptions {
            workers: cfg.schedule.workers,
            record_trace: args.trace,
        };
        let schedule = Scheduler::new(&graph, &model, options)?
            .run()
            .inspect_err(|e| explain_failure(&graph, e))?;

        if args.trace {
            print!("{}", report::render_trace(&schedule.trace));
        }
        println!(
            "New order: {} ({} seconds)",
            report::format_order(&schedule.order),
            schedule.total_ticks
        );
    }

    Ok(())
}

/// Config constraints, plus instructions from `--input` (or stdin when the
/// config supplies none).
fn gather_constraints(args: &CliArgs, cfg: &ConfigFile) -> Result<Vec<Constraint>> {
    let mut constraints: Vec<Constraint> = cfg
        .graph
        .constraints
        .iter()
        .cloned()
        .map(Constraint::from)
        .collect();

    let unknown = if args.strict {
        UnknownLine::Reject
    } else {
        UnknownLine::Skip
    };

    let source = match (&args.input, constraints.is_empty()) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some("-".into()),
        (None, false) => None,
    };

    if let Some(path) = source {
        debug!(?path, "reading instructions");
        constraints.extend(read_instructions(&path, unknown)?);
    }

    Ok(constraints)
}

/// Add cycle diagnostics to the log when a run gets stuck.
fn explain_failure(graph: &DagGraph, err: &StepdagError) {
    if let StepdagError::Unschedulable { remaining } = err {
        match find_cycle(graph) {
            Some(task) => warn!(?remaining, cycle = %task, "run stuck on a dependency cycle"),
            None => warn!(?remaining, "run stuck with no cycle found"),
        }
    }
}
