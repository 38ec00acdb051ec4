//! The worked example from the sleigh-assembly instructions.

use stepdag::dag::DagGraph;
use stepdag::types::Constraint;

/// Example instructions, exactly as they appear in an input file.
pub const EXAMPLE_INSTRUCTIONS: &str = "\
Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.
";

/// The same instructions as parsed pairs.
pub const EXAMPLE_PAIRS: [(&str, &str); 7] = [
    ("C", "A"),
    ("C", "F"),
    ("A", "B"),
    ("A", "D"),
    ("B", "E"),
    ("D", "E"),
    ("F", "E"),
];

pub fn example_constraints() -> Vec<Constraint> {
    EXAMPLE_PAIRS
        .iter()
        .map(|&(p, d)| Constraint::new(p, d))
        .collect()
}

pub fn example_graph() -> DagGraph {
    DagGraph::build(example_constraints()).expect("example graph is valid")
}
