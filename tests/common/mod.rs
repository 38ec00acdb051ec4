#![allow(dead_code)]

pub use stepdag_test_utils::init_tracing;
pub use stepdag_test_utils::fixtures::{EXAMPLE_INSTRUCTIONS, EXAMPLE_PAIRS, example_graph};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Owned task names from string literals.
pub fn names(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
