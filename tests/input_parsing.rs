mod common;
use crate::common::{EXAMPLE_INSTRUCTIONS, EXAMPLE_PAIRS, TestResult, init_tracing, names};

use std::io::Write;

use stepdag::dag::{DagGraph, schedule_single_worker};
use stepdag::errors::StepdagError;
use stepdag::input::{InstructionParser, UnknownLine, parse_instructions, read_instructions};
use stepdag::types::Constraint;
use tempfile::NamedTempFile;

#[test]
fn example_instructions_parse_into_pairs() -> TestResult {
    init_tracing();

    let constraints = parse_instructions(EXAMPLE_INSTRUCTIONS, UnknownLine::Reject)?;
    let expected: Vec<Constraint> = EXAMPLE_PAIRS.iter().map(|&p| p.into()).collect();
    assert_eq!(constraints, expected);

    let order = schedule_single_worker(&DagGraph::build(constraints)?)?;
    assert_eq!(order, names(&["C", "A", "B", "D", "F", "E"]));

    Ok(())
}

#[test]
fn blank_lines_and_surrounding_whitespace_are_ignored() -> TestResult {
    init_tracing();

    let text = "\n   Step X must be finished before step Y can begin.   \n\n";
    let constraints = parse_instructions(text, UnknownLine::Reject)?;
    assert_eq!(constraints, vec![Constraint::new("X", "Y")]);

    Ok(())
}

#[test]
fn multi_character_ids_are_accepted() -> TestResult {
    init_tracing();

    let parser = InstructionParser::new(UnknownLine::Reject)?;
    let c = parser
        .parse_line(1, "Step fetch must be finished before step build can begin.")?
        .ok_or("expected a constraint")?;
    assert_eq!(c, Constraint::new("fetch", "build"));

    Ok(())
}

#[test]
fn unknown_lines_are_skipped_by_default() -> TestResult {
    init_tracing();

    let text = "# comment\nStep A must be finished before step B can begin.\nnonsense";
    let constraints = parse_instructions(text, UnknownLine::Skip)?;
    assert_eq!(constraints, vec![Constraint::new("A", "B")]);

    Ok(())
}

#[test]
fn unknown_lines_fail_in_strict_mode() {
    init_tracing();

    let text = "Step A must be finished before step B can begin.\nStep B must finish first";

    match parse_instructions(text, UnknownLine::Reject) {
        Err(StepdagError::ParseError { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "Step B must finish first");
        }
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn instructions_are_read_from_a_file() -> TestResult {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    write!(file, "{}", EXAMPLE_INSTRUCTIONS)?;

    let constraints = read_instructions(file.path(), UnknownLine::Reject)?;
    assert_eq!(constraints.len(), 7);
    assert_eq!(constraints[0], Constraint::new("C", "A"));

    Ok(())
}
