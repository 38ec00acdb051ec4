// src/input.rs

//! Parsing of constraint records such as
//! `Step C must be finished before step A can begin.`

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use tracing::{debug, warn};

use crate::errors::{Result, StepdagError};
use crate::types::Constraint;

const INSTRUCTION_PATTERN: &str =
    r"^\s*Step (\S+) must be finished before step (\S+) can begin\.?\s*$";

/// How to treat lines that are neither blank nor an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownLine {
    /// Log a warning and carry on.
    #[default]
    Skip,
    /// Fail with `ParseError`.
    Reject,
}

/// Line-oriented parser for precedence instructions.
#[derive(Debug, Clone)]
pub struct InstructionParser {
    pattern: Regex,
    unknown: UnknownLine,
}

impl InstructionParser {
    pub fn new(unknown: UnknownLine) -> Result<Self> {
        let pattern = Regex::new(INSTRUCTION_PATTERN)
            .context("compiling instruction pattern")?;
        Ok(Self { pattern, unknown })
    }

    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Result<Option<Constraint>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        if let Some(caps) = self.pattern.captures(line) {
            return Ok(Some(Constraint::new(&caps[1], &caps[2])));
        }

        match self.unknown {
            UnknownLine::Skip => {
                warn!(line = line_no, content = %line.trim(), "skipping unrecognised input line");
                Ok(None)
            }
            UnknownLine::Reject => Err(StepdagError::ParseError {
                line: line_no,
                content: line.trim().to_string(),
            }),
        }
    }

    /// Parse every line of `text`, in order. Line numbers are 1-based.
    pub fn parse(&self, text: &str) -> Result<Vec<Constraint>> {
        let mut constraints = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if let Some(c) = self.parse_line(idx + 1, line)? {
                constraints.push(c);
            }
        }
        debug!(constraints = constraints.len(), "parsed instructions");
        Ok(constraints)
    }
}

/// Convenience wrapper: parse `text` with a fresh parser.
pub fn parse_instructions(text: &str, unknown: UnknownLine) -> Result<Vec<Constraint>> {
    InstructionParser::new(unknown)?.parse(text)
}

/// Read instructions from `path`, or from stdin when `path` is `-`.
pub fn read_instructions(path: &Path, unknown: UnknownLine) -> Result<Vec<Constraint>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    parse_instructions(&text, unknown)
}
