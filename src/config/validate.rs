// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, StepdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::StepdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.schedule, raw.graph))
    }
}

/// Semantic checks that deserialization cannot express.
///
/// Negative numbers never get here: `workers` and `base_offset` are unsigned,
/// so `toml` rejects them while parsing.
///
/// Cycles are deliberately not checked; a cyclic graph is a valid input that
/// the scheduler reports as `Unschedulable`.
fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_schedule(cfg)?;
    validate_alphabet(cfg)?;
    validate_constraints(cfg)?;
    Ok(())
}

fn validate_schedule(cfg: &RawConfigFile) -> Result<()> {
    if cfg.schedule.workers == 0 {
        return Err(StepdagError::ConfigError(
            "[schedule].workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_alphabet(cfg: &RawConfigFile) -> Result<()> {
    let alphabet = &cfg.schedule.alphabet;
    if alphabet.is_empty() {
        return Err(StepdagError::ConfigError(
            "[schedule].alphabet must not be empty".to_string(),
        ));
    }

    let mut prev: Option<char> = None;
    for c in alphabet.chars() {
        // Ordinals must grow with the tie-break order.
        if let Some(p) = prev
            && c <= p
        {
            return Err(StepdagError::ConfigError(format!(
                "[schedule].alphabet must be strictly ascending ('{c}' follows '{p}')"
            )));
        }
        prev = Some(c);
    }
    Ok(())
}

fn validate_constraints(cfg: &RawConfigFile) -> Result<()> {
    for (prerequisite, dependent) in cfg.graph.constraints.iter() {
        if prerequisite == dependent {
            return Err(StepdagError::ConfigError(format!(
                "task '{}' cannot depend on itself in [graph].constraints",
                dependent
            )));
        }
    }
    Ok(())
}
