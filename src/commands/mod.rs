//! Command implementations for the DFS lineups CLI

pub mod common;
pub mod export;
pub mod rank;
pub mod toggle_sort;

use tracing::warn;

use crate::{
    cli::types::SalaryCap, error::LineupError, Result, DEFAULT_MAX_LINEUPS, MAX_LINEUPS_ENV_VAR,
    SALARY_CAP_ENV_VAR,
};


/// Resolve the salary cap from option or environment variable
pub fn resolve_salary_cap(cap: Option<SalaryCap>) -> Result<SalaryCap> {
    resolve_salary_cap_from(cap, std::env::var(SALARY_CAP_ENV_VAR).ok())
}

/// Resolve the salary cap from an option and a raw environment value.
///
/// An explicit cap wins; a set but unparsable environment value is an error.
pub fn resolve_salary_cap_from(
    cap: Option<SalaryCap>,
    env_value: Option<String>,
) -> Result<SalaryCap> {
    if let Some(cap) = cap {
        return Ok(cap);
    }
    match env_value {
        Some(raw) => raw.parse(),
        None => Err(LineupError::MissingSalaryCap {
            env_var: SALARY_CAP_ENV_VAR.to_string(),
        }),
    }
}

/// Largest lineup batch commands will load
pub fn max_lineups() -> usize {
    max_lineups_from(std::env::var(MAX_LINEUPS_ENV_VAR).ok())
}

/// Parse a row limit, falling back to the default when unset or invalid.
pub fn max_lineups_from(env_value: Option<String>) -> usize {
    match env_value {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(max) if max > 0 => max,
            _ => {
                warn!(
                    value = %raw,
                    default = DEFAULT_MAX_LINEUPS,
                    "ignoring invalid {}", MAX_LINEUPS_ENV_VAR
                );
                DEFAULT_MAX_LINEUPS
            }
        },
        None => DEFAULT_MAX_LINEUPS,
    }
}
