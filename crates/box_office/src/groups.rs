use cinema::{CinemaError, Result};
use std::env;

const ENV_GROUPS: &str = "CINEMA_GROUPS";
const DEFAULT_GROUPS: [usize; 2] = [4, 2];

/// Group sizes to book, in arrival order
pub fn from_env() -> Result<Vec<usize>> {
    match env::var(ENV_GROUPS) {
        Ok(groups) if !groups.trim().is_empty() => parse_groups(&groups),
        _ => Ok(DEFAULT_GROUPS.to_vec()),
    }
}

/// Parses a comma separated list such as `4, 2, 3`
pub fn parse_groups(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or_else(|| {
                    CinemaError::InvalidConfiguration(format!("Invalid group size: {s}"))
                })
        })
        .collect()
}
