use chrono::{Datelike, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExperienceError {
    #[error("invalid year token: {0:?}")]
    InvalidYear(String),
}

/// Sum of (end - start) across all role date ranges, in whole years.
///
/// An end token equal to "present" (any casing) stands for the current
/// calendar year. Ranges are summed naively: overlapping employment
/// periods double-count and an inverted range subtracts. Preserved
/// behavior; overlap deduplication would be a semantic change.
pub fn total_experience(roles: &[(String, String)]) -> Result<i32, ExperienceError> {
    total_experience_as_of(roles, Utc::now().year())
}

/// Same as [`total_experience`] with the clock injected, for callers that
/// need a fixed reference year.
pub fn total_experience_as_of(
    roles: &[(String, String)],
    current_year: i32,
) -> Result<i32, ExperienceError> {
    let mut total_years = 0;
    for (start, end) in roles {
        let start_year = parse_year(start)?;
        let end_year = if end.trim().eq_ignore_ascii_case("present") {
            current_year
        } else {
            parse_year(end)?
        };
        total_years += end_year - start_year;
    }
    Ok(total_years)
}

fn parse_year(token: &str) -> Result<i32, ExperienceError> {
    token
        .trim()
        .parse()
        .map_err(|_| ExperienceError::InvalidYear(token.to_string()))
}
