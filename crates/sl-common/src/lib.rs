pub mod experience;
pub mod logging;
pub mod matching;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use experience::{total_experience, ExperienceError};
pub use matching::scoring::{evaluate, screen_candidate, Decision, MatchResult};

/// Structured candidate profile as produced by the upstream extraction
/// stage. The extractor enforces the schema; the core only re-checks the
/// invariants it actually relies on (see [`CandidateProfile::validate`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Employment date ranges as (start_year, end_year) pairs, where the
    /// end side may be the literal "Present" (any casing).
    pub roles: Vec<(String, String)>,
    pub skills: Vec<String>,
    pub primary_technologies: Vec<String>,
    pub current_role: String,
    pub education: String,
    #[serde(default)]
    pub notable_achievements: Option<Vec<String>>,
}

/// Structured job requirements as produced by the upstream extraction
/// stage. `minimum_experience_years` is non-negative by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub minimum_experience_years: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("candidate name must not be empty")]
    EmptyName,
    #[error("role {index} has an empty year field")]
    EmptyRoleYear { index: usize },
}

impl CandidateProfile {
    /// Minimal input boundary: reject profiles the scoring core cannot
    /// evaluate meaningfully. Year tokens are parsed later by the
    /// experience calculator; here we only rule out structurally empty
    /// fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        for (index, (start, end)) in self.roles.iter().enumerate() {
            if start.trim().is_empty() || end.trim().is_empty() {
                return Err(ValidationError::EmptyRoleYear { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            name: "Alice Chen".into(),
            roles: vec![("2019".into(), "Present".into())],
            skills: vec!["Python".into()],
            primary_technologies: vec!["Python".into()],
            current_role: "Backend Engineer".into(),
            education: "BSc Computer Science".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert_eq!(profile().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut p = profile();
        p.name = "   ".into();
        assert_eq!(p.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn empty_role_year_is_rejected_with_index() {
        let mut p = profile();
        p.roles.push(("2017".into(), "".into()));
        assert_eq!(p.validate(), Err(ValidationError::EmptyRoleYear { index: 1 }));
    }

    #[test]
    fn optional_fields_default_to_none_on_deserialize() {
        let json = r#"{
            "name": "Bob",
            "roles": [["2017", "2019"]],
            "skills": ["sql"],
            "primary_technologies": [],
            "current_role": "DBA",
            "education": "BSc"
        }"#;
        let p: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.email, None);
        assert_eq!(p.notable_achievements, None);
        assert_eq!(p.roles, vec![("2017".to_string(), "2019".to_string())]);
    }
}
