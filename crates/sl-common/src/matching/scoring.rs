use serde::{Deserialize, Serialize};
use tracing::debug;

use super::skills::coverage;
use super::weights::{Weights, ACCEPT_REASON, ACCEPT_THRESHOLD, REJECT_REASON, SCREENING_WEIGHTS};
use crate::experience::{total_experience, ExperienceError};
use crate::{CandidateProfile, JobRequirements};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "Accept",
            Decision::Reject => "Reject",
        }
    }
}

/// Final screening verdict for one candidate against one job.
///
/// `required_skills_match` and `nice_to_have_match` are reported rounded
/// to 2 decimal places; `final_score` is computed from the unrounded
/// fractions and truncated to an integer in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub required_skills_match: f64,
    pub nice_to_have_match: f64,
    pub experience_match: bool,
    pub final_score: u8,
    pub decision: Decision,
    pub reason: String,
}

/// Scoring policy. `Default` is the production policy (60/20/20 weights,
/// accept at 70). Alternative policies are an explicit config, never a
/// silent behavior change.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub weights: Weights,
    pub accept_threshold: u8,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            weights: SCREENING_WEIGHTS,
            accept_threshold: ACCEPT_THRESHOLD,
        }
    }
}

pub struct ScreeningEngine {
    config: ScreeningConfig,
}

impl ScreeningEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        Self { config }
    }

    /// Weighted decision scoring over already-computed inputs. Pure and
    /// deterministic: identical inputs always yield an identical result.
    pub fn evaluate(
        &self,
        candidate_skills: &[String],
        experience_years: i32,
        job: &JobRequirements,
    ) -> MatchResult {
        let required_score = coverage(&job.required_skills, candidate_skills);
        let nice_score = coverage(&job.nice_to_have_skills, candidate_skills);
        let experience_ok = i64::from(experience_years) >= i64::from(job.minimum_experience_years);

        let weights = self.config.weights;
        let raw = required_score * weights.required_skills
            + nice_score * weights.nice_to_have
            + if experience_ok { weights.experience } else { 0.0 };
        // Truncation, not rounding.
        let final_score = raw as u8;

        let decision = if final_score >= self.config.accept_threshold {
            Decision::Accept
        } else {
            Decision::Reject
        };
        let reason = match decision {
            Decision::Accept => ACCEPT_REASON,
            Decision::Reject => REJECT_REASON,
        };

        debug!(
            required_score,
            nice_score,
            experience_ok,
            final_score,
            decision = decision.as_str(),
            "screening decision"
        );

        MatchResult {
            required_skills_match: round2(required_score),
            nice_to_have_match: round2(nice_score),
            experience_match: experience_ok,
            final_score,
            decision,
            reason: reason.to_string(),
        }
    }
}

/// Evaluate with the default production policy.
pub fn evaluate(
    candidate_skills: &[String],
    experience_years: i32,
    job: &JobRequirements,
) -> MatchResult {
    ScreeningEngine::new(ScreeningConfig::default()).evaluate(candidate_skills, experience_years, job)
}

/// Full screening of one profile: experience calculation then evaluation.
/// Fails only when a role year token is malformed.
pub fn screen_candidate(
    candidate: &CandidateProfile,
    job: &JobRequirements,
) -> Result<MatchResult, ExperienceError> {
    let experience_years = total_experience(&candidate.roles)?;
    Ok(evaluate(&candidate.skills, experience_years, job))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
