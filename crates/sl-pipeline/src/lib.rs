use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use sl_common::{screen_candidate, CandidateProfile, JobRequirements, MatchResult, ValidationError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid profile {path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// One screened candidate, ready for ranking and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenedCandidate {
    pub name: String,
    pub result: MatchResult,
}

/// Read and deserialize a single structured job requirements document.
pub fn load_job_requirements(path: &Path) -> Result<JobRequirements, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every `*.json` profile in `dir`, in sorted filename order so the
/// ranking tie-break is reproducible across runs. Each profile goes
/// through the validated-input boundary before it reaches the core.
pub fn load_candidate_profiles(dir: &Path) -> Result<Vec<CandidateProfile>, PipelineError> {
    let entries = fs::read_dir(dir).map_err(|source| PipelineError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut profiles = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read_to_string(&path).map_err(|source| PipelineError::Io {
            path: path.clone(),
            source,
        })?;
        let profile: CandidateProfile =
            serde_json::from_str(&raw).map_err(|source| PipelineError::Json {
                path: path.clone(),
                source,
            })?;
        profile
            .validate()
            .map_err(|source| PipelineError::Validation { path, source })?;
        profiles.push(profile);
    }
    Ok(profiles)
}

/// Screen every profile against the job. A profile with malformed role
/// years fails only its own evaluation: it is logged and skipped, the
/// rest of the batch continues.
pub fn screen_all(job: &JobRequirements, profiles: &[CandidateProfile]) -> Vec<ScreenedCandidate> {
    let mut results = Vec::with_capacity(profiles.len());
    for profile in profiles {
        match screen_candidate(profile, job) {
            Ok(result) => {
                info!(
                    candidate = %profile.name,
                    final_score = result.final_score,
                    decision = result.decision.as_str(),
                    "candidate screened"
                );
                results.push(ScreenedCandidate {
                    name: profile.name.clone(),
                    result,
                });
            }
            Err(err) => {
                warn!(candidate = %profile.name, error = %err, "skipping candidate");
            }
        }
    }
    results
}

/// Order by final score descending. The sort is stable, so candidates
/// with equal scores keep their input order.
pub fn rank(results: &mut [ScreenedCandidate]) {
    results.sort_by(|a, b| b.result.final_score.cmp(&a.result.final_score));
}

/// Render the ranked key-value report.
pub fn render_report(ranked: &[ScreenedCandidate]) -> String {
    let mut out = String::new();
    out.push_str("FINAL RANKED RESULTS\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    for (index, candidate) in ranked.iter().enumerate() {
        let r = &candidate.result;
        out.push_str(&format!("\nRank {}: {}\n", index + 1, candidate.name));
        out.push_str(&format!(
            "  required_skills_match: {:.2}\n",
            r.required_skills_match
        ));
        out.push_str(&format!("  nice_to_have_match: {:.2}\n", r.nice_to_have_match));
        out.push_str(&format!("  experience_match: {}\n", r.experience_match));
        out.push_str(&format!("  final_score: {}\n", r.final_score));
        out.push_str(&format!("  decision: {}\n", r.decision.as_str()));
        out.push_str(&format!("  reason: {}\n", r.reason));
    }
    out
}
