use std::collections::HashSet;

use crate::skill_normalizer::normalize_skill;

/// Token-overlap equivalence: two labels refer to the same skill iff they
/// share at least one whitespace-delimited word.
///
/// This is a deliberately permissive word-level policy: "restful api" and
/// "api testing" match through the shared token "api", while "java" and
/// "javascript" do not (whole-token equality, not substring). Known coarse
/// behavior; stricter matching would be a new policy, not a fix here.
pub fn skill_matches(a: &str, b: &str) -> bool {
    let a_tokens: HashSet<&str> = a.split_whitespace().collect();
    let b_tokens: HashSet<&str> = b.split_whitespace().collect();
    a_tokens.intersection(&b_tokens).next().is_some()
}

/// Fraction of `wanted` skills satisfied by `available`, in [0, 1].
///
/// Both lists are normalized first. A wanted skill counts at most once no
/// matter how many available skills match it (any-match semantics); an
/// available skill may satisfy several wanted skills. An empty `wanted`
/// list scores 0.0 by policy, not 1.0.
pub fn coverage(wanted: &[String], available: &[String]) -> f64 {
    let wanted: Vec<String> = wanted.iter().map(|s| normalize_skill(s)).collect();
    if wanted.is_empty() {
        return 0.0;
    }

    let available: Vec<String> = available.iter().map(|s| normalize_skill(s)).collect();
    let matched = wanted
        .iter()
        .filter(|w| available.iter().any(|a| skill_matches(w, a)))
        .count();

    matched as f64 / wanted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shared_token_matches() {
        assert!(skill_matches("restful api", "api testing"));
        assert!(skill_matches("python", "python"));
    }

    #[test]
    fn token_boundary_is_whole_word_not_substring() {
        // "java" is a substring of "javascript" but not a shared token.
        assert!(!skill_matches("java", "javascript"));
        assert!(!skill_matches("sql", "postgresql"));
    }

    #[test]
    fn alias_variants_match_after_normalization() {
        // "rest apis" and "restful api" both normalize to "restful api".
        assert!(skill_matches(
            &normalize_skill("restful api"),
            &normalize_skill("rest apis")
        ));
    }

    #[test]
    fn empty_wanted_scores_zero() {
        assert_eq!(coverage(&[], &skills(&["python"])), 0.0);
        assert_eq!(coverage(&[], &[]), 0.0);
    }

    #[test]
    fn empty_available_scores_zero() {
        assert_eq!(coverage(&skills(&["python", "sql"]), &[]), 0.0);
    }

    #[test]
    fn partial_coverage_is_fractional() {
        // python matches via shared token; sql vs postgresql does not.
        let score = coverage(&skills(&["python", "sql"]), &skills(&["python", "postgresql"]));
        assert_eq!(score, 0.5);
    }

    #[test]
    fn wanted_skill_counts_at_most_once() {
        // Two available skills both match "python"; still one match.
        let score = coverage(&skills(&["python"]), &skills(&["python 3", "python scripting"]));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn available_skill_may_satisfy_multiple_wanted() {
        // Reuse of the same available skill across wanted entries is allowed.
        let score = coverage(
            &skills(&["api design", "api testing"]),
            &skills(&["restful api"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn coverage_idempotent_under_renormalization() {
        let wanted = skills(&[" Postgres ", "REST APIs"]);
        let available = skills(&["PostgreSQL", "restful api"]);
        let raw = coverage(&wanted, &available);
        let pre_normalized = coverage(
            &crate::skill_normalizer::normalize_skills(&wanted),
            &crate::skill_normalizer::normalize_skills(&available),
        );
        assert_eq!(raw, pre_normalized);
        assert_eq!(raw, 1.0);
    }
}
