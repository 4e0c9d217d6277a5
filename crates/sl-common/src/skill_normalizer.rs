use std::collections::HashMap;
use std::sync::LazyLock;

/// Skill alias → canonical form mapping (O(1) lookup).
///
/// The table captures the spelling variants the upstream extractors cannot
/// be trusted to collapse themselves. Unknown labels pass through
/// lower-trimmed, so extending the table never changes existing matches.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("postgres", "postgresql"),
        ("postgre sql", "postgresql"),
        ("rest api", "restful api"),
        ("rest apis", "restful api"),
        ("fast api", "fastapi"),
        ("aws ec2", "aws"),
    ])
});

/// Canonicalize a free-text skill label: lowercase, trim, then alias
/// lookup. Pure and total; never fails.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = skill.to_lowercase().trim().to_string();
    match ALIAS_TO_CANONICAL.get(normalized.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => normalized,
    }
}

/// Normalize a skill list in order, preserving duplicates.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| normalize_skill(s)).collect()
}
