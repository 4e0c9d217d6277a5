/// Screening weights (points out of a 100-point scale).
///
/// Required-skill coverage dominates; nice-to-have coverage and the
/// experience gate contribute a flat 20 points each. The experience term
/// is all-or-nothing, not proportional.
pub const SCREENING_WEIGHTS: Weights = Weights {
    required_skills: 60.0,
    nice_to_have: 20.0,
    experience: 20.0,
};

/// Minimum final score for an Accept decision.
pub const ACCEPT_THRESHOLD: u8 = 70;

/// Canned decision rationales. Static by design: the reason reports the
/// decision band, not a per-candidate explanation.
pub const ACCEPT_REASON: &str = "Strong overall match";
pub const REJECT_REASON: &str = "Meets experience but lacks core backend requirements";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub required_skills: f64,
    pub nice_to_have: f64,
    pub experience: f64,
}

impl Weights {
    pub fn max_score(&self) -> f64 {
        self.required_skills + self.nice_to_have + self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_hundred() {
        assert!((SCREENING_WEIGHTS.max_score() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_within_scale() {
        assert!(f64::from(ACCEPT_THRESHOLD) <= SCREENING_WEIGHTS.max_score());
    }
}
