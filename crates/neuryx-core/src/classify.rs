//! Threshold classification of the final score.

use serde::{Deserialize, Serialize};

use neuryx_common::{Domain, RiskLevel};

/// Domain tier thresholds. Comparisons are strictly greater-than, so a
/// score sitting exactly on a threshold lands in the lower tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: f64,
    pub moderate: f64,
}

impl TierThresholds {
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Alzheimer => Self { high: 60.0, moderate: 30.0 },
            Domain::Parkinson => Self { high: 40.0, moderate: 20.0 },
        }
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        if score > self.high {
            RiskLevel::High
        } else if score > self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alzheimer_tiers() {
        let t = TierThresholds::for_domain(Domain::Alzheimer);
        assert_eq!(t.classify(75.0), RiskLevel::High);
        assert_eq!(t.classify(45.0), RiskLevel::Moderate);
        assert_eq!(t.classify(10.0), RiskLevel::Low);
    }

    #[test]
    fn test_parkinson_tiers() {
        let t = TierThresholds::for_domain(Domain::Parkinson);
        assert_eq!(t.classify(41.0), RiskLevel::High);
        assert_eq!(t.classify(25.0), RiskLevel::Moderate);
        assert_eq!(t.classify(5.0), RiskLevel::Low);
    }

    #[test]
    fn test_boundary_scores_take_lower_tier() {
        let alz = TierThresholds::for_domain(Domain::Alzheimer);
        assert_eq!(alz.classify(60.0), RiskLevel::Moderate);
        assert_eq!(alz.classify(30.0), RiskLevel::Low);

        let park = TierThresholds::for_domain(Domain::Parkinson);
        assert_eq!(park.classify(40.0), RiskLevel::Moderate);
        assert_eq!(park.classify(20.0), RiskLevel::Low);
    }

    #[test]
    fn test_every_score_gets_exactly_one_tier() {
        let t = TierThresholds::for_domain(Domain::Alzheimer);
        let mut score = 0.0;
        while score <= 100.0 {
            // classify is total over [0,100]; just exercise the sweep.
            let _ = t.classify(score);
            score += 0.25;
        }
        assert_eq!(t.classify(0.0), RiskLevel::Low);
        assert_eq!(t.classify(100.0), RiskLevel::High);
    }
}
