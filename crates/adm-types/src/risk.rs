use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk tier derived from an additive risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Map a risk score to its tier: ≥9 critical, ≥6 high, ≥3 moderate.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 9 => RiskTier::Critical,
            s if s >= 6 => RiskTier::High,
            s if s >= 3 => RiskTier::Moderate,
            _ => RiskTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band of the additive risk score a factor belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    ImpactContext,
    DataSensitivity,
    Autonomy,
    RegulatorScope,
    EnterpriseIntegration,
}

/// Points contributed by one band.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub band: RiskBand,
    pub points: u32,
    /// Human-readable reason for the points
    pub detail: String,
}

/// Risk score, tier, and the per-band breakdown behind them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub tier: RiskTier,
    pub factors: Vec<RiskFactor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(2), RiskTier::Low);
        assert_eq!(RiskTier::from_score(3), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(5), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(6), RiskTier::High);
        assert_eq!(RiskTier::from_score(8), RiskTier::High);
        assert_eq!(RiskTier::from_score(9), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(u32::MAX), RiskTier::Critical);
    }

    #[test]
    fn tier_is_monotone_in_score() {
        let mut previous = RiskTier::from_score(0);
        for score in 1..20 {
            let tier = RiskTier::from_score(score);
            assert!(tier >= previous, "tier dropped at score {}", score);
            previous = tier;
        }
    }

    #[test]
    fn tier_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RiskTier::Moderate).unwrap(),
            "\"MODERATE\""
        );
        assert_eq!(RiskTier::Critical.to_string(), "CRITICAL");
    }
}
