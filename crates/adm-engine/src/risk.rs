//! Additive risk scoring.
//!
//! Five independent bands are summed into an integer score that maps onto a
//! [`RiskTier`]. The scorer reads the profile directly and does not depend on
//! archetype scoring, so it can be used on its own.

use adm_types::{
    ApplicationProfile, DataClass, ImpactContext, RiskAssessment, RiskBand, RiskFactor, RiskTier,
};

/// Score a profile's risk and map it to a tier.
pub fn assess_risk(profile: &ApplicationProfile) -> RiskAssessment {
    let factors: Vec<RiskFactor> = [
        Some(impact_factor(profile)),
        data_sensitivity_factor(profile),
        autonomy_factor(profile),
        regulator_scope_factor(profile),
        enterprise_factor(profile),
    ]
    .into_iter()
    .flatten()
    .collect();

    let score = factors.iter().map(|f| f.points).sum();
    RiskAssessment {
        score,
        tier: RiskTier::from_score(score),
        factors,
    }
}

/// Absent and unrecognized contexts score as internal.
fn impact_factor(profile: &ApplicationProfile) -> RiskFactor {
    let (points, label) = match profile.impact_context {
        Some(ImpactContext::CustomerFacing) => (2, "customer_facing"),
        Some(ImpactContext::MissionCritical) => (3, "mission_critical"),
        Some(ImpactContext::SafetyCritical) => (4, "safety_critical"),
        Some(ImpactContext::Internal) => (1, "internal"),
        Some(ImpactContext::Unrecognized) | None => (1, "internal (default)"),
    };
    RiskFactor {
        band: RiskBand::ImpactContext,
        points,
        detail: format!("impact context {}", label),
    }
}

/// First match wins: PII scores 1 even when PHI or financial data is also
/// declared.
fn data_sensitivity_factor(profile: &ApplicationProfile) -> Option<RiskFactor> {
    let (points, detail) = if profile.declares(&DataClass::Pii) {
        (1, "PII declared")
    } else if profile.declares(&DataClass::Phi) || profile.declares(&DataClass::Financial) {
        (2, "PHI or financial data declared")
    } else {
        return None;
    };
    Some(RiskFactor {
        band: RiskBand::DataSensitivity,
        points,
        detail: detail.to_string(),
    })
}

fn autonomy_factor(profile: &ApplicationProfile) -> Option<RiskFactor> {
    let autonomy = profile.agentic.autonomy();
    let points = match autonomy {
        a if a <= 0.0 => return None,
        a if a <= 30.0 => 1,
        a if a <= 70.0 => 2,
        _ => 3,
    };
    Some(RiskFactor {
        band: RiskBand::Autonomy,
        points,
        detail: format!("autonomy threshold {}", autonomy),
    })
}

fn regulator_scope_factor(profile: &ApplicationProfile) -> Option<RiskFactor> {
    let regimes = &profile.regulatory.regulator_scope;
    let points = match regimes.len() {
        0 => return None,
        1 => 2,
        _ => 3,
    };
    Some(RiskFactor {
        band: RiskBand::RegulatorScope,
        points,
        detail: format!("regulator scope {}", regimes.join(", ")),
    })
}

fn enterprise_factor(profile: &ApplicationProfile) -> Option<RiskFactor> {
    if !profile.enterprise.has_systems() {
        return None;
    }
    Some(RiskFactor {
        band: RiskBand::EnterpriseIntegration,
        points: 1,
        detail: format!(
            "enterprise systems {}",
            profile.enterprise.systems.join(", ")
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adm_types::{AgenticConfig, EnterpriseConfig, RegulatoryConfig};

    fn with_autonomy(autonomy_threshold: f64) -> ApplicationProfile {
        ApplicationProfile {
            agentic: AgenticConfig {
                autonomy_threshold,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn empty_profile_is_internal_low() {
        let risk = assess_risk(&ApplicationProfile::default());
        assert_eq!(risk.score, 1);
        assert_eq!(risk.tier, RiskTier::Low);
        assert_eq!(risk.factors.len(), 1);
        assert_eq!(risk.factors[0].band, RiskBand::ImpactContext);
    }

    #[test]
    fn impact_contexts_score_one_to_four() {
        let expected = [
            (ImpactContext::Internal, 1),
            (ImpactContext::CustomerFacing, 2),
            (ImpactContext::MissionCritical, 3),
            (ImpactContext::SafetyCritical, 4),
            (ImpactContext::Unrecognized, 1),
        ];
        for (impact, points) in expected {
            let profile = ApplicationProfile {
                impact_context: Some(impact),
                ..Default::default()
            };
            assert_eq!(assess_risk(&profile).score, points, "{:?}", impact);
        }
    }

    #[test]
    fn data_sensitivity_uses_first_match() {
        let score = |classes: Vec<DataClass>| {
            assess_risk(&ApplicationProfile {
                data_sensitivity: classes,
                ..Default::default()
            })
            .score
                - 1
        };
        assert_eq!(score(vec![]), 0);
        assert_eq!(score(vec![DataClass::None]), 0);
        assert_eq!(score(vec![DataClass::Pii]), 1);
        assert_eq!(score(vec![DataClass::Phi]), 2);
        assert_eq!(score(vec![DataClass::Financial]), 2);
        assert_eq!(score(vec![DataClass::Phi, DataClass::Financial]), 2);
        assert_eq!(score(vec![DataClass::Phi, DataClass::Pii]), 1);
        assert_eq!(score(vec![DataClass::Other("biometric".into())]), 0);
    }

    #[test]
    fn autonomy_bands() {
        let band = |a: f64| assess_risk(&with_autonomy(a)).score - 1;
        assert_eq!(band(0.0), 0);
        assert_eq!(band(-5.0), 0);
        assert_eq!(band(0.5), 1);
        assert_eq!(band(30.0), 1);
        assert_eq!(band(30.1), 2);
        assert_eq!(band(70.0), 2);
        assert_eq!(band(70.1), 3);
        assert_eq!(band(100.0), 3);
        assert_eq!(band(250.0), 3);
        assert_eq!(band(f64::NAN), 0);
    }

    #[test]
    fn regulator_scope_and_enterprise() {
        let one = ApplicationProfile {
            regulatory: RegulatoryConfig {
                regulator_scope: vec!["HIPAA".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(assess_risk(&one).score, 3);

        let many = ApplicationProfile {
            regulatory: RegulatoryConfig {
                regulator_scope: vec!["HIPAA".into(), "GDPR".into(), "SOX".into()],
                ..Default::default()
            },
            enterprise: EnterpriseConfig {
                systems: vec!["SAP".into(), "Workday".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let risk = assess_risk(&many);
        assert_eq!(risk.score, 1 + 3 + 1);
        assert_eq!(risk.tier, RiskTier::Moderate);
    }

    #[test]
    fn everything_at_once_is_critical() {
        let profile: ApplicationProfile = serde_json::from_value(serde_json::json!({
            "impactContext": "safety_critical",
            "dataSensitivity": ["phi"],
            "autonomyThreshold": 90,
            "regulatorScope": ["HIPAA", "GDPR"],
            "systems": ["Epic"]
        }))
        .unwrap();
        let risk = assess_risk(&profile);
        assert_eq!(risk.score, 4 + 2 + 3 + 3 + 1);
        assert_eq!(risk.tier, RiskTier::Critical);
        assert_eq!(risk.factors.len(), 5);
    }
}
