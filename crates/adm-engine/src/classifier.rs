use adm_types::{
    ApplicationProfile, ArchetypeCode, ArchetypeScore, ClassificationResult, Dominance, Modifier,
    RiskAssessment,
};
use tracing::{debug, warn};

use crate::confidence::confidence;
use crate::config::ClassifierConfig;
use crate::conflict::{dominance, resolve_primary, Resolution, CONFLICT_RULES};
use crate::error::ConfigError;
use crate::modifiers::detect_modifiers;
use crate::normalize::Distribution;
use crate::rmf::generate_rmf;
use crate::risk::assess_risk;
use crate::signals::{score_profile, ScoreSheet};

/// Archetype Determination Matrix classifier.
///
/// Holds only its configuration; every call to [`Classifier::classify`] is
/// independent, so one classifier can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Build a classifier, rejecting invalid parameters.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a profile. Never fails: sparse or unusual profiles degrade
    /// to composite or unclassified results.
    pub fn classify(&self, profile: &ApplicationProfile) -> ClassificationResult {
        let sheet = score_profile(profile);
        let distribution = Distribution::from_sheet(&sheet);
        let survivors = distribution.survivors(self.config.survival_threshold);

        let dominant = dominance(&survivors, &distribution, self.config.dominance_gap);
        let resolution = resolve_primary(&survivors, profile, &CONFLICT_RULES);
        let modifiers = detect_modifiers(profile, &sheet, self.config.enterprise_modifier_score);
        let risk = assess_risk(profile);
        let confidence = confidence(&distribution.probabilities());

        let archetypes: Vec<ArchetypeScore> = survivors
            .iter()
            .take(self.config.max_archetypes)
            .cloned()
            .collect();

        let primary_archetype = match resolution.primary {
            ArchetypeCode::Unclassified => {
                warn!(
                    threshold = self.config.survival_threshold,
                    "No archetype survived filtering, profile left unclassified"
                );
                ArchetypeScore::unclassified()
            }
            code => distribution
                .get(code)
                .cloned()
                .unwrap_or_else(ArchetypeScore::unclassified),
        };

        let mut resolved = vec![primary_archetype.code];
        resolved.extend(
            survivors
                .iter()
                .map(|s| s.code)
                .filter(|code| *code != primary_archetype.code),
        );
        let rmf_profile = generate_rmf(&resolved, risk.tier, &modifiers);

        let decision_trace = TraceBuilder {
            config: &self.config,
            sheet: &sheet,
            distribution: &distribution,
            survivors: &survivors,
            resolution: &resolution,
            dominant,
            modifiers: &modifiers,
            risk: &risk,
        }
        .build();

        debug!(
            primary = primary_archetype.code.as_str(),
            dominant = %dominant,
            survivors = survivors.len(),
            risk_score = risk.score,
            risk_tier = %risk.tier,
            confidence,
            "Profile classified"
        );

        ClassificationResult {
            primary_archetype,
            archetypes,
            dominant,
            modifiers,
            risk_tier: risk.tier,
            risk_score: risk.score,
            confidence,
            decision_trace,
            mixture: distribution.ranked().to_vec(),
            rmf_profile,
        }
    }
}

/// Classify with the default configuration.
pub fn classify(profile: &ApplicationProfile) -> ClassificationResult {
    Classifier::default().classify(profile)
}

/// Renders the human-readable decision trace.
struct TraceBuilder<'a> {
    config: &'a ClassifierConfig,
    sheet: &'a ScoreSheet,
    distribution: &'a Distribution,
    survivors: &'a [ArchetypeScore],
    resolution: &'a Resolution,
    dominant: Dominance,
    modifiers: &'a [Modifier],
    risk: &'a RiskAssessment,
}

impl TraceBuilder<'_> {
    fn build(self) -> Vec<String> {
        let mut trace: Vec<String> = self.sheet.contributions().map(|c| c.to_string()).collect();

        let ranking: Vec<String> = self
            .distribution
            .ranked()
            .iter()
            .filter(|s| s.raw_score > 0)
            .map(|s| format!("{} {:.3}", s.code, s.probability))
            .collect();
        if !ranking.is_empty() {
            trace.push(format!("ranking: {}", ranking.join(", ")));
        }

        if self.survivors.is_empty() {
            trace.push(format!(
                "no archetype reached survival threshold {:.2}; primary {} {}",
                self.config.survival_threshold,
                ArchetypeCode::Unclassified,
                ArchetypeCode::Unclassified.name()
            ));
        } else {
            let codes: Vec<&str> = self.survivors.iter().map(|s| s.code.as_str()).collect();
            trace.push(format!(
                "survivors (probability >= {:.2}): {}",
                self.config.survival_threshold,
                codes.join(", ")
            ));
        }

        if let Some(rule) = self.resolution.rule {
            trace.push(format!(
                "conflict rule {}: primary {} {}",
                rule,
                self.resolution.primary,
                self.resolution.primary.name()
            ));
        }

        trace.push(self.dominance_line());

        if !self.modifiers.is_empty() {
            let tags: Vec<&str> = self.modifiers.iter().map(|m| m.tag()).collect();
            trace.push(format!("modifiers: {}", tags.join(", ")));
        }

        for factor in &self.risk.factors {
            trace.push(format!("risk: {} (+{})", factor.detail, factor.points));
        }
        trace.push(format!(
            "risk score {} -> {}",
            self.risk.score, self.risk.tier
        ));

        trace
    }

    fn dominance_line(&self) -> String {
        let (Some(top), gap) = (self.survivors.first(), self.config.dominance_gap) else {
            return format!("dominant: {}", self.dominant);
        };
        let runner_up = self.survivors.get(1).map(|s| s.raw_score).unwrap_or(0);
        let lead = self.distribution.gap(top.raw_score, runner_up);
        let comparison = if self.dominant.is_composite() { "<" } else { ">=" };
        format!(
            "dominant: {} (gap {:.3} {} {:.2})",
            self.dominant, lead, comparison, gap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adm_types::RiskTier;

    #[test]
    fn invalid_config_is_rejected() {
        let config = ClassifierConfig::default().with_survival_threshold(0.0);
        assert!(Classifier::new(config).is_err());
    }

    #[test]
    fn default_classifier_matches_free_function() {
        let profile = ApplicationProfile::default();
        assert_eq!(Classifier::default().classify(&profile), classify(&profile));
    }

    #[test]
    fn empty_profile_baseline() {
        let result = classify(&ApplicationProfile::default());
        assert_eq!(
            result.primary_code(),
            ArchetypeCode::AssistiveTextGeneration
        );
        assert_eq!(result.primary_archetype.raw_score, 7);
        assert_eq!(result.archetypes.len(), 1);
        assert_eq!(
            result.dominant,
            Dominance::Archetype(ArchetypeCode::AssistiveTextGeneration)
        );
        assert!(result.modifiers.is_empty());
        assert_eq!(result.risk_score, 1);
        assert_eq!(result.risk_tier, RiskTier::Low);
        assert_eq!(result.mixture.len(), 12);
    }

    #[test]
    fn trace_lists_signals_then_resolution() {
        let result = classify(&ApplicationProfile::default());
        assert_eq!(
            result.decision_trace,
            vec![
                "A1 Assistive Text Generation: retrieval disabled (+3)",
                "A1 Assistive Text Generation: structured output none or unset (+1)",
                "A1 Assistive Text Generation: no tool use (+3)",
                "ranking: A1 1.000",
                "survivors (probability >= 0.15): A1",
                "dominant: A1 (gap 1.000 >= 0.10)",
                "risk: impact context internal (default) (+1)",
                "risk score 1 -> LOW",
            ]
        );
    }

    #[test]
    fn high_threshold_falls_back_to_unclassified() {
        // A8 = 7, A9 = 5, A1 = 4: nothing reaches 0.5.
        let profile: ApplicationProfile = serde_json::from_value(serde_json::json!({
            "toolUse": true,
            "planner": "react",
            "autonomyThreshold": 45
        }))
        .unwrap();
        let classifier =
            Classifier::new(ClassifierConfig::default().with_survival_threshold(0.5)).unwrap();
        let result = classifier.classify(&profile);

        assert!(result.is_unclassified());
        assert!(result.archetypes.is_empty());
        assert_eq!(
            result.dominant,
            Dominance::Archetype(ArchetypeCode::Unclassified)
        );
        assert!((result.primary_archetype.probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            result.rmf_profile.select_controls.first().map(String::as_str),
            Some("Manual archetype review")
        );
        assert!(result
            .decision_trace
            .iter()
            .any(|line| line.starts_with("no archetype reached survival threshold 0.50")));
    }

    #[test]
    fn max_archetypes_limits_reported_survivors() {
        let profile: ApplicationProfile = serde_json::from_value(serde_json::json!({
            "retrievalEnabled": true,
            "citationsEnabled": true,
            "vectorDb": "pinecone",
            "freshnessPolicy": "daily",
            "systems": ["SAP"],
            "releaseGates": true,
            "auditTrails": true
        }))
        .unwrap();
        let classifier =
            Classifier::new(ClassifierConfig::default().with_max_archetypes(1)).unwrap();
        let result = classifier.classify(&profile);

        assert_eq!(result.archetypes.len(), 1);
        assert_eq!(
            result.archetypes[0].code,
            ArchetypeCode::RagKnowledgeAssistant
        );
        // The override still picks enterprise from the top two survivors.
        assert_eq!(result.primary_code(), ArchetypeCode::EnterpriseIntegrated);
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
