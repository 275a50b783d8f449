use adm_types::{ApplicationProfile, ArchetypeCode, Modifier};

use crate::signals::ScoreSheet;

/// Detect cross-cutting capability tags from the raw profile.
///
/// Only the `ENT` tag looks at scoring output: it needs the
/// enterprise-integrated raw score to reach `enterprise_min_score`. The output
/// is not deduplicated; a data class declared twice yields two tags.
pub fn detect_modifiers(
    profile: &ApplicationProfile,
    sheet: &ScoreSheet,
    enterprise_min_score: u32,
) -> Vec<Modifier> {
    let mut modifiers = Vec::new();

    if profile.retrieval.retrieval_enabled {
        modifiers.push(Modifier::Rag);
    }
    if profile.model.fine_tuned {
        modifiers.push(Modifier::FineTuned);
    }
    if profile.multimodal.any() {
        modifiers.push(Modifier::Multimodal);
    }
    if profile.agentic.tool_use || profile.agentic.has_planner() {
        modifiers.push(Modifier::Agentic);
    }
    if profile.agentic.is_autonomous() {
        modifiers.push(Modifier::Autonomous);
    }

    modifiers.extend(
        profile
            .data_sensitivity
            .iter()
            .filter_map(|class| class.tag())
            .map(Modifier::Data),
    );

    if sheet.raw(ArchetypeCode::EnterpriseIntegrated) >= enterprise_min_score {
        modifiers.push(Modifier::Enterprise);
    }
    if profile.regulatory.has_regulator_scope() || profile.regulatory.hitl_mandatory {
        modifiers.push(Modifier::Regulated);
    }

    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::score_profile;
    use adm_types::{DataClass, EnterpriseConfig, RegulatoryConfig};

    fn detect(profile: &ApplicationProfile) -> Vec<String> {
        detect_modifiers(profile, &score_profile(profile), 6)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_profile_has_no_modifiers() {
        assert!(detect(&ApplicationProfile::default()).is_empty());
    }

    #[test]
    fn tags_follow_declaration_order() {
        let profile: ApplicationProfile = serde_json::from_value(serde_json::json!({
            "retrievalEnabled": true,
            "fineTuned": true,
            "speechOutput": true,
            "planner": "react",
            "autonomyThreshold": 10,
            "dataSensitivity": ["pii", "phi"],
            "systems": ["SAP"],
            "sso": true,
            "hitlMandatory": true
        }))
        .unwrap();
        assert_eq!(
            detect(&profile),
            vec!["RAG", "FT", "MM", "AG", "AUTO", "PII", "PHI", "ENT", "REG"]
        );
    }

    #[test]
    fn duplicate_data_classes_are_kept() {
        let profile = ApplicationProfile {
            data_sensitivity: vec![DataClass::Pii, DataClass::None, DataClass::Pii],
            ..Default::default()
        };
        assert_eq!(detect(&profile), vec!["PII", "PII"]);
    }

    #[test]
    fn blank_and_capability_named_classes() {
        let profile: ApplicationProfile = serde_json::from_value(serde_json::json!({
            "dataSensitivity": ["", "ent", "reg"]
        }))
        .unwrap();
        let modifiers = detect_modifiers(&profile, &score_profile(&profile), 6);
        assert_eq!(
            modifiers,
            vec![
                Modifier::Data("DATA_ENT".into()),
                Modifier::Data("DATA_REG".into())
            ]
        );
    }

    #[test]
    fn enterprise_tag_needs_score_threshold() {
        let weak = ApplicationProfile {
            enterprise: EnterpriseConfig {
                systems: vec!["SAP".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(detect(&weak).is_empty());

        let strong = ApplicationProfile {
            enterprise: EnterpriseConfig {
                systems: vec!["SAP".into()],
                release_gates: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(detect(&strong), vec!["ENT"]);
    }

    #[test]
    fn regulator_scope_alone_marks_regulated() {
        let profile = ApplicationProfile {
            regulatory: RegulatoryConfig {
                regulator_scope: vec!["EU AI Act".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(detect(&profile), vec!["REG"]);
    }
}
