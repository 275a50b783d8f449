//! Signal scoring: the weight table of the matrix.
//!
//! Each archetype owns an ordered list of predicates over the profile. A
//! predicate that matches adds its weight to the archetype's raw score and
//! leaves a [`SignalContribution`] behind for the decision trace. One generic
//! loop evaluates the whole table; there is no per-archetype scoring code.

use std::sync::LazyLock;

use adm_types::{
    ApplicationProfile, ApprovalLevel, ArchetypeCode, EvidenceLevel, ImpactContext,
    InteractionPattern, SignalContribution,
};
use tracing::trace;

type Predicate = fn(&ApplicationProfile) -> bool;

/// A weighted predicate contributing to one archetype.
pub struct Signal {
    /// Trace label recorded when the predicate matches
    pub label: &'static str,
    pub weight: u32,
    predicate: Predicate,
}

impl Signal {
    fn new(label: &'static str, weight: u32, predicate: Predicate) -> Self {
        Self {
            label,
            weight,
            predicate,
        }
    }

    pub fn matches(&self, profile: &ApplicationProfile) -> bool {
        (self.predicate)(profile)
    }
}

/// The ordered signal list of one archetype.
pub struct ArchetypeSignals {
    pub archetype: ArchetypeCode,
    pub signals: Vec<Signal>,
}

impl ArchetypeSignals {
    /// Largest raw score this archetype can reach.
    pub fn max_score(&self) -> u32 {
        self.signals.iter().map(|s| s.weight).sum()
    }
}

static SIGNAL_TABLE: LazyLock<Vec<ArchetypeSignals>> = LazyLock::new(build_table);

/// The signal table, one entry per catalog archetype in catalog order.
pub fn signal_table() -> &'static [ArchetypeSignals] {
    &SIGNAL_TABLE
}

fn build_table() -> Vec<ArchetypeSignals> {
    use ArchetypeCode::*;

    vec![
        ArchetypeSignals {
            archetype: AssistiveTextGeneration,
            signals: vec![
                Signal::new("interaction pattern is single_turn", 5, |p| {
                    p.is_pattern(InteractionPattern::SingleTurn)
                }),
                Signal::new("retrieval disabled", 3, |p| !p.retrieval.retrieval_enabled),
                Signal::new("structured output none or unset", 1, |p| {
                    p.structured_output.is_unstructured()
                }),
                Signal::new("no tool use", 3, |p| !p.agentic.tool_use),
            ],
        },
        ArchetypeSignals {
            archetype: ConversationalAssistant,
            signals: vec![
                Signal::new("interaction pattern is multi_turn", 5, |p| {
                    p.is_pattern(InteractionPattern::MultiTurn)
                }),
                Signal::new("persistent memory", 2, |p| p.agentic.memory),
                Signal::new("speech input", 1, |p| p.multimodal.speech_input),
                Signal::new("speech output", 1, |p| p.multimodal.speech_output),
            ],
        },
        ArchetypeSignals {
            archetype: RagKnowledgeAssistant,
            signals: vec![
                Signal::new("retrieval enabled", 4, |p| p.retrieval.retrieval_enabled),
                Signal::new("citations enabled", 2, |p| p.retrieval.citations_enabled),
                Signal::new("vector store configured", 2, |p| {
                    p.retrieval.has_vector_store()
                }),
                Signal::new("freshness policy declared", 1, |p| {
                    p.retrieval.has_freshness_policy()
                }),
                Signal::new("multi-turn grounding", 1, |p| {
                    p.retrieval.retrieval_enabled && p.is_pattern(InteractionPattern::MultiTurn)
                }),
            ],
        },
        ArchetypeSignals {
            archetype: StructuredExtraction,
            signals: vec![
                Signal::new("structured output format", 4, |p| {
                    p.structured_output.is_structured()
                }),
                Signal::new("schema validation", 2, |p| p.structured_output.schema_validation),
                Signal::new("batch interaction pattern", 2, |p| {
                    p.is_pattern(InteractionPattern::Batch)
                }),
                Signal::new("document vision input", 1, |p| p.multimodal.vision_input),
            ],
        },
        ArchetypeSignals {
            archetype: CodeAssistant,
            signals: vec![
                Signal::new("code generation", 5, |p| p.code_assist.code_generation),
                Signal::new("code execution", 2, |p| p.code_assist.code_execution),
                Signal::new("repository access", 2, |p| p.code_assist.repo_access),
            ],
        },
        ArchetypeSignals {
            archetype: AnalyticsInsight,
            signals: vec![
                Signal::new("natural-language analytics queries", 4, |p| {
                    p.analytics.analytics_queries
                }),
                Signal::new("report generation", 2, |p| p.analytics.report_generation),
                Signal::new("dashboards", 2, |p| p.analytics.dashboards),
                Signal::new("structured analytics output", 1, |p| {
                    p.analytics.analytics_queries && p.structured_output.is_structured()
                }),
            ],
        },
        ArchetypeSignals {
            archetype: MultimodalProcessor,
            signals: vec![
                Signal::new("vision input", 3, |p| p.multimodal.vision_input),
                Signal::new("image generation", 3, |p| p.multimodal.image_generation),
                Signal::new("speech input", 2, |p| p.multimodal.speech_input),
                Signal::new("speech output", 2, |p| p.multimodal.speech_output),
                Signal::new("more than one declared modality", 2, |p| p.modalities.len() > 1),
            ],
        },
        ArchetypeSignals {
            archetype: ToolUsingAgent,
            signals: vec![
                Signal::new("tool use", 5, |p| p.agentic.tool_use),
                Signal::new("planner declared", 2, |p| p.agentic.has_planner()),
                Signal::new("quota controls", 2, |p| p.agentic.quota_controls),
                Signal::new("policy engine", 1, |p| p.agentic.policy_engine),
            ],
        },
        ArchetypeSignals {
            archetype: AutonomousWorkflowAgent,
            signals: vec![
                Signal::new("autonomy threshold above 0", 4, |p| p.agentic.is_autonomous()),
                Signal::new("autonomy threshold above 70", 2, |p| p.agentic.autonomy() > 70.0),
                Signal::new("planner declared", 1, |p| p.agentic.has_planner()),
                Signal::new("few human approval steps", 2, |p| {
                    matches!(
                        p.agentic.human_approval_steps,
                        Some(ApprovalLevel::None | ApprovalLevel::Low)
                    )
                }),
                Signal::new("rollback / kill switch", 1, |p| p.agentic.rollback_killswitch),
                Signal::new("persistent memory with autonomy", 1, |p| {
                    p.agentic.memory && p.agentic.is_autonomous()
                }),
            ],
        },
        ArchetypeSignals {
            archetype: FineTunedDomainExpert,
            signals: vec![
                Signal::new("fine-tuned model", 5, |p| p.model.fine_tuned),
                Signal::new("adapters", 2, |p| p.model.adapters),
                Signal::new("custom checkpoints", 2, |p| p.model.custom_checkpoints),
                Signal::new("domain declared with fine-tuning", 1, |p| {
                    p.model.fine_tuned && p.has_domain()
                }),
            ],
        },
        ArchetypeSignals {
            archetype: EnterpriseIntegrated,
            signals: vec![
                Signal::new("enterprise systems declared", 4, |p| p.enterprise.has_systems()),
                Signal::new("single sign-on", 2, |p| p.enterprise.sso),
                Signal::new("release gates", 2, |p| p.enterprise.release_gates),
                Signal::new("audit trails", 2, |p| p.enterprise.audit_trails),
            ],
        },
        ArchetypeSignals {
            archetype: SafetyCriticalRegulated,
            signals: vec![
                Signal::new("impact context safety_critical", 4, |p| {
                    p.is_impact(ImpactContext::SafetyCritical)
                }),
                Signal::new("impact context mission_critical", 2, |p| {
                    p.is_impact(ImpactContext::MissionCritical)
                }),
                Signal::new("human-in-the-loop mandatory", 3, |p| p.regulatory.hitl_mandatory),
                Signal::new("regulator scope declared", 3, |p| {
                    p.regulatory.has_regulator_scope()
                }),
                Signal::new("evidence regulator_ready", 2, |p| {
                    p.regulatory.evidence_required == Some(EvidenceLevel::RegulatorReady)
                }),
                Signal::new("evidence audit_ready", 1, |p| {
                    p.regulatory.evidence_required == Some(EvidenceLevel::AuditReady)
                }),
            ],
        },
    ]
}

/// Raw score of one archetype with the signals behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawScore {
    pub archetype: ArchetypeCode,
    pub score: u32,
    pub contributions: Vec<SignalContribution>,
}

/// Raw scores of all catalog archetypes, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreSheet {
    entries: Vec<RawScore>,
}

impl ScoreSheet {
    pub fn entries(&self) -> &[RawScore] {
        &self.entries
    }

    /// Raw score of `code`; zero for codes outside the catalog.
    pub fn raw(&self, code: ArchetypeCode) -> u32 {
        self.entries
            .iter()
            .find(|e| e.archetype == code)
            .map(|e| e.score)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.score).sum()
    }

    /// Every fired signal, archetype by archetype in catalog order.
    pub fn contributions(&self) -> impl Iterator<Item = &SignalContribution> {
        self.entries.iter().flat_map(|e| e.contributions.iter())
    }
}

/// Evaluate the full signal table against a profile.
pub fn score_profile(profile: &ApplicationProfile) -> ScoreSheet {
    let entries = signal_table()
        .iter()
        .map(|set| {
            let mut score = 0u32;
            let mut contributions = Vec::new();
            for signal in set.signals.iter().filter(|s| s.matches(profile)) {
                trace!(
                    archetype = set.archetype.as_str(),
                    signal = signal.label,
                    weight = signal.weight,
                    "Signal matched"
                );
                score += signal.weight;
                contributions.push(SignalContribution {
                    archetype: set.archetype,
                    description: signal.label.to_string(),
                    weight: signal.weight,
                });
            }
            RawScore {
                archetype: set.archetype,
                score,
                contributions,
            }
        })
        .collect();

    ScoreSheet { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adm_types::{AgenticConfig, RetrievalConfig, StructuredOutputConfig};

    #[test]
    fn table_covers_catalog_in_order() {
        let table = signal_table();
        assert_eq!(table.len(), ArchetypeCode::ALL.len());
        for (set, code) in table.iter().zip(ArchetypeCode::ALL) {
            assert_eq!(set.archetype, code);
            assert!(!set.signals.is_empty());
            assert!(set.signals.len() <= 10);
            assert!(set.signals.iter().all(|s| s.weight > 0));
        }
    }

    #[test]
    fn empty_profile_scores_only_absence_signals() {
        let sheet = score_profile(&ApplicationProfile::default());
        assert_eq!(sheet.raw(ArchetypeCode::AssistiveTextGeneration), 7);
        assert_eq!(sheet.total(), 7);

        let labels: Vec<_> = sheet.contributions().map(|c| c.description.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "retrieval disabled",
                "structured output none or unset",
                "no tool use"
            ]
        );
    }

    #[test]
    fn single_turn_assistant_scores_twelve() {
        let profile = ApplicationProfile {
            interaction_pattern: Some(InteractionPattern::SingleTurn),
            retrieval: RetrievalConfig {
                retrieval_enabled: false,
                ..Default::default()
            },
            structured_output: StructuredOutputConfig {
                structured_output: Some(adm_types::OutputFormat::None),
                ..Default::default()
            },
            agentic: AgenticConfig {
                tool_use: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let sheet = score_profile(&profile);
        assert_eq!(sheet.raw(ArchetypeCode::AssistiveTextGeneration), 12);
        assert_eq!(sheet.total(), 12);
    }

    #[test]
    fn agent_profile_splits_between_tool_and_autonomous() {
        let profile = ApplicationProfile {
            agentic: AgenticConfig {
                tool_use: true,
                planner: Some("react".into()),
                autonomy_threshold: 45.0,
                human_approval_steps: Some(ApprovalLevel::Low),
                rollback_killswitch: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let sheet = score_profile(&profile);
        assert_eq!(sheet.raw(ArchetypeCode::ToolUsingAgent), 7);
        assert_eq!(sheet.raw(ArchetypeCode::AutonomousWorkflowAgent), 8);
        assert_eq!(sheet.raw(ArchetypeCode::AssistiveTextGeneration), 4);
    }

    #[test]
    fn mission_and_safety_impact_are_exclusive() {
        let mut profile = ApplicationProfile {
            impact_context: Some(ImpactContext::MissionCritical),
            ..Default::default()
        };
        assert_eq!(
            score_profile(&profile).raw(ArchetypeCode::SafetyCriticalRegulated),
            2
        );
        profile.impact_context = Some(ImpactContext::SafetyCritical);
        assert_eq!(
            score_profile(&profile).raw(ArchetypeCode::SafetyCriticalRegulated),
            4
        );
        profile.impact_context = Some(ImpactContext::Unrecognized);
        assert_eq!(
            score_profile(&profile).raw(ArchetypeCode::SafetyCriticalRegulated),
            0
        );
    }

    #[test]
    fn conversational_archetype_reaches_its_maximum() {
        let profile = ApplicationProfile {
            interaction_pattern: Some(InteractionPattern::MultiTurn),
            agentic: AgenticConfig {
                memory: true,
                ..Default::default()
            },
            multimodal: adm_types::MultimodalConfig {
                speech_input: true,
                speech_output: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let sheet = score_profile(&profile);
        let conversational = &signal_table()[1];
        assert_eq!(
            sheet.raw(ArchetypeCode::ConversationalAssistant),
            conversational.max_score()
        );
    }

    #[test]
    fn unclassified_has_no_raw_score() {
        let sheet = score_profile(&ApplicationProfile::default());
        assert_eq!(sheet.raw(ArchetypeCode::Unclassified), 0);
    }
}
