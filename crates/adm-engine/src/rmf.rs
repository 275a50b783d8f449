//! RMF profile generation.
//!
//! Every catalog archetype contributes a fixed row of controls, assessment
//! packs, authorization thresholds, and monitoring signals. Modifiers add
//! overlay rows on top. Rows are accumulated in order and each list is then
//! deduplicated keeping the first occurrence.

use std::collections::HashSet;

use adm_types::{ArchetypeCode, Modifier, RiskTier, RmfProfile};

/// One row of the RMF contribution table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RmfContribution {
    pub controls: &'static [&'static str],
    pub assess_packs: &'static [&'static str],
    pub thresholds: &'static [&'static str],
    pub monitoring: &'static [&'static str],
}

/// Contribution row of an archetype. The unclassified fallback gets a
/// manual-review row.
pub fn contribution(code: ArchetypeCode) -> &'static RmfContribution {
    match code {
        ArchetypeCode::AssistiveTextGeneration => &RmfContribution {
            controls: &[
                "Output content filtering",
                "Prompt injection hardening",
                "AI-generated content disclosure",
            ],
            assess_packs: &["TP-TOX-01 Toxicity & bias", "TP-HAL-01 Hallucination baseline"],
            thresholds: &["toxicity_rate <= 0.5%", "hallucination_rate <= 5%"],
            monitoring: &["Output toxicity rate", "User feedback flags"],
        },
        ArchetypeCode::ConversationalAssistant => &RmfContribution {
            controls: &[
                "Output content filtering",
                "Session isolation",
                "Conversation memory retention limits",
                "Escalation to human agent",
            ],
            assess_packs: &["TP-TOX-01 Toxicity & bias", "TP-JBK-01 Multi-turn jailbreak"],
            thresholds: &["jailbreak_success_rate <= 1%", "escalation_latency_p95 <= 60s"],
            monitoring: &["Conversation drift", "Escalation rate"],
        },
        ArchetypeCode::RagKnowledgeAssistant => &RmfContribution {
            controls: &[
                "Source access control on retrieval",
                "Citation enforcement",
                "Index freshness management",
                "Retrieved-content injection filtering",
            ],
            assess_packs: &["TP-GRD-01 Groundedness", "TP-RET-01 Retrieval precision"],
            thresholds: &[
                "groundedness_score >= 0.85",
                "citation_coverage >= 90%",
                "retrieval_precision_at_5 >= 0.7",
            ],
            monitoring: &["Groundedness score", "Index staleness"],
        },
        ArchetypeCode::StructuredExtraction => &RmfContribution {
            controls: &[
                "Output schema validation",
                "Field-level confidence routing",
                "Human review of low-confidence records",
            ],
            assess_packs: &["TP-EXT-01 Field accuracy", "TP-SCH-01 Schema conformance"],
            thresholds: &["field_accuracy >= 95%", "schema_violation_rate <= 0.1%"],
            monitoring: &["Schema violation rate", "Extraction accuracy sampling"],
        },
        ArchetypeCode::CodeAssistant => &RmfContribution {
            controls: &[
                "Sandboxed code execution",
                "Secret scanning on generated code",
                "License compliance checks",
                "Least-privilege repository access",
            ],
            assess_packs: &["TP-SEC-01 Insecure code generation", "TP-SBX-01 Sandbox escape"],
            thresholds: &["critical_vuln_rate <= 0.5%", "sandbox_escape_count == 0"],
            monitoring: &["Generated-code vulnerability findings", "Sandbox violations"],
        },
        ArchetypeCode::AnalyticsInsight => &RmfContribution {
            controls: &[
                "Row- and column-level data access control",
                "Query result verification",
                "Metric definition governance",
            ],
            assess_packs: &["TP-SQL-01 Query correctness", "TP-NUM-01 Numerical faithfulness"],
            thresholds: &["query_correctness >= 90%", "numeric_error_rate <= 2%"],
            monitoring: &["Query error rate", "Data access anomalies"],
        },
        ArchetypeCode::MultimodalProcessor => &RmfContribution {
            controls: &[
                "Media content moderation",
                "Synthetic media watermarking",
                "Biometric data handling policy",
            ],
            assess_packs: &["TP-MMD-01 Cross-modal safety", "TP-OCR-01 Perception accuracy"],
            thresholds: &["unsafe_media_rate <= 0.1%", "perception_accuracy >= 90%"],
            monitoring: &["Moderation hit rate", "Media provenance failures"],
        },
        ArchetypeCode::ToolUsingAgent => &RmfContribution {
            controls: &[
                "Tool allow-listing",
                "Scoped tool credentials",
                "Rate and spend quotas",
                "Tool call audit logging",
            ],
            assess_packs: &["TP-AGT-01 Tool misuse", "TP-INJ-02 Indirect prompt injection"],
            thresholds: &["unauthorized_tool_call_rate == 0", "tool_error_rate <= 2%"],
            monitoring: &["Tool call anomalies", "Quota consumption"],
        },
        ArchetypeCode::AutonomousWorkflowAgent => &RmfContribution {
            controls: &[
                "Human approval gates for high-impact actions",
                "Kill switch and rollback",
                "Bounded autonomy policy",
                "Action plan logging",
                "Tool allow-listing",
            ],
            assess_packs: &["TP-AUT-01 Goal misalignment", "TP-AGT-02 Long-horizon failure"],
            thresholds: &[
                "unapproved_high_impact_actions == 0",
                "rollback_time <= 5m",
                "task_success_rate >= 90%",
            ],
            monitoring: &["Autonomous action rate", "Kill switch activations"],
        },
        ArchetypeCode::FineTunedDomainExpert => &RmfContribution {
            controls: &[
                "Training data provenance",
                "Model versioning and lineage",
                "Regression testing against base model",
            ],
            assess_packs: &["TP-DOM-01 Domain accuracy", "TP-MEM-01 Training data leakage"],
            thresholds: &["domain_accuracy >= base_model", "memorization_rate <= 0.01%"],
            monitoring: &["Model drift", "Domain accuracy sampling"],
        },
        ArchetypeCode::EnterpriseIntegrated => &RmfContribution {
            controls: &[
                "Single sign-on and role-based access",
                "Change management release gates",
                "Audit trail retention",
                "Integration least privilege",
            ],
            assess_packs: &["TP-INT-01 Integration security", "TP-ACC-01 Access control"],
            thresholds: &["privilege_escalation_findings == 0", "audit_log_completeness == 100%"],
            monitoring: &["Integration error rate", "Access anomalies"],
        },
        ArchetypeCode::SafetyCriticalRegulated => &RmfContribution {
            controls: &[
                "Mandatory human-in-the-loop review",
                "Regulatory evidence package",
                "Incident response plan",
                "Independent validation",
                "Decision explainability records",
            ],
            assess_packs: &["TP-REG-01 Regulatory conformance", "TP-SAF-01 Safety case"],
            thresholds: &[
                "critical_error_rate <= 0.01%",
                "human_review_coverage == 100%",
                "evidence_completeness == 100%",
            ],
            monitoring: &["Safety incidents", "Regulatory reporting deadlines"],
        },
        ArchetypeCode::Unclassified => &RmfContribution {
            controls: &["Manual archetype review", "Output content filtering"],
            assess_packs: &["TP-TOX-01 Toxicity & bias", "TP-HAL-01 Hallucination baseline"],
            thresholds: &["manual_review_complete == true"],
            monitoring: &["User feedback flags"],
        },
    }
}

/// Overlay row added when a modifier is present.
pub fn modifier_overlay(modifier: &Modifier) -> Option<&'static RmfContribution> {
    let overlay: &'static RmfContribution = match modifier {
        Modifier::Data(tag) if tag == "PII" => &RmfContribution {
            controls: &["PII minimization and redaction"],
            assess_packs: &["TP-PRV-01 Privacy leakage"],
            thresholds: &["pii_leak_rate == 0"],
            monitoring: &["PII detections in outputs"],
        },
        Modifier::Data(tag) if tag == "PHI" => &RmfContribution {
            controls: &["PHI safeguards and access logging"],
            assess_packs: &["TP-PRV-01 Privacy leakage"],
            thresholds: &["phi_leak_rate == 0"],
            monitoring: &["PHI access audit"],
        },
        Modifier::Data(tag) if tag == "FINANCIAL" => &RmfContribution {
            controls: &["Financial data segregation"],
            assess_packs: &["TP-PRV-01 Privacy leakage"],
            thresholds: &["financial_data_exposure == 0"],
            monitoring: &["Financial data access audit"],
        },
        Modifier::Autonomous => &RmfContribution {
            controls: &["Kill switch and rollback"],
            assess_packs: &[],
            thresholds: &["autonomy_threshold within approved bound"],
            monitoring: &["Autonomous action rate"],
        },
        Modifier::Agentic => &RmfContribution {
            controls: &["Tool allow-listing"],
            assess_packs: &["TP-INJ-02 Indirect prompt injection"],
            thresholds: &[],
            monitoring: &["Tool call anomalies"],
        },
        Modifier::Regulated => &RmfContribution {
            controls: &["Regulatory evidence package"],
            assess_packs: &["TP-REG-01 Regulatory conformance"],
            thresholds: &[],
            monitoring: &["Regulatory reporting deadlines"],
        },
        Modifier::Multimodal => &RmfContribution {
            controls: &["Media content moderation"],
            assess_packs: &[],
            thresholds: &[],
            monitoring: &["Moderation hit rate"],
        },
        Modifier::Rag => &RmfContribution {
            controls: &["Source access control on retrieval"],
            assess_packs: &["TP-GRD-01 Groundedness"],
            thresholds: &[],
            monitoring: &["Index staleness"],
        },
        _ => return None,
    };
    Some(overlay)
}

/// Insertion-ordered string set.
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<&'static str>,
    items: Vec<String>,
}

impl OrderedSet {
    fn extend(&mut self, values: &[&'static str]) {
        for value in values {
            if self.seen.insert(*value) {
                self.items.push((*value).to_string());
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Build the RMF profile for the resolved archetypes, risk tier, and
/// modifiers. `archetypes` should list the resolved primary first.
pub fn generate_rmf(
    archetypes: &[ArchetypeCode],
    tier: RiskTier,
    modifiers: &[Modifier],
) -> RmfProfile {
    let mut controls = OrderedSet::default();
    let mut assess_packs = OrderedSet::default();
    let mut thresholds = OrderedSet::default();
    let mut monitoring = OrderedSet::default();

    let rows = archetypes
        .iter()
        .map(|code| contribution(*code))
        .chain(modifiers.iter().filter_map(modifier_overlay));

    for row in rows {
        controls.extend(row.controls);
        assess_packs.extend(row.assess_packs);
        thresholds.extend(row.thresholds);
        monitoring.extend(row.monitoring);
    }

    RmfProfile {
        categorize: tier,
        select_controls: controls.into_vec(),
        assess_packs: assess_packs.into_vec(),
        authorize_thresholds: thresholds.into_vec(),
        monitoring: monitoring.into_vec(),
    }
}
