//! Dominance labelling and pairwise conflict resolution.
//!
//! Override rules look only at the two highest-ranked survivors. A third
//! archetype that would also trigger a rule is ignored.

use adm_types::{ApplicationProfile, ArchetypeCode, ArchetypeScore, Dominance};
use tracing::debug;

use crate::normalize::Distribution;

/// Label the top survivor dominant when it leads the runner-up by at least
/// `gap`, otherwise `composite`. A missing runner-up counts as zero.
pub fn dominance(survivors: &[ArchetypeScore], distribution: &Distribution, gap: f64) -> Dominance {
    let Some(top) = survivors.first() else {
        return Dominance::Archetype(ArchetypeCode::Unclassified);
    };
    let runner_up = survivors.get(1).map(|s| s.raw_score).unwrap_or(0);

    if distribution.gap(top.raw_score, runner_up) >= gap {
        Dominance::Archetype(top.code)
    } else {
        Dominance::Composite
    }
}

/// A pairwise override: when both archetypes occupy the top two places,
/// `resolve` picks the primary.
pub struct ConflictRule {
    pub name: &'static str,
    pub pair: (ArchetypeCode, ArchetypeCode),
    resolve: fn(&ApplicationProfile) -> ArchetypeCode,
}

impl ConflictRule {
    /// Whether both members of the pair are among `top_two`.
    pub fn applies(&self, top_two: &[ArchetypeCode]) -> bool {
        top_two.contains(&self.pair.0) && top_two.contains(&self.pair.1)
    }

    pub fn resolve(&self, profile: &ApplicationProfile) -> ArchetypeCode {
        (self.resolve)(profile)
    }
}

/// Override rules in priority order; the first applicable rule wins.
pub static CONFLICT_RULES: [ConflictRule; 3] = [
    ConflictRule {
        name: "rag-within-enterprise",
        pair: (
            ArchetypeCode::RagKnowledgeAssistant,
            ArchetypeCode::EnterpriseIntegrated,
        ),
        resolve: prefer_enterprise,
    },
    ConflictRule {
        name: "agent-autonomy",
        pair: (
            ArchetypeCode::ToolUsingAgent,
            ArchetypeCode::AutonomousWorkflowAgent,
        ),
        resolve: agent_by_autonomy,
    },
    ConflictRule {
        name: "regulated-expert",
        pair: (
            ArchetypeCode::FineTunedDomainExpert,
            ArchetypeCode::SafetyCriticalRegulated,
        ),
        resolve: prefer_regulated,
    },
];

fn prefer_enterprise(_: &ApplicationProfile) -> ArchetypeCode {
    ArchetypeCode::EnterpriseIntegrated
}

fn agent_by_autonomy(profile: &ApplicationProfile) -> ArchetypeCode {
    if profile.agentic.is_autonomous() {
        ArchetypeCode::AutonomousWorkflowAgent
    } else {
        ArchetypeCode::ToolUsingAgent
    }
}

fn prefer_regulated(_: &ApplicationProfile) -> ArchetypeCode {
    ArchetypeCode::SafetyCriticalRegulated
}

/// Outcome of conflict resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub primary: ArchetypeCode,
    /// Name of the rule that overrode the ranking, if any
    pub rule: Option<&'static str>,
}

/// Resolve the primary archetype from the ranked survivors.
///
/// With no survivors the primary is [`ArchetypeCode::Unclassified`].
pub fn resolve_primary(
    survivors: &[ArchetypeScore],
    profile: &ApplicationProfile,
    rules: &[ConflictRule],
) -> Resolution {
    let Some(top) = survivors.first() else {
        return Resolution {
            primary: ArchetypeCode::Unclassified,
            rule: None,
        };
    };

    let top_two: Vec<ArchetypeCode> = survivors.iter().take(2).map(|s| s.code).collect();
    match rules.iter().find(|rule| rule.applies(&top_two)) {
        Some(rule) => {
            let primary = rule.resolve(profile);
            debug!(
                rule = rule.name,
                ranked_top = top.code.as_str(),
                primary = primary.as_str(),
                "Conflict rule applied"
            );
            Resolution {
                primary,
                rule: Some(rule.name),
            }
        }
        None => Resolution {
            primary: top.code,
            rule: None,
        },
    }
}
