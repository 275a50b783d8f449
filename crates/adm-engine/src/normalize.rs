//! Normalization of raw scores into a probability distribution, and the
//! survival filter applied on top of it.

use adm_types::{ArchetypeCode, ArchetypeScore};

use crate::signals::ScoreSheet;

/// Probability distribution over the catalog, ranked highest first.
///
/// Ranking is stable over catalog order, so equal probabilities keep the
/// first-declared archetype ahead.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    total: u32,
    ranked: Vec<ArchetypeScore>,
}

impl Distribution {
    /// Normalize a score sheet: `probability = raw / total`, or zero
    /// everywhere when the total is zero.
    pub fn from_sheet(sheet: &ScoreSheet) -> Self {
        let total = sheet.total();
        let mut ranked: Vec<ArchetypeScore> = sheet
            .entries()
            .iter()
            .map(|entry| ArchetypeScore {
                code: entry.archetype,
                name: entry.archetype.name().to_string(),
                raw_score: entry.score,
                probability: ratio(entry.score, total),
                signals: entry
                    .contributions
                    .iter()
                    .map(|c| c.description.clone())
                    .collect(),
            })
            .collect();

        // Same denominator everywhere, so ordering by raw score is exact.
        ranked.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));

        Self { total, ranked }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// All catalog archetypes, highest probability first.
    pub fn ranked(&self) -> &[ArchetypeScore] {
        &self.ranked
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.ranked.iter().map(|s| s.probability).collect()
    }

    pub fn max_probability(&self) -> f64 {
        self.ranked.first().map(|s| s.probability).unwrap_or(0.0)
    }

    pub fn get(&self, code: ArchetypeCode) -> Option<&ArchetypeScore> {
        self.ranked.iter().find(|s| s.code == code)
    }

    /// Archetypes whose probability reaches `threshold`, ranked.
    ///
    /// The cutoff is hard: anything below it is invisible to conflict
    /// resolution and RMF generation.
    pub fn survivors(&self, threshold: f64) -> Vec<ArchetypeScore> {
        if self.total == 0 {
            return Vec::new();
        }
        self.ranked
            .iter()
            .filter(|s| s.probability >= threshold)
            .cloned()
            .collect()
    }

    /// Probability gap between two raw scores, computed in one division so
    /// that exact boundary ties compare exactly.
    pub fn gap(&self, upper: u32, lower: u32) -> f64 {
        ratio(upper.saturating_sub(lower), self.total)
    }
}

fn ratio(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(total)
    }
}
