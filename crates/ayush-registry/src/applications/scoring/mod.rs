mod config;
mod lexicon;
mod matcher;
mod policy;
mod rules;
mod sentiment;

pub use config::{DocumentBonus, ScoringConfig, ScoringProfile};
pub use matcher::{Corpus, Morphology, Phrase};
pub use policy::{ScoreStatus, StatusBasis, StatusPolicy};

use std::collections::BTreeMap;

use super::domain::AyushSystem;
use policy::decide_status;
use rules::ProfileRules;
use serde::{Deserialize, Serialize};

/// Weighted dimensions an application is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Innovation,
    MarketViability,
    Compliance,
    TeamStrength,
    Relevance,
}

impl Criterion {
    /// Criteria in the order their weighted scores are summed.
    pub const ALL: [Criterion; 5] = [
        Criterion::Innovation,
        Criterion::MarketViability,
        Criterion::Compliance,
        Criterion::TeamStrength,
        Criterion::Relevance,
    ];

    pub const fn weight(self) -> f64 {
        match self {
            Criterion::Innovation => 0.25,
            Criterion::MarketViability => 0.25,
            Criterion::Compliance => 0.25,
            Criterion::TeamStrength => 0.15,
            Criterion::Relevance => 0.10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::Innovation => "innovation",
            Criterion::MarketViability => "marketViability",
            Criterion::Compliance => "compliance",
            Criterion::TeamStrength => "teamStrength",
            Criterion::Relevance => "relevance",
        }
    }
}

/// Scorer output: the rounded overall score, the per-criterion breakdown and a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: u8,
    pub criteria_scores: BTreeMap<Criterion, f64>,
    pub status: ScoreStatus,
}

impl ScoreResult {
    pub fn criterion(&self, criterion: Criterion) -> f64 {
        self.criteria_scores
            .get(&criterion)
            .copied()
            .unwrap_or_default()
    }
}

/// Stateless scorer for application narratives. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct ApplicationScorer {
    config: ScoringConfig,
    rules: ProfileRules,
}

impl ApplicationScorer {
    pub fn new(config: ScoringConfig) -> Self {
        let rules = ProfileRules::compile(config.profile);
        Self { config, rules }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score the idea explanation and company description of an application.
    ///
    /// `category` does not influence the result yet; only the number of `documents` counts.
    pub fn score<D>(
        &self,
        idea_explanation: &str,
        company_description: &str,
        _category: AyushSystem,
        documents: &[D],
    ) -> ScoreResult {
        let corpus = Corpus::from_narrative(idea_explanation, company_description);
        self.score_corpus(&corpus, documents.len())
    }

    pub fn score_corpus(&self, corpus: &Corpus, document_count: usize) -> ScoreResult {
        let criteria_scores = self.rules.score_criteria(corpus);

        let mut weighted = 0.0;
        for criterion in Criterion::ALL {
            let score = criteria_scores.get(&criterion).copied().unwrap_or_default();
            weighted += score * criterion.weight();
        }

        let document_bonus = self.config.document_bonus.for_count(document_count);
        let overall = (weighted + document_bonus).min(100.0);
        let overall_score = overall.round().clamp(0.0, 100.0) as u8;

        let status = decide_status(
            &self.config.status_policy,
            self.config.status_basis,
            overall,
            overall_score,
        );

        ScoreResult {
            overall_score,
            criteria_scores,
            status,
        }
    }

    /// Raw keyword hits per criterion, useful when explaining a score to a reviewer.
    pub fn keyword_matches(
        &self,
        idea_explanation: &str,
        company_description: &str,
    ) -> BTreeMap<Criterion, usize> {
        let corpus = Corpus::from_narrative(idea_explanation, company_description);
        self.rules.keyword_matches(&corpus)
    }
}

impl Default for ApplicationScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl From<ScoringProfile> for ApplicationScorer {
    fn from(profile: ScoringProfile) -> Self {
        Self::new(ScoringConfig::for_profile(profile))
    }
}

/// Score with the default keyword-density profile.
pub fn score_application<D>(
    idea_explanation: &str,
    company_description: &str,
    category: AyushSystem,
    documents: &[D],
) -> ScoreResult {
    ApplicationScorer::default().score(idea_explanation, company_description, category, documents)
}
