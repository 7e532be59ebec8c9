use std::collections::BTreeMap;

use super::config::ScoringProfile;
use super::lexicon::{count_keywords, density_keywords, POSITIVE_INDICATORS};
use super::matcher::{Corpus, Morphology, Phrase};
use super::sentiment::SentimentLexicon;
use super::Criterion;

const MAX_CRITERION_SCORE: f64 = 100.0;

/// How keyword matches turn into a raw criterion score.
#[derive(Debug, Clone, Copy)]
enum MatchIntensity {
    /// `matches / max(1, length / per_chars) * multiplier`
    Density { per_chars: f64, multiplier: f64 },
    /// `matches * points_per_match`
    Count { points_per_match: f64 },
}

#[derive(Debug, Clone)]
enum ToneAdjustment {
    Sentiment(SentimentLexicon),
    PositiveIndicators {
        terms: &'static [&'static str],
        bonus: f64,
    },
}

#[derive(Debug, Clone)]
struct CriterionRules {
    criterion: Criterion,
    keywords: Vec<Phrase>,
}

/// Compiled tables and formulas for one scoring profile.
#[derive(Debug, Clone)]
pub(crate) struct ProfileRules {
    criteria: Vec<CriterionRules>,
    morphology: Morphology,
    intensity: MatchIntensity,
    /// Bonuses applied in order for each length threshold the corpus exceeds.
    length_tiers: &'static [(usize, f64)],
    tone: ToneAdjustment,
}

impl ProfileRules {
    pub(crate) fn compile(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::KeywordDensity => Self {
                criteria: compile_criteria(density_keywords),
                morphology: Morphology::COMMON_INFLECTIONS_WITH_ES,
                intensity: MatchIntensity::Density {
                    per_chars: 100.0,
                    multiplier: 200.0,
                },
                length_tiers: &[(300, 5.0), (600, 10.0), (1000, 15.0)],
                tone: ToneAdjustment::Sentiment(SentimentLexicon::default()),
            },
            ScoringProfile::KeywordCount => Self {
                criteria: compile_criteria(count_keywords),
                morphology: Morphology::EXACT,
                intensity: MatchIntensity::Count {
                    points_per_match: 10.0,
                },
                length_tiers: &[(300, 10.0), (600, 10.0)],
                tone: ToneAdjustment::PositiveIndicators {
                    terms: POSITIVE_INDICATORS,
                    bonus: 10.0,
                },
            },
        }
    }

    /// Keyword matches per criterion, before any scoring formula.
    pub(crate) fn keyword_matches(&self, corpus: &Corpus) -> BTreeMap<Criterion, usize> {
        self.criteria
            .iter()
            .map(|rules| (rules.criterion, self.count_matches(rules, corpus)))
            .collect()
    }

    pub(crate) fn score_criteria(&self, corpus: &Corpus) -> BTreeMap<Criterion, f64> {
        let tone = self.tone_adjustment(corpus);

        self.criteria
            .iter()
            .map(|rules| {
                let matches = self.count_matches(rules, corpus);
                let mut raw = self.intensity_score(matches, corpus.length());

                for (threshold, bonus) in self.length_tiers {
                    if corpus.length() > *threshold {
                        raw += bonus;
                    }
                }
                raw += tone;

                (rules.criterion, raw.clamp(0.0, MAX_CRITERION_SCORE))
            })
            .collect()
    }

    fn count_matches(&self, rules: &CriterionRules, corpus: &Corpus) -> usize {
        rules
            .keywords
            .iter()
            .map(|keyword| keyword.count_in(corpus, self.morphology))
            .sum()
    }

    fn intensity_score(&self, matches: usize, length: usize) -> f64 {
        let matches = matches as f64;
        let raw = match self.intensity {
            MatchIntensity::Density {
                per_chars,
                multiplier,
            } => {
                let density = matches / (length as f64 / per_chars).max(1.0);
                density * multiplier
            }
            MatchIntensity::Count { points_per_match } => matches * points_per_match,
        };
        raw.min(MAX_CRITERION_SCORE)
    }

    fn tone_adjustment(&self, corpus: &Corpus) -> f64 {
        match &self.tone {
            ToneAdjustment::Sentiment(lexicon) => lexicon.adjustment(corpus),
            ToneAdjustment::PositiveIndicators { terms, bonus } => {
                if terms.iter().any(|term| corpus.contains(term)) {
                    *bonus
                } else {
                    0.0
                }
            }
        }
    }
}

fn compile_criteria(table: fn(Criterion) -> &'static [&'static str]) -> Vec<CriterionRules> {
    Criterion::ALL
        .iter()
        .map(|criterion| CriterionRules {
            criterion: *criterion,
            keywords: table(*criterion).iter().map(|raw| Phrase::parse(raw)).collect(),
        })
        .collect()
}
