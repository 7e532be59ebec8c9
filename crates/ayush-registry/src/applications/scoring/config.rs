use serde::{Deserialize, Serialize};

use super::policy::{StatusBasis, StatusPolicy};

/// Named scoring revisions. Each carries its own keyword tables and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringProfile {
    /// Keyword density with inflections, cumulative length tiers and sentiment.
    #[default]
    KeywordDensity,
    /// Flat points per exact keyword with a single positive-tone bonus.
    KeywordCount,
}

impl ScoringProfile {
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "density" | "keyword_density" | "keyword-density" => Some(Self::KeywordDensity),
            "count" | "keyword_count" | "keyword-count" => Some(Self::KeywordCount),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScoringProfile::KeywordDensity => "keyword_density",
            ScoringProfile::KeywordCount => "keyword_count",
        }
    }
}

/// Bonus for uploaded supporting documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentBonus {
    pub points_per_document: f64,
    pub cap: f64,
}

impl DocumentBonus {
    pub fn for_count(&self, documents: usize) -> f64 {
        (documents as f64 * self.points_per_document).min(self.cap)
    }
}

/// Scoring configuration: profile plus the dials that vary between revisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub profile: ScoringProfile,
    pub document_bonus: DocumentBonus,
    pub status_policy: StatusPolicy,
    pub status_basis: StatusBasis,
}

impl ScoringConfig {
    pub fn for_profile(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::KeywordDensity => Self {
                profile,
                document_bonus: DocumentBonus {
                    points_per_document: 3.0,
                    cap: 15.0,
                },
                status_policy: StatusPolicy::Cutoff { approve_at: 45.0 },
                status_basis: StatusBasis::Rounded,
            },
            ScoringProfile::KeywordCount => Self {
                profile,
                document_bonus: DocumentBonus {
                    points_per_document: 5.0,
                    cap: 20.0,
                },
                status_policy: StatusPolicy::Banded {
                    approve_at: 70.0,
                    reject_below: 40.0,
                },
                status_basis: StatusBasis::Unrounded,
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::for_profile(ScoringProfile::default())
    }
}

impl From<ScoringProfile> for ScoringConfig {
    fn from(profile: ScoringProfile) -> Self {
        Self::for_profile(profile)
    }
}
