use serde::{Deserialize, Serialize};

/// Routing recommendation attached to a scored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Approved,
    Rejected,
    UnderReview,
}

impl ScoreStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreStatus::Approved => "approved",
            ScoreStatus::Rejected => "rejected",
            ScoreStatus::UnderReview => "under_review",
        }
    }
}

/// Thresholds mapping an overall score onto a status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Approve at or above `approve_at`, reject everything else.
    Cutoff { approve_at: f64 },
    /// Approve at or above `approve_at`, reject below `reject_below`, review the band between.
    Banded { approve_at: f64, reject_below: f64 },
}

impl StatusPolicy {
    pub fn decide(&self, overall: f64) -> ScoreStatus {
        match *self {
            StatusPolicy::Cutoff { approve_at } => {
                if overall >= approve_at {
                    ScoreStatus::Approved
                } else {
                    ScoreStatus::Rejected
                }
            }
            StatusPolicy::Banded {
                approve_at,
                reject_below,
            } => {
                if overall >= approve_at {
                    ScoreStatus::Approved
                } else if overall < reject_below {
                    ScoreStatus::Rejected
                } else {
                    ScoreStatus::UnderReview
                }
            }
        }
    }

    pub fn summary(&self) -> String {
        match self {
            StatusPolicy::Cutoff { approve_at } => {
                format!("approve at {approve_at}, otherwise reject")
            }
            StatusPolicy::Banded {
                approve_at,
                reject_below,
            } => format!(
                "approve at {approve_at}, reject below {reject_below}, otherwise review"
            ),
        }
    }
}

/// Which form of the overall score the status policy sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBasis {
    Rounded,
    Unrounded,
}

pub(crate) fn decide_status(
    policy: &StatusPolicy,
    basis: StatusBasis,
    unrounded: f64,
    rounded: u8,
) -> ScoreStatus {
    match basis {
        StatusBasis::Rounded => policy.decide(f64::from(rounded)),
        StatusBasis::Unrounded => policy.decide(unrounded),
    }
}
