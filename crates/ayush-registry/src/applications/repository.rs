use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationProfile, ApplicationStatus, OwnerId};
use super::scoring::ScoreResult;

/// Repository record containing the profile, score, and review metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub owner: OwnerId,
    pub profile: ApplicationProfile,
    pub status: ApplicationStatus,
    pub ai_score: u8,
    pub score: Option<ScoreResult>,
    pub reviewer_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn decision_rationale(&self) -> String {
        if let Some(notes) = &self.reviewer_notes {
            return format!("reviewer: {notes}");
        }
        match &self.score {
            Some(score) => format!(
                "automated score {} recommends {}",
                score.overall_score,
                score.status.label()
            ),
            None => "pending scoring".to_string(),
        }
    }

    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id.clone(),
            company_name: self.profile.company_name.clone(),
            business_type: self.profile.business_type.label(),
            status: self.status.label(),
            decision_rationale: self.decision_rationale(),
            ai_score: self.ai_score,
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so the service can run against any backing store.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
    fn remove(&self, id: &ApplicationId) -> Result<ApplicationRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Summary of an application for dashboards and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub company_name: String,
    pub business_type: &'static str,
    pub status: &'static str,
    pub decision_rationale: String,
    pub ai_score: u8,
    pub updated_at: DateTime<Utc>,
}
