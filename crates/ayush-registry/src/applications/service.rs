use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{
    ApplicationEdit, ApplicationId, ApplicationProfile, ApplicationStatus, ApplicationSubmission,
    OwnerId,
};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use super::scoring::{ApplicationScorer, ScoreResult, ScoreStatus, ScoringConfig};

/// Service composing the intake guard, repository, and application scorer.
pub struct RegistrationService<R> {
    guard: Arc<IntakeGuard>,
    repository: Arc<R>,
    scorer: Arc<ApplicationScorer>,
    sequence: AtomicU64,
}

impl<R> RegistrationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), repository, config)
    }

    pub fn with_guard(guard: IntakeGuard, repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            scorer: Arc::new(ApplicationScorer::new(config)),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn scorer(&self) -> &ApplicationScorer {
        &self.scorer
    }

    fn next_application_id(&self) -> ApplicationId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ApplicationId(format!("app-{id:06}"))
    }

    fn score_profile(&self, profile: &ApplicationProfile) -> ScoreResult {
        self.scorer.score(
            &profile.idea_explanation,
            &profile.description,
            profile.business_type,
            &profile.documents,
        )
    }

    /// Validate, score, and store a new application.
    pub fn submit(
        &self,
        owner: OwnerId,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let score = self.score_profile(&profile);
        let now = Utc::now();

        let record = ApplicationRecord {
            id: self.next_application_id(),
            owner,
            profile,
            status: status_for(score.status),
            ai_score: score.overall_score,
            score: Some(score),
            reviewer_notes: None,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            application_id = %stored.id.0,
            ai_score = stored.ai_score,
            status = stored.status.label(),
            "application submitted"
        );
        Ok(stored)
    }

    /// Apply an owner's edit and recompute the score against the stored documents.
    pub fn edit(
        &self,
        application_id: &ApplicationId,
        edit: ApplicationEdit,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let profile = self.guard.apply_edit(&record.profile, edit)?;
        let score = self.score_profile(&profile);
        let previous = record.ai_score;

        record.profile = profile;
        record.status = status_for(score.status);
        record.ai_score = score.overall_score;
        record.score = Some(score);
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(
            application_id = %record.id.0,
            previous_score = previous,
            ai_score = record.ai_score,
            status = record.status.label(),
            "application rescored after edit"
        );
        Ok(record)
    }

    /// Record a reviewer decision, overriding the automated recommendation.
    pub fn review(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
        notes: Option<String>,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        record.status = status;
        record.reviewer_notes = notes
            .map(|raw| raw.trim().to_string())
            .filter(|trimmed| !trimmed.is_empty());
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(
            application_id = %record.id.0,
            status = record.status.label(),
            "application reviewed"
        );
        Ok(record)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list_for_owner(
        &self,
        owner: &OwnerId,
    ) -> Result<Vec<ApplicationRecord>, RegistrationServiceError> {
        let records = self.repository.list_by_owner(owner)?;
        debug!(owner = %owner.0, count = records.len(), "listed owner applications");
        Ok(records)
    }

    pub fn list_all(&self) -> Result<Vec<ApplicationRecord>, RegistrationServiceError> {
        Ok(self.repository.list_all()?)
    }

    /// Remove an application from the registry.
    pub fn withdraw(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, RegistrationServiceError> {
        let removed = self.repository.remove(application_id)?;
        info!(application_id = %removed.id.0, "application withdrawn");
        Ok(removed)
    }
}

fn status_for(status: ScoreStatus) -> ApplicationStatus {
    match status {
        ScoreStatus::Approved => ApplicationStatus::Approved,
        ScoreStatus::Rejected => ApplicationStatus::Rejected,
        ScoreStatus::UnderReview => ApplicationStatus::UnderReview,
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
