use ayush_registry::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationStatus, AyushSystem,
    OwnerId, RepositoryError, ScoringProfile,
};
use ayush_registry::error::AppError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl InMemoryApplicationRepository {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<ApplicationId, ApplicationRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }

    fn sorted(records: impl Iterator<Item = ApplicationRecord>) -> Vec<ApplicationRecord> {
        let mut records: Vec<_> = records.collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(Self::sorted(
            guard
                .values()
                .filter(|record| &record.owner == owner)
                .cloned(),
        ))
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(Self::sorted(guard.values().cloned()))
    }

    fn remove(&self, id: &ApplicationId) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.lock()?;
        guard.remove(id).ok_or(RepositoryError::NotFound)
    }
}

/// Free-text input for the `score` command when read from a JSON file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreRequest {
    pub(crate) idea_explanation: String,
    #[serde(default, alias = "companyDescription")]
    pub(crate) description: String,
    #[serde(default, alias = "category")]
    pub(crate) business_type: AyushSystem,
    #[serde(default)]
    pub(crate) documents: Vec<serde_json::Value>,
}

pub(crate) fn read_score_request(path: &Path) -> Result<ScoreRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let request = serde_json::from_str(&raw)?;
    Ok(request)
}

pub(crate) fn parse_category(raw: &str) -> Result<AyushSystem, String> {
    AyushSystem::from_label(raw).ok_or_else(|| {
        format!("unknown AYUSH system '{raw}' (expected ayurveda, yoga, unani, siddha or homeopathy)")
    })
}

pub(crate) fn parse_profile(raw: &str) -> Result<ScoringProfile, String> {
    ScoringProfile::from_name(raw)
        .ok_or_else(|| format!("unknown scoring profile '{raw}' (expected density or count)"))
}

pub(crate) fn parse_decision(raw: &str) -> Result<ApplicationStatus, String> {
    ApplicationStatus::from_label(raw).ok_or_else(|| {
        format!(
            "unknown decision '{raw}' (expected draft, submitted, under_review, approved or rejected)"
        )
    })
}
