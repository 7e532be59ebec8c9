use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::applications::domain::{
    ApplicationId, ApplicationSubmission, AyushSystem, DocumentDescriptor, DocumentKind,
    FounderContact, OwnerId,
};
use crate::applications::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError,
};
use crate::applications::scoring::{ApplicationScorer, ScoringConfig, ScoringProfile};
use crate::applications::service::RegistrationService;

/// Text padded with full stops so the scoring corpus is exactly `corpus_len` characters long.
pub(super) fn padded_description(idea: &str, corpus_len: usize) -> String {
    let used = idea.len() + 1;
    ".".repeat(corpus_len.saturating_sub(used))
}

pub(super) fn density_scorer() -> ApplicationScorer {
    ApplicationScorer::new(ScoringConfig::for_profile(ScoringProfile::KeywordDensity))
}

pub(super) fn count_scorer() -> ApplicationScorer {
    ApplicationScorer::new(ScoringConfig::for_profile(ScoringProfile::KeywordCount))
}

pub(super) fn documents(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("doc-{index}.pdf")).collect()
}

pub(super) fn owner() -> OwnerId {
    OwnerId("user-42".to_string())
}

pub(super) fn document(kind: DocumentKind, name: &str) -> DocumentDescriptor {
    DocumentDescriptor {
        name: name.to_string(),
        kind,
        url: format!("https://files.example.org/ayush/{name}"),
    }
}

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        company_name: "Vaidya Botanicals".to_string(),
        registration_number: Some("U24230KA2023PTC123456".to_string()),
        founding_date: chrono::NaiveDate::from_ymd_opt(2023, 4, 14),
        business_type: AyushSystem::Ayurveda,
        address: Some("12 Residency Road, Bengaluru".to_string()),
        website: Some("https://vaidya.example.org".to_string()),
        description: "An ayurveda wellness company with a qualified team and certification \
                      under national quality guidelines."
            .to_string(),
        founder: FounderContact {
            name: "Asha Rao".to_string(),
            email: "asha@vaidya.example.org".to_string(),
            phone: "+91 98450 00000".to_string(),
        },
        idea_explanation: "A novel herbal formulation with a unique delivery format for the \
                           growing wellness market."
            .to_string(),
        documents: vec![
            document(DocumentKind::BusinessPlan, "business-plan.pdf"),
            document(DocumentKind::CertificateOfIncorporation, "incorporation.pdf"),
            document(DocumentKind::PanCard, "pan.pdf"),
        ],
    }
}

pub(super) fn service() -> (Arc<MemoryRepository>, RegistrationService<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = RegistrationService::new(repository.clone(), ScoringConfig::default());
    (repository, service)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }
}

impl ApplicationRepository for MemoryRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        match guard.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records: Vec<_> = guard
            .values()
            .filter(|record| &record.owner == owner)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    fn remove(&self, id: &ApplicationId) -> Result<ApplicationRecord, RepositoryError> {
        self.records
            .lock()
            .expect("lock")
            .remove(id)
            .ok_or(RepositoryError::NotFound)
    }
}
