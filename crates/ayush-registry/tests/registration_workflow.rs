//! Integration specifications for the registration workflow.
//!
//! Scenarios run submissions, edits, and reviewer decisions through `RegistrationService` backed by
//! a test repository, using only the crate's public API.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use ayush_registry::applications::{
        ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationSubmission,
        AyushSystem, DocumentDescriptor, DocumentKind, FounderContact, OwnerId,
        RegistrationService, RepositoryError, ScoringConfig, ScoringProfile,
    };

    pub(super) fn founder() -> FounderContact {
        FounderContact {
            name: "Meera Iyer".to_string(),
            email: "meera@prana.example.org".to_string(),
            phone: "+91 90000 11111".to_string(),
        }
    }

    fn document(kind: DocumentKind, name: &str) -> DocumentDescriptor {
        DocumentDescriptor {
            name: name.to_string(),
            kind,
            url: format!("https://files.example.org/prana/{name}"),
        }
    }

    pub(super) fn submission(idea: &str, description: &str) -> ApplicationSubmission {
        ApplicationSubmission {
            company_name: "Prana Yoga Labs".to_string(),
            registration_number: None,
            founding_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 8),
            business_type: AyushSystem::Yoga,
            address: Some("4 Lake View, Pune".to_string()),
            website: None,
            description: description.to_string(),
            founder: founder(),
            idea_explanation: idea.to_string(),
            documents: vec![
                document(DocumentKind::BusinessPlan, "plan.pdf"),
                document(DocumentKind::CertificateOfIncorporation, "coi.pdf"),
            ],
        }
    }

    pub(super) fn owner() -> OwnerId {
        OwnerId("founder-1".to_string())
    }

    pub(super) fn service(
        profile: ScoringProfile,
    ) -> (Arc<StubRepository>, RegistrationService<StubRepository>) {
        let repository = Arc::new(StubRepository::default());
        let service =
            RegistrationService::new(repository.clone(), ScoringConfig::for_profile(profile));
        (repository, service)
    }

    #[derive(Default)]
    pub(super) struct StubRepository {
        records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
        pub(super) offline: Mutex<bool>,
    }

    impl StubRepository {
        fn check_online(&self) -> Result<(), RepositoryError> {
            if *self.offline.lock().expect("offline flag poisoned") {
                Err(RepositoryError::Unavailable("maintenance window".to_string()))
            } else {
                Ok(())
            }
        }

        pub(super) fn stored(&self, id: &ApplicationId) -> Option<ApplicationRecord> {
            self.records.lock().expect("records poisoned").get(id).cloned()
        }
    }

    impl ApplicationRepository for StubRepository {
        fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
            self.check_online()?;
            let mut guard = self.records.lock().expect("records poisoned");
            if guard.contains_key(&record.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
            self.check_online()?;
            let mut guard = self.records.lock().expect("records poisoned");
            if !guard.contains_key(&record.id) {
                return Err(RepositoryError::NotFound);
            }
            guard.insert(record.id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
            self.check_online()?;
            Ok(self.stored(id))
        }

        fn list_by_owner(
            &self,
            owner: &OwnerId,
        ) -> Result<Vec<ApplicationRecord>, RepositoryError> {
            self.check_online()?;
            let guard = self.records.lock().expect("records poisoned");
            let mut records: Vec<_> = guard
                .values()
                .filter(|record| &record.owner == owner)
                .cloned()
                .collect();
            records.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(records)
        }

        fn list_all(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
            self.check_online()?;
            let guard = self.records.lock().expect("records poisoned");
            let mut records: Vec<_> = guard.values().cloned().collect();
            records.sort_by(|a, b| a.id.cmp(&b.id));
            Ok(records)
        }

        fn remove(&self, id: &ApplicationId) -> Result<ApplicationRecord, RepositoryError> {
            self.check_online()?;
            self.records
                .lock()
                .expect("records poisoned")
                .remove(id)
                .ok_or(RepositoryError::NotFound)
        }
    }
}

use ayush_registry::applications::{
    ApplicationEdit, ApplicationId, ApplicationStatus, IntakeViolation, OwnerId,
    RegistrationServiceError, RepositoryError, ScoringProfile,
};
use common::*;

const STRONG_IDEA: &str = "A novel yoga therapy programme with a unique, evidence-based \
                           approach for the growing corporate wellness market.";
const STRONG_DESCRIPTION: &str = "Our experienced team of certified instructors follows \
                                  national quality guidelines.";

#[test]
fn submission_is_scored_and_stored_with_recommendation() {
    let (repository, service) = service(ScoringProfile::KeywordDensity);

    let record = service
        .submit(owner(), submission(STRONG_IDEA, STRONG_DESCRIPTION))
        .expect("submitted");

    assert_eq!(record.status, ApplicationStatus::Approved);
    let score = record.score.as_ref().expect("scored");
    assert_eq!(record.ai_score, score.overall_score);
    assert_eq!(repository.stored(&record.id), Some(record.clone()));

    let view = record.status_view();
    assert_eq!(view.business_type, "yoga");
    assert_eq!(view.status, "approved");
    assert!(view.decision_rationale.starts_with("automated score"));
}

#[test]
fn missing_incorporation_certificate_blocks_submission() {
    let (repository, service) = service(ScoringProfile::KeywordDensity);
    let mut incomplete = submission(STRONG_IDEA, STRONG_DESCRIPTION);
    incomplete.documents.truncate(1);

    let err = service.submit(owner(), incomplete).expect_err("blocked");
    assert!(matches!(
        err,
        RegistrationServiceError::Intake(IntakeViolation::MissingDocument(_))
    ));
    assert!(service.list_all().expect("listed").is_empty());
    assert!(repository
        .stored(&ApplicationId("app-000001".to_string()))
        .is_none());
}

#[test]
fn edit_reruns_scoring_against_new_narrative() {
    let (_, service) = service(ScoringProfile::KeywordDensity);
    let record = service
        .submit(owner(), submission("We plan to sell soap online.", "A small shop."))
        .expect("submitted");
    assert_eq!(record.status, ApplicationStatus::Rejected);

    let edit = ApplicationEdit {
        company_name: "Prana Yoga Labs".to_string(),
        registration_number: "U85100MH2024PTC000001".to_string(),
        description: STRONG_DESCRIPTION.to_string(),
        idea_explanation: STRONG_IDEA.to_string(),
        ..ApplicationEdit::default()
    };
    let edited = service.edit(&record.id, edit).expect("edited");

    assert_eq!(edited.status, ApplicationStatus::Approved);
    assert!(edited.ai_score > record.ai_score);
    assert_eq!(
        edited.profile.registration_number.as_deref(),
        Some("U85100MH2024PTC000001")
    );
    assert_eq!(edited.created_at, record.created_at);
}

#[test]
fn keyword_count_profile_parks_middle_scores_for_review() {
    let (_, service) = service(ScoringProfile::KeywordCount);
    let idea = format!("{}{}", "novel ".repeat(5), "market ".repeat(5));

    let record = service
        .submit(owner(), submission(&idea, ""))
        .expect("submitted");

    assert_eq!(record.ai_score, 35);
    assert_eq!(record.status, ApplicationStatus::Rejected);

    let idea = format!("{}{}{}", "novel ".repeat(6), "market ".repeat(6), "yoga ".repeat(2));
    let record = service
        .submit(owner(), submission(&idea, ""))
        .expect("submitted");
    assert_eq!(record.status, ApplicationStatus::UnderReview);
}

#[test]
fn reviewer_decision_replaces_automated_rationale() {
    let (_, service) = service(ScoringProfile::KeywordDensity);
    let record = service
        .submit(owner(), submission(STRONG_IDEA, STRONG_DESCRIPTION))
        .expect("submitted");

    let reviewed = service
        .review(
            &record.id,
            ApplicationStatus::Rejected,
            Some("Certification could not be verified".to_string()),
        )
        .expect("reviewed");

    assert_eq!(reviewed.status, ApplicationStatus::Rejected);
    assert_eq!(reviewed.ai_score, record.ai_score);
    assert_eq!(
        reviewed.status_view().decision_rationale,
        "reviewer: Certification could not be verified"
    );
}

#[test]
fn repository_outage_surfaces_as_repository_error() {
    let (repository, service) = service(ScoringProfile::KeywordDensity);
    *repository.offline.lock().expect("offline flag poisoned") = true;

    let err = service
        .submit(owner(), submission(STRONG_IDEA, STRONG_DESCRIPTION))
        .expect_err("offline");

    assert!(matches!(
        err,
        RegistrationServiceError::Repository(RepositoryError::Unavailable(_))
    ));
    assert!(err.to_string().contains("maintenance window"));
}

#[test]
fn owners_only_see_their_own_applications() {
    let (_, service) = service(ScoringProfile::KeywordDensity);
    let first = service
        .submit(owner(), submission(STRONG_IDEA, STRONG_DESCRIPTION))
        .expect("first");
    let second = service
        .submit(
            OwnerId("founder-2".to_string()),
            submission(STRONG_IDEA, ""),
        )
        .expect("second");

    assert_ne!(first.id, second.id);
    let mine = service.list_for_owner(&owner()).expect("listed");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, first.id);

    service.withdraw(&first.id).expect("withdrawn");
    assert!(service.list_for_owner(&owner()).expect("listed").is_empty());
    assert_eq!(service.list_all().expect("listed").len(), 1);
}
