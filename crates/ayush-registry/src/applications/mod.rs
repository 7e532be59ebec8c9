//! AYUSH startup application intake, scoring, and review.
//!
//! Submissions are validated at the boundary by the intake guard, scored by the stateless
//! [`ApplicationScorer`], and persisted through an injected [`ApplicationRepository`].
//! [`FaqAssistant`] answers applicant questions from a fixed FAQ table.

pub mod assistant;
pub mod domain;
pub mod intake;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use assistant::{AssistantReply, FaqAssistant, FaqEntry, FAQ};
pub use domain::{
    ApplicationEdit, ApplicationId, ApplicationProfile, ApplicationStatus, ApplicationSubmission,
    AyushSystem, DocumentDescriptor, DocumentKind, FounderContact, OwnerId,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, RepositoryError,
};
pub use scoring::{
    score_application, ApplicationScorer, Criterion, ScoreResult, ScoreStatus, ScoringConfig,
    ScoringProfile, StatusPolicy,
};
pub use service::{RegistrationService, RegistrationServiceError};
