use super::domain::{
    ApplicationEdit, ApplicationProfile, ApplicationSubmission, DocumentDescriptor, DocumentKind,
};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("missing required document: {0:?}")]
    MissingDocument(DocumentKind),
}

const DEFAULT_REQUIRED_DOCUMENTS: &[DocumentKind] = &[
    DocumentKind::CertificateOfIncorporation,
    DocumentKind::BusinessPlan,
];

/// Guard turning raw submissions into `ApplicationProfile` values.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    required_documents: Vec<DocumentKind>,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::with_required_documents(DEFAULT_REQUIRED_DOCUMENTS.to_vec())
    }
}

impl IntakeGuard {
    pub fn with_required_documents(required_documents: Vec<DocumentKind>) -> Self {
        Self { required_documents }
    }

    pub fn required_documents(&self) -> &[DocumentKind] {
        &self.required_documents
    }

    pub fn profile_from_submission(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationProfile, IntakeViolation> {
        require("company_name", &submission.company_name)?;
        require("founder.name", &submission.founder.name)?;
        require("founder.email", &submission.founder.email)?;
        require("founder.phone", &submission.founder.phone)?;
        require("idea_explanation", &submission.idea_explanation)?;
        self.ensure_documents(&submission.documents)?;

        Ok(ApplicationProfile {
            company_name: submission.company_name.trim().to_string(),
            registration_number: non_blank(submission.registration_number),
            founding_date: submission.founding_date,
            business_type: submission.business_type,
            address: non_blank(submission.address),
            website: non_blank(submission.website),
            description: submission.description,
            founder: submission.founder,
            idea_explanation: submission.idea_explanation,
            documents: submission.documents,
        })
    }

    /// Apply an edit to a stored profile. Documents are kept as uploaded.
    pub fn apply_edit(
        &self,
        current: &ApplicationProfile,
        edit: ApplicationEdit,
    ) -> Result<ApplicationProfile, IntakeViolation> {
        require("company_name", &edit.company_name)?;
        require("registration_number", &edit.registration_number)?;

        let founder = edit.founder.unwrap_or_else(|| current.founder.clone());

        Ok(ApplicationProfile {
            company_name: edit.company_name.trim().to_string(),
            registration_number: Some(edit.registration_number.trim().to_string()),
            founding_date: edit.founding_date.or(current.founding_date),
            business_type: edit.business_type.unwrap_or(current.business_type),
            address: non_blank(edit.address).or_else(|| current.address.clone()),
            website: non_blank(edit.website).or_else(|| current.website.clone()),
            description: edit.description,
            founder,
            idea_explanation: edit.idea_explanation,
            documents: current.documents.clone(),
        })
    }

    fn ensure_documents(&self, documents: &[DocumentDescriptor]) -> Result<(), IntakeViolation> {
        for kind in &self.required_documents {
            if !documents.iter().any(|document| document.kind == *kind) {
                return Err(IntakeViolation::MissingDocument(*kind));
            }
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), IntakeViolation> {
    if value.trim().is_empty() {
        Err(IntakeViolation::MissingField(field))
    } else {
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
