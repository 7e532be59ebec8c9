use crate::infra::{parse_decision, InMemoryApplicationRepository};
use ayush_registry::applications::{
    ApplicationEdit, ApplicationRecord, ApplicationStatus, ApplicationSubmission, AyushSystem,
    Criterion, DocumentDescriptor, DocumentKind, FounderContact, IntakeGuard, OwnerId,
    RegistrationService, ScoringConfig,
};
use ayush_registry::error::AppError;
use clap::Args;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Owner account the sample applications are filed under
    #[arg(long, default_value = "demo-founder")]
    pub(crate) owner: String,
    /// Notes recorded with the reviewer decision
    #[arg(long)]
    pub(crate) reviewer_notes: Option<String>,
    /// Skip the edit and rescoring step
    #[arg(long)]
    pub(crate) skip_edit: bool,
    /// Reviewer decision for the first application (draft, submitted, under_review, approved,
    /// rejected). Defaults to under_review.
    #[arg(long, value_parser = parse_decision)]
    pub(crate) decision: Option<ApplicationStatus>,
}

pub(crate) fn run_demo(args: DemoArgs, config: ScoringConfig) -> Result<(), AppError> {
    let DemoArgs {
        owner,
        reviewer_notes,
        skip_edit,
        decision,
    } = args;
    let owner = OwnerId(owner);

    println!("AYUSH registry demo (profile {})", config.profile.name());
    println!("Status policy: {}", config.status_policy.summary());

    let guard = IntakeGuard::default();
    let required: Vec<_> = guard
        .required_documents()
        .iter()
        .map(|kind| format!("{kind:?}"))
        .collect();
    println!("Required documents: {}", required.join(", "));

    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = RegistrationService::with_guard(guard, repository, config);

    let strong = service.submit(owner.clone(), strong_submission())?;
    render_record("Submitted", &strong);

    let thin = service.submit(owner.clone(), thin_submission())?;
    render_record("Submitted", &thin);

    if !skip_edit {
        let edit = ApplicationEdit {
            company_name: thin.profile.company_name.clone(),
            registration_number: "U24100TN2024PTC000042".to_string(),
            description: "Our experienced team of siddha practitioners holds AYUSH \
                          certification and follows GMP guidelines."
                .to_string(),
            idea_explanation: "A novel, research-backed siddha formulation for the growing \
                               preventive wellness market. We address sourcing risk with \
                               a proven farmer network."
                .to_string(),
            ..ApplicationEdit::default()
        };
        let edited = service.edit(&thin.id, edit)?;
        println!(
            "\nEdited {}: score {} -> {}",
            edited.id.0, thin.ai_score, edited.ai_score
        );
        render_record("Rescored", &edited);
    }

    let notes = reviewer_notes.or_else(|| Some("Site visit scheduled".to_string()));
    let decision = decision.unwrap_or(ApplicationStatus::UnderReview);
    let reviewed = service.review(&strong.id, decision, notes)?;
    render_record("Reviewed", &reviewed);

    let records = service.list_for_owner(&owner)?;
    info!(owner = %owner.0, applications = records.len(), "demo complete");
    println!("\nApplications for {}", owner.0);
    for record in &records {
        let view = record.status_view();
        println!(
            "- {} {} [{}] score {}",
            view.application_id.0, view.company_name, view.status, view.ai_score
        );
    }
    let views: Vec<_> = records.iter().map(ApplicationRecord::status_view).collect();
    println!("\nStatus payload:\n{}", serde_json::to_string_pretty(&views)?);

    Ok(())
}

fn render_record(action: &str, record: &ApplicationRecord) {
    println!(
        "\n{action} {} ({}) -> {}",
        record.id.0,
        record.profile.company_name,
        record.status.label()
    );
    println!("  Decision rationale: {}", record.decision_rationale());
    if let Some(score) = &record.score {
        for criterion in Criterion::ALL {
            println!(
                "    - {} (weight {:.2}): {:.1}",
                criterion.label(),
                criterion.weight(),
                score.criterion(criterion)
            );
        }
    }
}

fn document(kind: DocumentKind, name: &str) -> DocumentDescriptor {
    DocumentDescriptor {
        name: name.to_string(),
        kind,
        url: format!("redacted/{name}"),
    }
}

fn strong_submission() -> ApplicationSubmission {
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
            document(DocumentKind::AyushCertification, "ayush-license.pdf"),
        ],
    }
}

fn thin_submission() -> ApplicationSubmission {
    ApplicationSubmission {
        company_name: "Chennai Herbals".to_string(),
        registration_number: None,
        founding_date: None,
        business_type: AyushSystem::Siddha,
        address: None,
        website: None,
        description: "A small shop.".to_string(),
        founder: FounderContact {
            name: "Karthik S".to_string(),
            email: "karthik@herbals.example.org".to_string(),
            phone: "+91 94440 00000".to_string(),
        },
        idea_explanation: "We plan to sell soap online.".to_string(),
        documents: vec![
            document(DocumentKind::BusinessPlan, "plan.pdf"),
            document(DocumentKind::CertificateOfIncorporation, "coi.pdf"),
        ],
    }
}
