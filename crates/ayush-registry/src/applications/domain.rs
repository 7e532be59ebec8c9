use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier of the account that owns an application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

/// AYUSH system a startup operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyushSystem {
    #[default]
    Ayurveda,
    Yoga,
    Unani,
    Siddha,
    Homeopathy,
}

impl AyushSystem {
    pub const fn label(self) -> &'static str {
        match self {
            AyushSystem::Ayurveda => "ayurveda",
            AyushSystem::Yoga => "yoga",
            AyushSystem::Unani => "unani",
            AyushSystem::Siddha => "siddha",
            AyushSystem::Homeopathy => "homeopathy",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ayurveda" => Some(Self::Ayurveda),
            "yoga" => Some(Self::Yoga),
            "unani" => Some(Self::Unani),
            "siddha" => Some(Self::Siddha),
            "homeopathy" => Some(Self::Homeopathy),
            _ => None,
        }
    }
}

/// Founder contact captured on the second step of the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    BusinessPlan,
    CertificateOfIncorporation,
    PanCard,
    GstCertificate,
    AyushCertification,
    Other,
}

/// Uploaded supporting document; the file itself lives with the storage provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub name: String,
    pub kind: DocumentKind,
    pub url: String,
}

/// Startup application as submitted through the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub company_name: String,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub founding_date: Option<NaiveDate>,
    pub business_type: AyushSystem,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    pub founder: FounderContact,
    pub idea_explanation: String,
    #[serde(default)]
    pub documents: Vec<DocumentDescriptor>,
}

/// Fields an owner may change when editing a stored application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationEdit {
    pub company_name: String,
    pub registration_number: String,
    #[serde(default)]
    pub founding_date: Option<NaiveDate>,
    #[serde(default)]
    pub business_type: Option<AyushSystem>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub founder: Option<FounderContact>,
    #[serde(default)]
    pub idea_explanation: String,
}

/// Validated application content ready for scoring and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationProfile {
    pub company_name: String,
    pub registration_number: Option<String>,
    pub founding_date: Option<NaiveDate>,
    pub business_type: AyushSystem,
    pub address: Option<String>,
    pub website: Option<String>,
    pub description: String,
    pub founder: FounderContact,
    pub idea_explanation: String,
    pub documents: Vec<DocumentDescriptor>,
}

/// Lifecycle status tracked on a stored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "under_review" => Some(Self::UnderReview),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}
