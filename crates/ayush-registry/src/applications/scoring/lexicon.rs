//! Keyword tables backing each scoring profile.

use super::Criterion;

pub(crate) fn density_keywords(criterion: Criterion) -> &'static [&'static str] {
    match criterion {
        Criterion::Innovation => &[
            "innovative",
            "novel",
            "breakthrough",
            "new",
            "first",
            "pioneering",
            "revolutionary",
            "unique",
            "cutting-edge",
            "groundbreaking",
            "disruptive",
            "research-based",
            "patent",
            "invention",
        ],
        Criterion::MarketViability => &[
            "market",
            "demand",
            "customers",
            "growth",
            "scale",
            "revenue",
            "business model",
            "profit",
            "sustainable",
            "commercial",
            "monetize",
            "projection",
            "viable",
            "sales",
            "consumer",
            "adoption",
            "traction",
            "return",
            "investment",
        ],
        Criterion::Compliance => &[
            "compliance",
            "regulation",
            "guidelines",
            "standard",
            "certification",
            "quality",
            "safety",
            "ethical",
            "authentic",
            "traditional",
            "natural",
            "organic",
            "sustainable",
            "tested",
            "verified",
            "approved",
            "legal",
            "protocol",
            "procedure",
        ],
        Criterion::TeamStrength => &[
            "team",
            "experience",
            "expertise",
            "background",
            "qualified",
            "skilled",
            "professional",
            "founder",
            "leadership",
            "education",
            "degree",
            "PhD",
            "MBA",
            "management",
            "industry",
            "years",
            "knowledge",
            "track record",
            "success",
        ],
        Criterion::Relevance => &[
            "ayurveda",
            "yoga",
            "unani",
            "siddha",
            "homeopathy",
            "traditional medicine",
            "ayush",
            "herbal",
            "wellness",
            "holistic",
            "healing",
            "natural remedy",
            "ancient",
            "wisdom",
            "balance",
            "health",
            "therapy",
            "alternative medicine",
            "complementary",
        ],
    }
}

pub(crate) fn count_keywords(criterion: Criterion) -> &'static [&'static str] {
    match criterion {
        Criterion::Innovation => &[
            "innovative",
            "novel",
            "breakthrough",
            "new",
            "first",
            "pioneering",
            "revolutionary",
            "unique",
            "cutting-edge",
            "groundbreaking",
            "disruptive",
        ],
        Criterion::MarketViability => &[
            "market",
            "demand",
            "customers",
            "growth",
            "scale",
            "revenue",
            "business model",
            "profit",
            "sustainable",
            "commercial",
            "monetize",
            "projection",
        ],
        Criterion::Compliance => &[
            "compliance",
            "regulation",
            "guidelines",
            "standard",
            "certification",
            "quality",
            "safety",
            "ethical",
            "authentic",
            "traditional",
            "natural",
        ],
        Criterion::TeamStrength => &[
            "team",
            "experience",
            "expertise",
            "background",
            "qualified",
            "skilled",
            "professional",
            "founder",
            "leadership",
        ],
        Criterion::Relevance => &[
            "ayurveda",
            "yoga",
            "unani",
            "siddha",
            "homeopathy",
            "traditional medicine",
            "ayush",
            "herbal",
            "wellness",
            "holistic",
        ],
    }
}

pub(crate) const POSITIVE_TERMS: &[&str] = &[
    "success",
    "beneficial",
    "effective",
    "proven",
    "reliable",
    "opportunity",
    "solution",
    "improve",
    "advantage",
    "excellent",
    "optimal",
    "enhance",
    "promising",
    "potential",
    "growth",
];

pub(crate) const NEGATIVE_TERMS: &[&str] = &[
    "challenge",
    "difficult",
    "problem",
    "issue",
    "concern",
    "risk",
    "failure",
    "obstacle",
    "limitation",
    "drawback",
    "downside",
    "constraint",
    "complication",
    "setback",
];

/// Verbs that turn a negative term into a description of what the startup fixes.
pub(crate) const SOLUTION_VERBS: &[&str] = &["solve", "address", "overcome", "mitigate", "resolve"];

/// Substrings that earn the flat tone bonus in the keyword-count profile.
pub(crate) const POSITIVE_INDICATORS: &[&str] =
    &["successful", "proven", "growing", "effective", "solution"];
