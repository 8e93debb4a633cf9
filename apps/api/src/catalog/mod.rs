// Static career knowledge tables.
// Market data, career details, skill matrices, and staged learning paths are
// hard-coded reference data — no external API or DB behind them.

pub mod details;
pub mod market;
pub mod roadmaps;
pub mod skills;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping used by the recommendations page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Technical,
    NonTechnical,
}

/// Every career path the assistant knows about.
///
/// Lookups against this enum are exhaustive matches — adding a variant without
/// updating the tables is a compile error, not a silent empty result. Unknown
/// names from user input surface as `None` from [`CareerPath::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerPath {
    SoftwareDevelopment,
    DataScience,
    MachineLearningEngineering,
    DevOpsEngineering,
    DataAnalytics,
    Cybersecurity,
    UiUxDesign,
    DigitalMarketing,
    ProductManagement,
    BusinessAnalysis,
    TechnicalWriting,
    ItProjectManagement,
    ItSalesBusinessDevelopment,
}

impl CareerPath {
    /// All known paths in canonical order: technical first, then non-technical.
    /// This order doubles as the deterministic recommendation fallback.
    pub const ALL: [CareerPath; 13] = [
        CareerPath::SoftwareDevelopment,
        CareerPath::DataScience,
        CareerPath::MachineLearningEngineering,
        CareerPath::DevOpsEngineering,
        CareerPath::DataAnalytics,
        CareerPath::Cybersecurity,
        CareerPath::UiUxDesign,
        CareerPath::DigitalMarketing,
        CareerPath::ProductManagement,
        CareerPath::BusinessAnalysis,
        CareerPath::TechnicalWriting,
        CareerPath::ItProjectManagement,
        CareerPath::ItSalesBusinessDevelopment,
    ];

    /// The display name — also the wire format wherever paths cross the API.
    pub fn name(self) -> &'static str {
        match self {
            CareerPath::SoftwareDevelopment => "Software Development",
            CareerPath::DataScience => "Data Science",
            CareerPath::MachineLearningEngineering => "Machine Learning Engineering",
            CareerPath::DevOpsEngineering => "DevOps Engineering",
            CareerPath::DataAnalytics => "Data Analytics",
            CareerPath::Cybersecurity => "Cybersecurity",
            CareerPath::UiUxDesign => "UI/UX Design",
            CareerPath::DigitalMarketing => "Digital Marketing",
            CareerPath::ProductManagement => "Product Management",
            CareerPath::BusinessAnalysis => "Business Analysis",
            CareerPath::TechnicalWriting => "Technical Writing",
            CareerPath::ItProjectManagement => "IT Project Management",
            CareerPath::ItSalesBusinessDevelopment => "IT Sales & Business Development",
        }
    }

    /// Resolves a display name back to a path. `None` means the name is not a
    /// known career path — callers decide whether that is a validation error.
    pub fn parse(name: &str) -> Option<CareerPath> {
        CareerPath::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn category(self) -> CareerCategory {
        match self {
            CareerPath::SoftwareDevelopment
            | CareerPath::DataScience
            | CareerPath::MachineLearningEngineering
            | CareerPath::DevOpsEngineering
            | CareerPath::DataAnalytics
            | CareerPath::Cybersecurity
            | CareerPath::UiUxDesign => CareerCategory::Technical,
            CareerPath::DigitalMarketing
            | CareerPath::ProductManagement
            | CareerPath::BusinessAnalysis
            | CareerPath::TechnicalWriting
            | CareerPath::ItProjectManagement
            | CareerPath::ItSalesBusinessDevelopment => CareerCategory::NonTechnical,
        }
    }

    /// The seven technical paths — the selectable targets on the gap page.
    pub fn technical() -> impl Iterator<Item = CareerPath> {
        CareerPath::ALL
            .into_iter()
            .filter(|p| p.category() == CareerCategory::Technical)
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
