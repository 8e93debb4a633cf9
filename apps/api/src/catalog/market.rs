//! Job market reference data per career path.
//!
//! Values mirror the curated dataset the product ships with; `min_salary` is
//! an annual INR figure and `job_postings_trend` covers the last six months.

use serde::Serialize;

use crate::catalog::CareerPath;

#[derive(Debug, Clone, Serialize)]
pub struct MarketData {
    /// Projected growth over the next five years, percent.
    pub growth_rate: u8,
    /// Relative demand on a 0–100 scale.
    pub demand_score: u8,
    /// Typical starting salary, annual INR.
    pub min_salary: u32,
    pub trending_skills: &'static [&'static str],
    /// Monthly job posting counts, oldest first.
    pub job_postings_trend: [u32; 6],
}

/// Market data is curated for every known path, so lookup is total.
pub fn market_data(path: CareerPath) -> &'static MarketData {
    match path {
        CareerPath::SoftwareDevelopment => &MarketData {
            growth_rate: 25,
            demand_score: 85,
            min_salary: 500_000,
            trending_skills: &["Python", "JavaScript", "Cloud Computing", "DevOps"],
            job_postings_trend: [1200, 1350, 1500, 1800, 2100, 2400],
        },
        CareerPath::DataScience => &MarketData {
            growth_rate: 28,
            demand_score: 90,
            min_salary: 600_000,
            trending_skills: &["Python", "Machine Learning", "SQL", "Deep Learning"],
            job_postings_trend: [800, 1000, 1300, 1600, 2000, 2500],
        },
        CareerPath::MachineLearningEngineering => &MarketData {
            growth_rate: 30,
            demand_score: 88,
            min_salary: 700_000,
            trending_skills: &["TensorFlow", "PyTorch", "Computer Vision", "NLP"],
            job_postings_trend: [600, 800, 1100, 1500, 1900, 2300],
        },
        CareerPath::DevOpsEngineering => &MarketData {
            growth_rate: 22,
            demand_score: 82,
            min_salary: 600_000,
            trending_skills: &["Docker", "Kubernetes", "AWS", "CI/CD"],
            job_postings_trend: [900, 1100, 1400, 1700, 2000, 2200],
        },
        CareerPath::DataAnalytics => &MarketData {
            growth_rate: 23,
            demand_score: 80,
            min_salary: 450_000,
            trending_skills: &["SQL", "Python", "Tableau", "Power BI"],
            job_postings_trend: [1000, 1200, 1400, 1600, 1800, 2000],
        },
        CareerPath::Cybersecurity => &MarketData {
            growth_rate: 32,
            demand_score: 92,
            min_salary: 550_000,
            trending_skills: &[
                "Network Security",
                "Ethical Hacking",
                "Security Tools",
                "Risk Assessment",
            ],
            job_postings_trend: [900, 1100, 1400, 1800, 2200, 2600],
        },
        CareerPath::UiUxDesign => &MarketData {
            growth_rate: 24,
            demand_score: 84,
            min_salary: 450_000,
            trending_skills: &["Figma", "User Research", "Wireframing", "Design Systems"],
            job_postings_trend: [800, 1000, 1200, 1500, 1800, 2100],
        },
        CareerPath::DigitalMarketing => &MarketData {
            growth_rate: 20,
            demand_score: 78,
            min_salary: 400_000,
            trending_skills: &["SEO", "Social Media", "Content Strategy", "Analytics"],
            job_postings_trend: [1100, 1300, 1500, 1700, 1900, 2100],
        },
        CareerPath::ProductManagement => &MarketData {
            growth_rate: 27,
            demand_score: 86,
            min_salary: 800_000,
            trending_skills: &["Agile", "Product Strategy", "User Stories", "Roadmapping"],
            job_postings_trend: [700, 900, 1200, 1500, 1800, 2200],
        },
        CareerPath::BusinessAnalysis => &MarketData {
            growth_rate: 21,
            demand_score: 79,
            min_salary: 450_000,
            trending_skills: &[
                "Requirements Gathering",
                "Process Modeling",
                "Data Analysis",
                "Stakeholder Management",
            ],
            job_postings_trend: [800, 1000, 1200, 1400, 1600, 1900],
        },
        CareerPath::TechnicalWriting => &MarketData {
            growth_rate: 18,
            demand_score: 75,
            min_salary: 400_000,
            trending_skills: &[
                "Documentation",
                "API Writing",
                "Content Management",
                "Information Architecture",
            ],
            job_postings_trend: [500, 600, 800, 1000, 1200, 1400],
        },
        CareerPath::ItProjectManagement => &MarketData {
            growth_rate: 24,
            demand_score: 83,
            min_salary: 700_000,
            trending_skills: &[
                "Project Planning",
                "Risk Management",
                "Team Leadership",
                "Budgeting",
            ],
            job_postings_trend: [900, 1100, 1300, 1600, 1900, 2200],
        },
        CareerPath::ItSalesBusinessDevelopment => &MarketData {
            growth_rate: 19,
            demand_score: 77,
            min_salary: 450_000,
            trending_skills: &[
                "Solution Selling",
                "CRM",
                "Relationship Building",
                "Technical Knowledge",
            ],
            job_postings_trend: [700, 900, 1100, 1300, 1500, 1800],
        },
    }
}
