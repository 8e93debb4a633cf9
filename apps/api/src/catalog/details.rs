//! Required skills, role openings, and a market summary per career path.

use serde::Serialize;

use crate::catalog::CareerPath;

#[derive(Debug, Clone, Serialize)]
pub struct CareerDetails {
    pub skills: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub market_trends: &'static str,
}

/// Curated for every known path, so lookup is total.
pub fn career_details(path: CareerPath) -> &'static CareerDetails {
    match path {
        CareerPath::SoftwareDevelopment => &CareerDetails {
            skills: &[
                "Programming Languages (Python, Java, JavaScript)",
                "Web Development",
                "Database Management",
                "Version Control",
                "Software Architecture",
            ],
            opportunities: &[
                "Full-stack Developer",
                "Backend Developer",
                "Mobile App Developer",
                "Cloud Solutions Engineer",
                "DevOps Engineer",
            ],
            market_trends: "High demand with 25% growth expected over next 5 years",
        },
        CareerPath::DataScience => &CareerDetails {
            skills: &[
                "Python",
                "Statistics",
                "Machine Learning",
                "Data Visualization",
                "Big Data Technologies",
            ],
            opportunities: &[
                "Data Scientist",
                "Machine Learning Engineer",
                "AI Researcher",
                "Business Intelligence Analyst",
                "Quantitative Analyst",
            ],
            market_trends: "Rapidly growing field with 28% projected growth",
        },
        CareerPath::MachineLearningEngineering => &CareerDetails {
            skills: &[
                "Deep Learning",
                "NLP",
                "Computer Vision",
                "Python",
                "Model Deployment",
                "MLOps",
            ],
            opportunities: &[
                "ML Engineer",
                "AI Developer",
                "Research Scientist",
                "Computer Vision Engineer",
                "NLP Engineer",
            ],
            market_trends: "Explosive growth with 30% increase in demand annually",
        },
        CareerPath::DevOpsEngineering => &CareerDetails {
            skills: &[
                "Cloud Platforms",
                "CI/CD",
                "Container Orchestration",
                "Infrastructure as Code",
                "Monitoring Tools",
            ],
            opportunities: &[
                "DevOps Engineer",
                "Site Reliability Engineer",
                "Cloud Engineer",
                "Platform Engineer",
                "Infrastructure Engineer",
            ],
            market_trends: "Strong demand with 22% growth in job openings",
        },
        CareerPath::DataAnalytics => &CareerDetails {
            skills: &[
                "SQL",
                "Data Visualization",
                "Statistical Analysis",
                "Excel",
                "Business Intelligence Tools",
            ],
            opportunities: &[
                "Data Analyst",
                "Business Intelligence Developer",
                "Marketing Analyst",
                "Financial Analyst",
                "Operations Analyst",
            ],
            market_trends: "Steady growth with 23% increase in opportunities",
        },
        CareerPath::Cybersecurity => &CareerDetails {
            skills: &[
                "Network Security",
                "Ethical Hacking",
                "Security Tools",
                "Risk Assessment",
                "Incident Response",
            ],
            opportunities: &[
                "Security Engineer",
                "Penetration Tester",
                "Security Analyst",
                "Security Consultant",
                "Security Architect",
            ],
            market_trends: "Critical growth area with 32% increase in demand",
        },
        CareerPath::UiUxDesign => &CareerDetails {
            skills: &[
                "User Research",
                "Wireframing",
                "Prototyping",
                "Visual Design",
                "Design Systems",
            ],
            opportunities: &[
                "UI Designer",
                "UX Designer",
                "Product Designer",
                "Interaction Designer",
                "Design System Specialist",
            ],
            market_trends: "Growing demand with 24% increase in opportunities",
        },
        CareerPath::DigitalMarketing => &CareerDetails {
            skills: &[
                "SEO",
                "Social Media Marketing",
                "Content Strategy",
                "Analytics",
                "Email Marketing",
            ],
            opportunities: &[
                "Digital Marketing Manager",
                "SEO Specialist",
                "Content Strategist",
                "Social Media Manager",
                "Marketing Analyst",
            ],
            market_trends: "Steady growth with 20% increase in roles",
        },
        CareerPath::ProductManagement => &CareerDetails {
            skills: &[
                "Product Strategy",
                "User Stories",
                "Agile Methodologies",
                "Data Analysis",
                "Stakeholder Management",
            ],
            opportunities: &[
                "Product Manager",
                "Product Owner",
                "Technical Product Manager",
                "Growth Product Manager",
                "Senior Product Manager",
            ],
            market_trends: "High demand with 27% growth in opportunities",
        },
        CareerPath::BusinessAnalysis => &CareerDetails {
            skills: &[
                "Requirements Gathering",
                "Process Modeling",
                "Data Analysis",
                "Documentation",
                "Stakeholder Management",
            ],
            opportunities: &[
                "Business Analyst",
                "Systems Analyst",
                "Process Analyst",
                "Agile Business Analyst",
                "Senior Business Analyst",
            ],
            market_trends: "Stable growth with 21% increase in positions",
        },
        CareerPath::TechnicalWriting => &CareerDetails {
            skills: &[
                "Documentation",
                "API Writing",
                "Information Architecture",
                "Content Management",
                "Research",
            ],
            opportunities: &[
                "Technical Writer",
                "Documentation Specialist",
                "API Documentation Writer",
                "Content Developer",
                "Knowledge Base Manager",
            ],
            market_trends: "Steady demand with 18% growth expected",
        },
        CareerPath::ItProjectManagement => &CareerDetails {
            skills: &[
                "Project Planning",
                "Risk Management",
                "Agile/Scrum",
                "Budgeting",
                "Team Leadership",
            ],
            opportunities: &[
                "IT Project Manager",
                "Program Manager",
                "Scrum Master",
                "Delivery Manager",
                "Technical Project Lead",
            ],
            market_trends: "Strong growth with 24% increase in demand",
        },
        CareerPath::ItSalesBusinessDevelopment => &CareerDetails {
            skills: &[
                "Solution Selling",
                "Relationship Building",
                "Technical Knowledge",
                "CRM",
                "Negotiation",
            ],
            opportunities: &[
                "Technical Sales Manager",
                "Solutions Consultant",
                "Business Development Manager",
                "Account Executive",
                "Sales Engineer",
            ],
            market_trends: "Consistent growth with 19% increase in opportunities",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_has_details() {
        for path in CareerPath::ALL {
            let details = career_details(path);
            assert!(!details.skills.is_empty(), "{path} has no skills");
            assert!(
                !details.opportunities.is_empty(),
                "{path} has no opportunities"
            );
            assert!(!details.market_trends.is_empty());
        }
    }

    #[test]
    fn test_market_trend_summaries_quote_growth_figures() {
        for path in CareerPath::ALL {
            let trends = career_details(path).market_trends;
            assert!(
                trends.contains('%'),
                "{path} trend summary lacks a growth figure"
            );
        }
    }
}
