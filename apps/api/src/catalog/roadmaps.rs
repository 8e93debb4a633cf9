//! Staged learning-path content for the roadmap page.
//!
//! Curated stage content exists for Software Development and Data Science.
//! Other paths fall back to the Software Development content, and the view
//! layer flags that substitution explicitly — it is never silent.

use serde::Serialize;

use crate::catalog::CareerPath;

/// Display metadata for the five journey stages shown on the roadmap page.
#[derive(Debug, Clone, Serialize)]
pub struct StageInfo {
    pub name: &'static str,
    pub duration: &'static str,
    pub focus: &'static str,
}

pub const JOURNEY_STAGES: &[StageInfo] = &[
    StageInfo {
        name: "Fundamentals",
        duration: "2-3 months",
        focus: "Master the basics",
    },
    StageInfo {
        name: "Core Skills",
        duration: "3-4 months",
        focus: "Build essential expertise",
    },
    StageInfo {
        name: "Specialized Skills",
        duration: "4-6 months",
        focus: "Deep dive into advanced topics",
    },
    StageInfo {
        name: "Projects",
        duration: "Ongoing",
        focus: "Apply your knowledge",
    },
    StageInfo {
        name: "Professional Development",
        duration: "Ongoing",
        focus: "Grow your career",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub name: &'static str,
    pub platform: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageContent {
    pub topics: &'static [&'static str],
    pub courses: &'static [Course],
    pub projects: &'static [&'static str],
}

/// The three content-bearing stages of a curated learning path.
#[derive(Debug, Clone, Serialize)]
pub struct LearningPath {
    pub fundamentals: StageContent,
    pub core_skills: StageContent,
    pub specialized: StageContent,
}

impl LearningPath {
    /// Stage name/content pairs in journey order.
    pub fn stages(&self) -> [(&'static str, &StageContent); 3] {
        [
            ("fundamentals", &self.fundamentals),
            ("core_skills", &self.core_skills),
            ("specialized", &self.specialized),
        ]
    }
}

/// Curated content, where it exists. Callers needing a total lookup use
/// [`learning_path_or_default`] and surface the substitution to the user.
pub fn learning_path(path: CareerPath) -> Option<&'static LearningPath> {
    match path {
        CareerPath::SoftwareDevelopment => Some(&SOFTWARE_DEVELOPMENT),
        CareerPath::DataScience => Some(&DATA_SCIENCE),
        _ => None,
    }
}

/// Content for the requested path, or the Software Development default.
/// The boolean is `true` when the default was substituted.
pub fn learning_path_or_default(path: CareerPath) -> (&'static LearningPath, bool) {
    match learning_path(path) {
        Some(content) => (content, false),
        None => (&SOFTWARE_DEVELOPMENT, true),
    }
}

/// Community venues listed in the roadmap's learning hub.
pub const COMMUNITY_RESOURCES: &[&str] = &[
    "Stack Overflow",
    "GitHub Discussions",
    "Reddit Communities",
    "LinkedIn Groups",
];

#[derive(Debug, Clone, Serialize)]
pub struct PracticePlatform {
    pub name: &'static str,
    pub url: &'static str,
}

pub const PRACTICE_PLATFORMS: &[PracticePlatform] = &[
    PracticePlatform {
        name: "LeetCode",
        url: "https://leetcode.com/",
    },
    PracticePlatform {
        name: "HackerRank",
        url: "https://www.hackerrank.com/",
    },
    PracticePlatform {
        name: "Kaggle",
        url: "https://www.kaggle.com/",
    },
    PracticePlatform {
        name: "CodePen",
        url: "https://codepen.io/",
    },
];

static SOFTWARE_DEVELOPMENT: LearningPath = LearningPath {
    fundamentals: StageContent {
        topics: &[
            "Programming Basics",
            "Data Structures",
            "Algorithms",
            "Git Version Control",
        ],
        courses: &[
            Course {
                name: "Complete Python Bootcamp",
                platform: "Udemy",
                url: "https://www.udemy.com/course/complete-python-bootcamp/",
            },
            Course {
                name: "Data Structures and Algorithms",
                platform: "Coursera",
                url: "https://www.coursera.org/specializations/data-structures-algorithms",
            },
        ],
        projects: &[
            "Build a Calculator",
            "Create a Todo App",
            "Implement Basic Data Structures",
        ],
    },
    core_skills: StageContent {
        topics: &["Web Development", "Database Management", "API Development"],
        courses: &[
            Course {
                name: "The Web Developer Bootcamp",
                platform: "Udemy",
                url: "https://www.udemy.com/course/the-web-developer-bootcamp/",
            },
            Course {
                name: "Complete SQL Bootcamp",
                platform: "Udemy",
                url: "https://www.udemy.com/course/the-complete-sql-bootcamp/",
            },
        ],
        projects: &[
            "Personal Portfolio Website",
            "RESTful API Service",
            "Database-driven Web App",
        ],
    },
    specialized: StageContent {
        topics: &["Framework Expertise", "Cloud Services", "Testing"],
        courses: &[
            Course {
                name: "React - The Complete Guide",
                platform: "Udemy",
                url: "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
            },
            Course {
                name: "AWS Certified Developer",
                platform: "Udemy",
                url: "https://www.udemy.com/course/aws-certified-developer-associate/",
            },
        ],
        projects: &[
            "Full-stack E-commerce Site",
            "Cloud-deployed Application",
            "Mobile-responsive Web App",
        ],
    },
};

static DATA_SCIENCE: LearningPath = LearningPath {
    fundamentals: StageContent {
        topics: &[
            "Python Programming",
            "Statistics",
            "Linear Algebra",
            "Data Analysis",
        ],
        courses: &[
            Course {
                name: "Python for Data Science",
                platform: "Udemy",
                url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
            },
            Course {
                name: "Statistics for Data Science",
                platform: "Coursera",
                url: "https://www.coursera.org/specializations/statistics",
            },
        ],
        projects: &[
            "Data Analysis with Pandas",
            "Statistical Analysis Project",
            "Data Visualization Dashboard",
        ],
    },
    core_skills: StageContent {
        topics: &["Machine Learning", "Data Visualization", "Big Data Tools"],
        courses: &[
            Course {
                name: "Machine Learning A-Z",
                platform: "Udemy",
                url: "https://www.udemy.com/course/machinelearning/",
            },
            Course {
                name: "Deep Learning Specialization",
                platform: "Coursera",
                url: "https://www.coursera.org/specializations/deep-learning",
            },
        ],
        projects: &[
            "Predictive Analysis Model",
            "Customer Segmentation",
            "Time Series Forecasting",
        ],
    },
    specialized: StageContent {
        topics: &[
            "Deep Learning",
            "Natural Language Processing",
            "Computer Vision",
        ],
        courses: &[
            Course {
                name: "TensorFlow Developer Certificate",
                platform: "Udemy",
                url: "https://www.udemy.com/course/tensorflow-developer-certificate-machine-learning-zero-to-mastery/",
            },
            Course {
                name: "NLP Specialization",
                platform: "Coursera",
                url: "https://www.coursera.org/specializations/natural-language-processing",
            },
        ],
        projects: &[
            "Image Classification System",
            "Sentiment Analysis Tool",
            "Recommendation Engine",
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_paths_are_software_development_and_data_science() {
        assert!(learning_path(CareerPath::SoftwareDevelopment).is_some());
        assert!(learning_path(CareerPath::DataScience).is_some());
        assert!(learning_path(CareerPath::Cybersecurity).is_none());
        assert!(learning_path(CareerPath::ProductManagement).is_none());
    }

    #[test]
    fn test_default_substitution_is_flagged() {
        let (_, substituted) = learning_path_or_default(CareerPath::DevOpsEngineering);
        assert!(substituted);

        let (_, substituted) = learning_path_or_default(CareerPath::DataScience);
        assert!(!substituted);
    }

    #[test]
    fn test_every_stage_has_topics_courses_projects() {
        for path in [CareerPath::SoftwareDevelopment, CareerPath::DataScience] {
            let content = learning_path(path).unwrap();
            for (name, stage) in content.stages() {
                assert!(!stage.topics.is_empty(), "{path} {name} topics");
                assert!(!stage.courses.is_empty(), "{path} {name} courses");
                assert!(!stage.projects.is_empty(), "{path} {name} projects");
            }
        }
    }

    #[test]
    fn test_journey_has_five_stages() {
        assert_eq!(JOURNEY_STAGES.len(), 5);
        assert_eq!(JOURNEY_STAGES[0].name, "Fundamentals");
        assert_eq!(JOURNEY_STAGES[4].name, "Professional Development");
    }
}
