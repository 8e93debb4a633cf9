//! Industry skill matrices for the gap analysis page.
//!
//! Each technical path carries three categories (Technical, Tools, Soft
//! Skills). A skill's `weight` is the required proficiency on the same 0–5
//! scale users rate themselves on; every skill links curated learning
//! resources surfaced when a gap exists.

use serde::Serialize;

use crate::catalog::CareerPath;

#[derive(Debug, Clone, Serialize)]
pub struct LearningResource {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillRequirement {
    pub name: &'static str,
    /// Required proficiency, 0–5.
    pub weight: u8,
    pub resources: &'static [LearningResource],
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [SkillRequirement],
}

/// Skill matrices exist for the technical paths only — the gap page's target
/// list. Non-technical paths return `None` and never reach the analyzer.
pub fn skill_matrix(path: CareerPath) -> Option<&'static [SkillCategory]> {
    match path {
        CareerPath::SoftwareDevelopment => Some(SOFTWARE_DEVELOPMENT),
        CareerPath::DataScience => Some(DATA_SCIENCE),
        CareerPath::MachineLearningEngineering => Some(MACHINE_LEARNING_ENGINEERING),
        CareerPath::DevOpsEngineering => Some(DEVOPS_ENGINEERING),
        CareerPath::DataAnalytics => Some(DATA_ANALYTICS),
        CareerPath::Cybersecurity => Some(CYBERSECURITY),
        CareerPath::UiUxDesign => Some(UI_UX_DESIGN),
        CareerPath::DigitalMarketing
        | CareerPath::ProductManagement
        | CareerPath::BusinessAnalysis
        | CareerPath::TechnicalWriting
        | CareerPath::ItProjectManagement
        | CareerPath::ItSalesBusinessDevelopment => None,
    }
}

static SOFTWARE_DEVELOPMENT: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "Modern JavaScript (ES6+)",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Modern JavaScript Course",
                        url: "https://www.udemy.com/course/modern-javascript-from-novice-to-ninja/",
                    },
                    LearningResource {
                        name: "JavaScript.info",
                        url: "https://javascript.info/",
                    },
                    LearningResource {
                        name: "MDN Web Docs",
                        url: "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
                    },
                ],
            },
            SkillRequirement {
                name: "React/Angular/Vue.js",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "React - The Complete Guide",
                        url: "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
                    },
                    LearningResource {
                        name: "Vue.js Course",
                        url: "https://www.udemy.com/course/vuejs-2-the-complete-guide/",
                    },
                    LearningResource {
                        name: "Angular Tutorial",
                        url: "https://angular.io/tutorial",
                    },
                ],
            },
            SkillRequirement {
                name: "Node.js",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Node.js Complete Guide",
                        url: "https://www.udemy.com/course/nodejs-the-complete-guide/",
                    },
                    LearningResource {
                        name: "Node.js Documentation",
                        url: "https://nodejs.org/en/docs/",
                    },
                ],
            },
            SkillRequirement {
                name: "Cloud Services (AWS/Azure/GCP)",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "AWS Certified Developer",
                        url: "https://www.udemy.com/course/aws-certified-developer-associate/",
                    },
                    LearningResource {
                        name: "Azure Fundamentals",
                        url: "https://learn.microsoft.com/en-us/training/azure/",
                    },
                ],
            },
            SkillRequirement {
                name: "Docker & Kubernetes",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Docker & Kubernetes Course",
                        url: "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
                    },
                    LearningResource {
                        name: "Kubernetes Documentation",
                        url: "https://kubernetes.io/docs/home/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "Git & GitHub",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Git Complete Guide",
                        url: "https://www.udemy.com/course/git-complete/",
                    },
                    LearningResource {
                        name: "GitHub Learning Lab",
                        url: "https://lab.github.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "VS Code/Modern IDEs",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "VS Code Tutorial",
                        url: "https://code.visualstudio.com/docs",
                    },
                    LearningResource {
                        name: "VS Code Can Do That?",
                        url: "https://www.vscodecandothat.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Testing Frameworks",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "JavaScript Testing Course",
                        url: "https://www.udemy.com/course/javascript-unit-testing-the-practical-guide/",
                    },
                    LearningResource {
                        name: "Jest Documentation",
                        url: "https://jestjs.io/docs/getting-started",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Agile Methodologies",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Agile Fundamentals",
                        url: "https://www.coursera.org/learn/agile-fundamentals",
                    },
                    LearningResource {
                        name: "Scrum Guide",
                        url: "https://scrumguides.org/",
                    },
                ],
            },
            SkillRequirement {
                name: "Technical Communication",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Technical Writing Course",
                        url: "https://www.coursera.org/learn/technical-writing",
                    },
                    LearningResource {
                        name: "Google Technical Writing",
                        url: "https://developers.google.com/tech-writing",
                    },
                ],
            },
            SkillRequirement {
                name: "Problem-Solving",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "LeetCode Problems",
                        url: "https://leetcode.com/problemset/all/",
                    },
                    LearningResource {
                        name: "HackerRank Challenges",
                        url: "https://www.hackerrank.com/domains/algorithms",
                    },
                ],
            },
        ],
    },
];

static DATA_SCIENCE: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "Python for Data Science",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Python for Data Science",
                        url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
                    },
                    LearningResource {
                        name: "DataCamp Python Track",
                        url: "https://www.datacamp.com/tracks/python-programmer",
                    },
                ],
            },
            SkillRequirement {
                name: "Machine Learning",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Machine Learning A-Z",
                        url: "https://www.udemy.com/course/machinelearning/",
                    },
                    LearningResource {
                        name: "Stanford ML Course",
                        url: "https://www.coursera.org/learn/machine-learning",
                    },
                ],
            },
            SkillRequirement {
                name: "Deep Learning",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Deep Learning Specialization",
                        url: "https://www.coursera.org/specializations/deep-learning",
                    },
                    LearningResource {
                        name: "Fast.ai Course",
                        url: "https://www.fast.ai/",
                    },
                ],
            },
            SkillRequirement {
                name: "Statistical Analysis",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Statistics for Data Science",
                        url: "https://www.coursera.org/specializations/statistics",
                    },
                    LearningResource {
                        name: "Khan Academy Statistics",
                        url: "https://www.khanacademy.org/math/statistics-probability",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "SQL & Databases",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Complete SQL Bootcamp",
                        url: "https://www.udemy.com/course/the-complete-sql-bootcamp/",
                    },
                    LearningResource {
                        name: "Mode SQL Tutorial",
                        url: "https://mode.com/sql-tutorial/",
                    },
                ],
            },
            SkillRequirement {
                name: "Jupyter & Data Tools",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Jupyter Tutorial",
                        url: "https://jupyter.org/try",
                    },
                    LearningResource {
                        name: "Pandas Documentation",
                        url: "https://pandas.pydata.org/docs/",
                    },
                ],
            },
            SkillRequirement {
                name: "Visualization Tools",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Data Visualization Course",
                        url: "https://www.coursera.org/learn/data-visualization",
                    },
                    LearningResource {
                        name: "Tableau Training",
                        url: "https://www.tableau.com/learn/training",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Data Storytelling",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Data Storytelling Course",
                        url: "https://www.coursera.org/learn/data-stories",
                    },
                    LearningResource {
                        name: "Storytelling with Data",
                        url: "https://www.storytellingwithdata.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Business Acumen",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Business Analytics",
                        url: "https://www.coursera.org/specializations/business-analytics",
                    },
                    LearningResource {
                        name: "Harvard Business Review",
                        url: "https://hbr.org/topic/analytics",
                    },
                ],
            },
            SkillRequirement {
                name: "Research Methodology",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Research Methods Course",
                        url: "https://www.coursera.org/learn/research-methods",
                    },
                    LearningResource {
                        name: "Google Scholar",
                        url: "https://scholar.google.com/",
                    },
                ],
            },
        ],
    },
];

static MACHINE_LEARNING_ENGINEERING: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "PyTorch/TensorFlow",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "PyTorch Tutorials",
                        url: "https://pytorch.org/tutorials/",
                    },
                    LearningResource {
                        name: "TensorFlow Developer Certificate",
                        url: "https://www.udemy.com/course/tensorflow-developer-certificate-machine-learning-zero-to-mastery/",
                    },
                ],
            },
            SkillRequirement {
                name: "Model Deployment & Serving",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Full Stack Deep Learning",
                        url: "https://fullstackdeeplearning.com/",
                    },
                    LearningResource {
                        name: "TensorFlow Serving Guide",
                        url: "https://www.tensorflow.org/tfx/guide/serving",
                    },
                ],
            },
            SkillRequirement {
                name: "Natural Language Processing",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "NLP Specialization",
                        url: "https://www.coursera.org/specializations/natural-language-processing",
                    },
                    LearningResource {
                        name: "Hugging Face Course",
                        url: "https://huggingface.co/course",
                    },
                ],
            },
            SkillRequirement {
                name: "Computer Vision",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Convolutional Neural Networks",
                        url: "https://www.coursera.org/learn/convolutional-neural-networks",
                    },
                    LearningResource {
                        name: "OpenCV Tutorials",
                        url: "https://docs.opencv.org/4.x/d9/df8/tutorial_root.html",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "Experiment Tracking (MLflow/W&B)",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "MLflow Documentation",
                        url: "https://mlflow.org/docs/latest/index.html",
                    },
                    LearningResource {
                        name: "Weights & Biases Tutorials",
                        url: "https://docs.wandb.ai/tutorials",
                    },
                ],
            },
            SkillRequirement {
                name: "Docker & Kubernetes",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Docker & Kubernetes Course",
                        url: "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
                    },
                    LearningResource {
                        name: "Kubernetes Documentation",
                        url: "https://kubernetes.io/docs/home/",
                    },
                ],
            },
            SkillRequirement {
                name: "Cloud ML Platforms",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "AWS SageMaker Guide",
                        url: "https://docs.aws.amazon.com/sagemaker/",
                    },
                    LearningResource {
                        name: "Vertex AI Documentation",
                        url: "https://cloud.google.com/vertex-ai/docs",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Research Literacy",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Papers with Code",
                        url: "https://paperswithcode.com/",
                    },
                    LearningResource {
                        name: "arXiv Machine Learning",
                        url: "https://arxiv.org/list/cs.LG/recent",
                    },
                ],
            },
            SkillRequirement {
                name: "Cross-team Communication",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Technical Writing Course",
                        url: "https://www.coursera.org/learn/technical-writing",
                    },
                    LearningResource {
                        name: "Google Technical Writing",
                        url: "https://developers.google.com/tech-writing",
                    },
                ],
            },
            SkillRequirement {
                name: "Problem Decomposition",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "LeetCode Problems",
                        url: "https://leetcode.com/problemset/all/",
                    },
                    LearningResource {
                        name: "Kaggle Competitions",
                        url: "https://www.kaggle.com/competitions",
                    },
                ],
            },
        ],
    },
];

static DEVOPS_ENGINEERING: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "Linux & Shell Scripting",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Linux Command Line Basics",
                        url: "https://www.udemy.com/course/linux-command-line-volume1/",
                    },
                    LearningResource {
                        name: "The Linux Documentation Project",
                        url: "https://tldp.org/",
                    },
                ],
            },
            SkillRequirement {
                name: "CI/CD Pipelines",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Jenkins from Zero to Hero",
                        url: "https://www.udemy.com/course/jenkins-from-zero-to-hero/",
                    },
                    LearningResource {
                        name: "GitHub Actions Documentation",
                        url: "https://docs.github.com/en/actions",
                    },
                ],
            },
            SkillRequirement {
                name: "Infrastructure as Code",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Terraform Beginner to Advanced",
                        url: "https://www.udemy.com/course/terraform-beginner-to-advanced/",
                    },
                    LearningResource {
                        name: "Terraform Documentation",
                        url: "https://developer.hashicorp.com/terraform/docs",
                    },
                ],
            },
            SkillRequirement {
                name: "Networking Fundamentals",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Bits and Bytes of Computer Networking",
                        url: "https://www.coursera.org/learn/computer-networking",
                    },
                    LearningResource {
                        name: "Cloudflare Learning Center",
                        url: "https://www.cloudflare.com/learning/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "Docker & Kubernetes",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Docker & Kubernetes Course",
                        url: "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
                    },
                    LearningResource {
                        name: "Kubernetes Documentation",
                        url: "https://kubernetes.io/docs/home/",
                    },
                ],
            },
            SkillRequirement {
                name: "Cloud Platforms (AWS/Azure/GCP)",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "AWS Solutions Architect",
                        url: "https://www.udemy.com/course/aws-certified-solutions-architect-associate-saa-c03/",
                    },
                    LearningResource {
                        name: "Azure Fundamentals",
                        url: "https://learn.microsoft.com/en-us/training/azure/",
                    },
                ],
            },
            SkillRequirement {
                name: "Monitoring (Prometheus/Grafana)",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Prometheus Documentation",
                        url: "https://prometheus.io/docs/introduction/overview/",
                    },
                    LearningResource {
                        name: "Grafana Tutorials",
                        url: "https://grafana.com/tutorials/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Incident Communication",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Google SRE Book",
                        url: "https://sre.google/sre-book/table-of-contents/",
                    },
                    LearningResource {
                        name: "PagerDuty Incident Response",
                        url: "https://response.pagerduty.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Collaboration Across Teams",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Agile Fundamentals",
                        url: "https://www.coursera.org/learn/agile-fundamentals",
                    },
                    LearningResource {
                        name: "Scrum Guide",
                        url: "https://scrumguides.org/",
                    },
                ],
            },
            SkillRequirement {
                name: "Runbook Documentation",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Google Technical Writing",
                        url: "https://developers.google.com/tech-writing",
                    },
                    LearningResource {
                        name: "Write the Docs Guide",
                        url: "https://www.writethedocs.org/guide/",
                    },
                ],
            },
        ],
    },
];

static DATA_ANALYTICS: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "SQL",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Complete SQL Bootcamp",
                        url: "https://www.udemy.com/course/the-complete-sql-bootcamp/",
                    },
                    LearningResource {
                        name: "Mode SQL Tutorial",
                        url: "https://mode.com/sql-tutorial/",
                    },
                ],
            },
            SkillRequirement {
                name: "Statistical Analysis",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Statistics for Data Science",
                        url: "https://www.coursera.org/specializations/statistics",
                    },
                    LearningResource {
                        name: "Khan Academy Statistics",
                        url: "https://www.khanacademy.org/math/statistics-probability",
                    },
                ],
            },
            SkillRequirement {
                name: "Python for Analysis",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Python for Data Science",
                        url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
                    },
                    LearningResource {
                        name: "Pandas Documentation",
                        url: "https://pandas.pydata.org/docs/",
                    },
                ],
            },
            SkillRequirement {
                name: "Data Cleaning",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Kaggle Data Cleaning Course",
                        url: "https://www.kaggle.com/learn/data-cleaning",
                    },
                    LearningResource {
                        name: "OpenRefine Documentation",
                        url: "https://openrefine.org/docs",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "Tableau",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Tableau Training",
                        url: "https://www.tableau.com/learn/training",
                    },
                    LearningResource {
                        name: "Tableau Public Gallery",
                        url: "https://public.tableau.com/app/discover",
                    },
                ],
            },
            SkillRequirement {
                name: "Power BI",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Power BI Learning Path",
                        url: "https://learn.microsoft.com/en-us/power-bi/",
                    },
                    LearningResource {
                        name: "Power BI Up & Running",
                        url: "https://www.udemy.com/course/microsoft-power-bi-up-running-with-power-bi-desktop/",
                    },
                ],
            },
            SkillRequirement {
                name: "Excel & Spreadsheets",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Excel Skills for Business",
                        url: "https://www.coursera.org/specializations/excel",
                    },
                    LearningResource {
                        name: "Exceljet Tutorials",
                        url: "https://exceljet.net/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Data Storytelling",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Storytelling with Data",
                        url: "https://www.storytellingwithdata.com/",
                    },
                    LearningResource {
                        name: "Data Storytelling Course",
                        url: "https://www.coursera.org/learn/data-stories",
                    },
                ],
            },
            SkillRequirement {
                name: "Business Acumen",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Business Analytics",
                        url: "https://www.coursera.org/specializations/business-analytics",
                    },
                    LearningResource {
                        name: "Harvard Business Review",
                        url: "https://hbr.org/topic/analytics",
                    },
                ],
            },
            SkillRequirement {
                name: "Stakeholder Communication",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Technical Writing Course",
                        url: "https://www.coursera.org/learn/technical-writing",
                    },
                    LearningResource {
                        name: "Introduction to Public Speaking",
                        url: "https://www.coursera.org/learn/public-speaking",
                    },
                ],
            },
        ],
    },
];

static CYBERSECURITY: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "Network Security",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "CompTIA Security+ Course",
                        url: "https://www.udemy.com/course/securityplus/",
                    },
                    LearningResource {
                        name: "Cisco Networking Academy",
                        url: "https://www.netacad.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Ethical Hacking",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Practical Ethical Hacking",
                        url: "https://academy.tcm-sec.com/p/practical-ethical-hacking-the-complete-course",
                    },
                    LearningResource {
                        name: "TryHackMe",
                        url: "https://tryhackme.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Incident Response",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "NIST Incident Handling Guide",
                        url: "https://csrc.nist.gov/pubs/sp/800/61/r2/final",
                    },
                    LearningResource {
                        name: "SANS Incident Handling",
                        url: "https://www.sans.org/cyber-security-courses/hacker-techniques-incident-handling/",
                    },
                ],
            },
            SkillRequirement {
                name: "Risk Assessment",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "NIST Risk Management Framework",
                        url: "https://csrc.nist.gov/projects/risk-management",
                    },
                    LearningResource {
                        name: "ISO 27001 Overview",
                        url: "https://www.iso.org/isoiec-27001-information-security.html",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "SIEM Platforms",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Splunk Fundamentals",
                        url: "https://www.splunk.com/en_us/training/free-courses/splunk-fundamentals-1.html",
                    },
                    LearningResource {
                        name: "Elastic Security Labs",
                        url: "https://www.elastic.co/security-labs",
                    },
                ],
            },
            SkillRequirement {
                name: "Wireshark & Packet Analysis",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Wireshark Documentation",
                        url: "https://www.wireshark.org/docs/",
                    },
                    LearningResource {
                        name: "Practical Packet Analysis",
                        url: "https://nostarch.com/packetanalysis3",
                    },
                ],
            },
            SkillRequirement {
                name: "Vulnerability Scanners",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Nessus Essentials",
                        url: "https://www.tenable.com/products/nessus/nessus-essentials",
                    },
                    LearningResource {
                        name: "OWASP ZAP Getting Started",
                        url: "https://www.zaproxy.org/getting-started/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Security Awareness Communication",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "SANS Security Awareness",
                        url: "https://www.sans.org/security-awareness-training/",
                    },
                    LearningResource {
                        name: "Google Technical Writing",
                        url: "https://developers.google.com/tech-writing",
                    },
                ],
            },
            SkillRequirement {
                name: "Analytical Thinking",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "OverTheWire Wargames",
                        url: "https://overthewire.org/wargames/",
                    },
                    LearningResource {
                        name: "Hack The Box",
                        url: "https://www.hackthebox.com/",
                    },
                ],
            },
            SkillRequirement {
                name: "Threat Landscape Awareness",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Krebs on Security",
                        url: "https://krebsonsecurity.com/",
                    },
                    LearningResource {
                        name: "Dark Reading",
                        url: "https://www.darkreading.com/",
                    },
                ],
            },
        ],
    },
];

static UI_UX_DESIGN: &[SkillCategory] = &[
    SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "User Research",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "User Research Course",
                        url: "https://www.coursera.org/learn/user-research",
                    },
                    LearningResource {
                        name: "Nielsen Norman Group Articles",
                        url: "https://www.nngroup.com/articles/",
                    },
                ],
            },
            SkillRequirement {
                name: "Wireframing & Prototyping",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Google UX Design Certificate",
                        url: "https://www.coursera.org/professional-certificates/google-ux-design",
                    },
                    LearningResource {
                        name: "Figma Prototyping Guide",
                        url: "https://help.figma.com/hc/en-us/sections/4405269443991-Prototyping",
                    },
                ],
            },
            SkillRequirement {
                name: "Visual Design Principles",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Refactoring UI",
                        url: "https://www.refactoringui.com/",
                    },
                    LearningResource {
                        name: "Design Principles",
                        url: "https://principles.design/",
                    },
                ],
            },
            SkillRequirement {
                name: "Interaction Design",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Interaction Design Foundation",
                        url: "https://www.interaction-design.org/",
                    },
                    LearningResource {
                        name: "Laws of UX",
                        url: "https://lawsofux.com/",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            SkillRequirement {
                name: "Figma",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Figma Learn",
                        url: "https://help.figma.com/hc/en-us",
                    },
                    LearningResource {
                        name: "Learn Figma Course",
                        url: "https://www.udemy.com/course/learn-figma/",
                    },
                ],
            },
            SkillRequirement {
                name: "Design Systems",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Design Systems Handbook",
                        url: "https://www.designbetter.co/design-systems-handbook",
                    },
                    LearningResource {
                        name: "Material Design Guidelines",
                        url: "https://m3.material.io/",
                    },
                ],
            },
            SkillRequirement {
                name: "Usability Testing Tools",
                weight: 3,
                resources: &[
                    LearningResource {
                        name: "Maze Usability Guides",
                        url: "https://maze.co/guides/usability-testing/",
                    },
                    LearningResource {
                        name: "UserTesting Resources",
                        url: "https://www.usertesting.com/resources",
                    },
                ],
            },
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            SkillRequirement {
                name: "Empathy & User Advocacy",
                weight: 5,
                resources: &[
                    LearningResource {
                        name: "Design Thinking Course",
                        url: "https://www.coursera.org/learn/uva-darden-design-thinking-innovation",
                    },
                    LearningResource {
                        name: "IDEO Design Kit",
                        url: "https://www.designkit.org/",
                    },
                ],
            },
            SkillRequirement {
                name: "Presenting Design Decisions",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "Articulating Design Decisions",
                        url: "https://www.oreilly.com/library/view/articulating-design-decisions/9781491921555/",
                    },
                    LearningResource {
                        name: "Introduction to Public Speaking",
                        url: "https://www.coursera.org/learn/public-speaking",
                    },
                ],
            },
            SkillRequirement {
                name: "Design Critique",
                weight: 4,
                resources: &[
                    LearningResource {
                        name: "NN/g on Design Critiques",
                        url: "https://www.nngroup.com/articles/design-critiques/",
                    },
                    LearningResource {
                        name: "Figma Best Practices",
                        url: "https://www.figma.com/best-practices/",
                    },
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_technical_path_has_a_matrix() {
        for path in CareerPath::technical() {
            assert!(skill_matrix(path).is_some(), "{path} has no skill matrix");
        }
    }

    #[test]
    fn test_non_technical_paths_have_no_matrix() {
        use crate::catalog::CareerCategory;
        for path in CareerPath::ALL {
            if path.category() == CareerCategory::NonTechnical {
                assert!(skill_matrix(path).is_none(), "{path} should have no matrix");
            }
        }
    }

    #[test]
    fn test_matrices_carry_three_categories_in_fixed_order() {
        for path in CareerPath::technical() {
            let matrix = skill_matrix(path).unwrap();
            let names: Vec<&str> = matrix.iter().map(|c| c.name).collect();
            assert_eq!(names, ["Technical", "Tools", "Soft Skills"], "{path}");
        }
    }

    #[test]
    fn test_weights_stay_within_rating_scale() {
        for path in CareerPath::technical() {
            for category in skill_matrix(path).unwrap() {
                for skill in category.skills {
                    assert!(
                        (1..=5).contains(&skill.weight),
                        "{path} / {} has weight {}",
                        skill.name,
                        skill.weight
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_skill_links_resources() {
        for path in CareerPath::technical() {
            for category in skill_matrix(path).unwrap() {
                for skill in category.skills {
                    assert!(!skill.resources.is_empty(), "{} has no resources", skill.name);
                    for resource in skill.resources {
                        assert!(resource.url.starts_with("https://"), "{}", resource.url);
                    }
                }
            }
        }
    }

    #[test]
    fn test_skill_names_unique_within_category() {
        for path in CareerPath::technical() {
            for category in skill_matrix(path).unwrap() {
                let mut names: Vec<&str> = category.skills.iter().map(|s| s.name).collect();
                names.sort();
                let before = names.len();
                names.dedup();
                assert_eq!(names.len(), before, "{path} / {}", category.name);
            }
        }
    }
}
