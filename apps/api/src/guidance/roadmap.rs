//! Learning roadmap engine.
//!
//! The static half comes from the catalog: journey stages plus curated stage
//! content, with an explicit flag when the generic default substitutes for an
//! uncovered path. The personalized half is one model call that degrades to a
//! roadmap assembled from the same catalog content.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::roadmaps::{
    learning_path_or_default, Course, PracticePlatform, StageInfo, COMMUNITY_RESOURCES,
    JOURNEY_STAGES, PRACTICE_PLATFORMS,
};
use crate::catalog::CareerPath;
use crate::guidance::prompts::build_roadmap_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::GeminiClient;

/// Sum of the three content-bearing stage durations.
const FALLBACK_TIMELINE: &str = "9-13 months";

/// Model-personalized roadmap — the JSON shape the roadmap prompt requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedRoadmap {
    #[serde(default)]
    pub fundamentals: Vec<String>,
    #[serde(default)]
    pub intermediate_skills: Vec<String>,
    #[serde(default)]
    pub advanced_topics: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub estimated_timeline: String,
}

impl PersonalizedRoadmap {
    /// True when the model returned the right shape but no content.
    pub fn is_empty(&self) -> bool {
        self.fundamentals.is_empty()
            && self.intermediate_skills.is_empty()
            && self.advanced_topics.is_empty()
            && self.projects.is_empty()
            && self.certifications.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RoadmapEnvelope {
    roadmap: PersonalizedRoadmap,
}

/// One stage of the curated curriculum as shown on the page.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapStageView {
    pub stage: &'static str,
    pub topics: &'static [&'static str],
    pub courses: &'static [Course],
    pub projects: &'static [&'static str],
}

/// The deterministic half of the roadmap page.
#[derive(Debug, Clone, Serialize)]
pub struct StaticRoadmap {
    pub career_path: String,
    /// True when curated content for the requested path does not exist and
    /// the Software Development curriculum is shown instead.
    pub generic: bool,
    pub note: Option<String>,
    pub journey: &'static [StageInfo],
    pub curriculum: Vec<RoadmapStageView>,
    pub communities: &'static [&'static str],
    pub practice_platforms: &'static [PracticePlatform],
}

pub fn static_roadmap(path: CareerPath) -> StaticRoadmap {
    let (content, generic) = learning_path_or_default(path);
    let curriculum = content
        .stages()
        .into_iter()
        .map(|(stage, stage_content)| RoadmapStageView {
            stage,
            topics: stage_content.topics,
            courses: stage_content.courses,
            projects: stage_content.projects,
        })
        .collect();

    StaticRoadmap {
        career_path: path.name().to_string(),
        generic,
        note: generic.then(|| {
            format!(
                "Curated stage content for {} is not available yet; showing the \
                 Software Development curriculum as a starting point.",
                path.name()
            )
        }),
        journey: JOURNEY_STAGES,
        curriculum,
        communities: COMMUNITY_RESOURCES,
        practice_platforms: PRACTICE_PLATFORMS,
    }
}

/// Calls the model for a personalized roadmap. Returns the roadmap plus
/// whether the deterministic fallback was substituted.
pub async fn personalized_roadmap(
    llm: &GeminiClient,
    path: CareerPath,
    user_data: &HashMap<String, String>,
) -> (PersonalizedRoadmap, bool) {
    let prompt = build_roadmap_prompt(path.name(), user_data);

    match llm
        .call_json::<RoadmapEnvelope>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(envelope) if !envelope.roadmap.is_empty() => (envelope.roadmap, false),
        Ok(_) => {
            warn!(
                "Roadmap call for {} returned an empty roadmap, using curated content",
                path.name()
            );
            (fallback_roadmap(path), true)
        }
        Err(e) => {
            warn!(
                "Roadmap call for {} failed ({e}), using curated content",
                path.name()
            );
            (fallback_roadmap(path), true)
        }
    }
}

/// Deterministic roadmap assembled from curated catalog content. Specialized
/// stage courses stand in for certifications.
pub fn fallback_roadmap(path: CareerPath) -> PersonalizedRoadmap {
    let (content, _) = learning_path_or_default(path);

    PersonalizedRoadmap {
        fundamentals: owned_list(content.fundamentals.topics),
        intermediate_skills: owned_list(content.core_skills.topics),
        advanced_topics: owned_list(content.specialized.topics),
        projects: content
            .stages()
            .into_iter()
            .flat_map(|(_, stage)| stage.projects.iter().map(|p| p.to_string()))
            .collect(),
        certifications: content
            .specialized
            .courses
            .iter()
            .map(|c| c.name.to_string())
            .collect(),
        estimated_timeline: FALLBACK_TIMELINE.to_string(),
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_roadmap_for_curated_path_is_not_generic() {
        let roadmap = static_roadmap(CareerPath::DataScience);
        assert_eq!(roadmap.career_path, "Data Science");
        assert!(!roadmap.generic);
        assert!(roadmap.note.is_none());
        assert_eq!(roadmap.curriculum.len(), 3);
        assert_eq!(roadmap.curriculum[0].stage, "fundamentals");
        assert_eq!(roadmap.journey.len(), 5);
        assert!(!roadmap.curriculum[0].topics.is_empty());
    }

    #[test]
    fn test_static_roadmap_for_uncovered_path_flags_substitution() {
        let roadmap = static_roadmap(CareerPath::Cybersecurity);
        assert!(roadmap.generic);
        let note = roadmap.note.unwrap();
        assert!(note.contains("Cybersecurity"));
        assert!(note.contains("Software Development"));
        // The curriculum shown is the Software Development one
        let sd = static_roadmap(CareerPath::SoftwareDevelopment);
        assert_eq!(roadmap.curriculum[0].topics, sd.curriculum[0].topics);
    }

    #[test]
    fn test_fallback_roadmap_is_never_empty() {
        for path in CareerPath::ALL {
            let roadmap = fallback_roadmap(path);
            assert!(!roadmap.is_empty(), "empty fallback for {path}");
            assert!(!roadmap.fundamentals.is_empty());
            assert!(!roadmap.projects.is_empty());
            assert_eq!(roadmap.estimated_timeline, FALLBACK_TIMELINE);
        }
    }

    #[test]
    fn test_roadmap_envelope_parses_the_documented_shape() {
        let raw = r#"{
            "roadmap": {
                "fundamentals": ["Programming basics"],
                "intermediate_skills": ["Web frameworks"],
                "advanced_topics": ["Distributed systems"],
                "projects": ["Build an API"],
                "certifications": ["AWS Certified Developer"],
                "estimated_timeline": "12 months"
            }
        }"#;
        let envelope: RoadmapEnvelope = serde_json::from_str(raw).unwrap();
        assert!(!envelope.roadmap.is_empty());
        assert_eq!(envelope.roadmap.estimated_timeline, "12 months");
    }

    #[test]
    fn test_empty_model_roadmap_detected() {
        let envelope: RoadmapEnvelope = serde_json::from_str(r#"{"roadmap": {}}"#).unwrap();
        assert!(envelope.roadmap.is_empty());
    }
}
