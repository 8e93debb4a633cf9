//! Career recommendation engine.
//!
//! One model call per session produces the recommendation list; anything the
//! model gets wrong (transport failure, bad JSON, unknown path names)
//! degrades to the full catalog list. The page always has content.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{CareerCategory, CareerPath};
use crate::guidance::prompts::build_recommendations_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::GeminiClient;

/// One path recommended by the model. Only `career_path` feeds session
/// state; the remaining fields make the schema strict enough to parse
/// reliably while tolerating sparse model output.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendedPath {
    pub career_path: String,
    #[serde(default)]
    pub match_score: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub key_skills_required: Vec<String>,
    #[serde(default)]
    pub market_outlook: String,
}

#[derive(Debug, Deserialize)]
struct RecommendationsEnvelope {
    recommended_paths: Vec<RecommendedPath>,
}

/// Generates the recommendation list for a session: build prompt, call the
/// model, normalize to known catalog paths. Never errors.
pub async fn recommend_paths(
    llm: &GeminiClient,
    user_data: &HashMap<String, String>,
    preferences: &HashMap<String, String>,
) -> Vec<String> {
    let prompt = build_recommendations_prompt(user_data, preferences);

    match llm
        .call_json::<RecommendationsEnvelope>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(envelope) => {
            let names = normalize_recommendations(&envelope.recommended_paths);
            if names.is_empty() {
                warn!("LLM recommendations contained no known career paths, using catalog list");
                fallback_recommendations()
            } else {
                names
            }
        }
        Err(e) => {
            warn!("Career recommendation call failed ({e}), using catalog list");
            fallback_recommendations()
        }
    }
}

/// Keeps model-recommended names that map to known catalog paths, in model
/// order, deduplicated and with canonical spelling.
fn normalize_recommendations(paths: &[RecommendedPath]) -> Vec<String> {
    let mut known: Vec<CareerPath> = Vec::new();
    for recommended in paths {
        if let Some(path) = CareerPath::parse(&recommended.career_path) {
            if !known.contains(&path) {
                known.push(path);
            }
        } else {
            warn!(
                "Dropping unknown recommended career path: {:?}",
                recommended.career_path
            );
        }
    }
    known.into_iter().map(|p| p.name().to_string()).collect()
}

/// The deterministic recommendation list: every known career path, technical
/// paths first.
pub fn fallback_recommendations() -> Vec<String> {
    CareerPath::ALL.iter().map(|p| p.name().to_string()).collect()
}

/// Splits a recommendation list by catalog category for the tabbed view.
pub fn filter_by_category(names: &[String], category: CareerCategory) -> Vec<String> {
    names
        .iter()
        .filter(|name| CareerPath::parse(name).map(CareerPath::category) == Some(category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommended(name: &str) -> RecommendedPath {
        RecommendedPath {
            career_path: name.to_string(),
            match_score: "90%".to_string(),
            reasoning: String::new(),
            key_skills_required: vec![],
            market_outlook: String::new(),
        }
    }

    #[test]
    fn test_normalize_keeps_known_paths_in_model_order() {
        let paths = vec![
            recommended("data science"),
            recommended("Software Development"),
        ];
        let names = normalize_recommendations(&paths);
        assert_eq!(names, vec!["Data Science", "Software Development"]);
    }

    #[test]
    fn test_normalize_drops_unknown_and_duplicate_paths() {
        let paths = vec![
            recommended("Data Science"),
            recommended("Prompt Whisperer"),
            recommended("DATA SCIENCE"),
        ];
        let names = normalize_recommendations(&paths);
        assert_eq!(names, vec!["Data Science"]);
    }

    #[test]
    fn test_normalize_all_unknown_yields_empty() {
        let paths = vec![recommended("Underwater Basket Weaving")];
        assert!(normalize_recommendations(&paths).is_empty());
    }

    #[test]
    fn test_fallback_covers_the_whole_catalog() {
        let names = fallback_recommendations();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "Software Development");
        assert!(names.contains(&"IT Sales & Business Development".to_string()));
    }

    #[test]
    fn test_filter_by_category_splits_the_fallback_list() {
        let names = fallback_recommendations();
        let technical = filter_by_category(&names, CareerCategory::Technical);
        let non_technical = filter_by_category(&names, CareerCategory::NonTechnical);
        assert_eq!(technical.len(), 7);
        assert_eq!(non_technical.len(), 6);
        assert!(technical.contains(&"Cybersecurity".to_string()));
        assert!(non_technical.contains(&"Product Management".to_string()));
    }

    #[test]
    fn test_filter_by_category_drops_unparseable_names() {
        let names = vec!["Data Science".to_string(), "Astronaut".to_string()];
        let technical = filter_by_category(&names, CareerCategory::Technical);
        assert_eq!(technical, vec!["Data Science"]);
    }
}
