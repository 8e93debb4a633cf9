//! Skills gap analysis — pluggable, trait-based analyzer comparing a user's
//! self-ratings against a career path's skill matrix.
//!
//! Default: `WeightedGapAnalyzer` (pure-Rust, deterministic, fully testable).
//! Optional: `LlmGapAnalyzer` layers a model-written narrative onto the same
//! deterministic core; any model failure degrades back to the core report.
//!
//! `AppState` holds an `Arc<dyn GapAnalyzer>`, swapped at startup via config.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::skills::{skill_matrix, LearningResource, SkillCategory};
use crate::catalog::CareerPath;
use crate::errors::AppError;
use crate::guidance::prompts::build_skills_gap_prompt;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::GeminiClient;
use crate::models::session::Session;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across analyzer backends)
// ────────────────────────────────────────────────────────────────────────────

/// One skill the user still needs to close, with study material attached.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapEntry {
    pub category: &'static str,
    pub skill: &'static str,
    pub rating: u8,
    pub required: u8,
    /// `max(0, required - rating)`
    pub gap: u8,
    /// `gap * required` — 0 to 25; bigger gaps in heavier skills first.
    pub priority: u8,
    pub resources: &'static [LearningResource],
}

/// Rating vs requirement for one skill, radar-chart shaped.
#[derive(Debug, Clone, Serialize)]
pub struct RadarPoint {
    pub skill: &'static str,
    pub rating: u8,
    pub required: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRadar {
    pub category: &'static str,
    pub skills: Vec<RadarPoint>,
}

/// Full gap report returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub career_path: String,
    pub break_duration_years: f64,
    /// Skills with `gap > 0`, priority descending, matrix order among ties.
    pub learning_path: Vec<SkillGapEntry>,
    pub radar: Vec<CategoryRadar>,
    pub total_skills: usize,
    /// Count of skills where `rating >= required` — each skill measured
    /// against its own weight.
    pub proficient_skills: usize,
    pub progress_percent: f32,
    pub analyzer_backend: String, // "weighted" | "llm" — for transparency
    pub narrative: Option<GapNarrative>,
}

/// Model-written narrative layered onto the weighted report by the LLM
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapNarrative {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub skills_to_develop: Vec<SkillToDevelop>,
    #[serde(default)]
    pub estimated_time_to_bridge_gap: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToDevelop {
    pub skill: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub recommended_resources: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The gap analyzer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn GapAnalyzer>`.
#[async_trait]
pub trait GapAnalyzer: Send + Sync {
    async fn analyze(&self, session: &Session, path: CareerPath) -> Result<GapReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedGapAnalyzer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust weighted analyzer. Fast, deterministic, no model call.
pub struct WeightedGapAnalyzer;

#[async_trait]
impl GapAnalyzer for WeightedGapAnalyzer {
    async fn analyze(&self, session: &Session, path: CareerPath) -> Result<GapReport, AppError> {
        let matrix = require_matrix(path)?;
        Ok(compute_gap_report(
            path,
            matrix,
            &session.skills_gap,
            session.break_duration,
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmGapAnalyzer — weighted core plus model narrative
// ────────────────────────────────────────────────────────────────────────────

/// Same deterministic core as [`WeightedGapAnalyzer`], plus a model-generated
/// narrative (current/required skills, priorities, bridging timeline).
pub struct LlmGapAnalyzer(pub GeminiClient);

#[async_trait]
impl GapAnalyzer for LlmGapAnalyzer {
    async fn analyze(&self, session: &Session, path: CareerPath) -> Result<GapReport, AppError> {
        let matrix = require_matrix(path)?;
        let mut report = compute_gap_report(
            path,
            matrix,
            &session.skills_gap,
            session.break_duration,
        );
        report.analyzer_backend = "llm".to_string();

        let prompt = build_skills_gap_prompt(path.name(), &session.user_data);
        match self
            .0
            .call_json::<GapNarrative>(&prompt, JSON_ONLY_SYSTEM)
            .await
        {
            Ok(narrative) => report.narrative = Some(narrative),
            Err(e) => warn!(
                "Skills gap narrative call for {} failed ({e}), returning weighted report only",
                path.name()
            ),
        }

        Ok(report)
    }
}

pub(crate) fn require_matrix(path: CareerPath) -> Result<&'static [SkillCategory], AppError> {
    skill_matrix(path).ok_or_else(|| {
        AppError::Validation(format!(
            "No skills matrix for {}: gap analysis covers technical paths only",
            path.name()
        ))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Core weighted computation
// ────────────────────────────────────────────────────────────────────────────

/// Computes the deterministic gap report for one career path.
pub fn compute_gap_report(
    path: CareerPath,
    matrix: &'static [SkillCategory],
    ratings: &HashMap<String, HashMap<String, u8>>,
    break_duration: f64,
) -> GapReport {
    let mut learning_path = Vec::new();
    let mut radar = Vec::new();
    let mut total_skills = 0;
    let mut proficient_skills = 0;

    for category in matrix {
        let mut points = Vec::new();
        for skill in category.skills {
            let rating = ratings
                .get(category.name)
                .and_then(|skills| skills.get(skill.name))
                .copied()
                .unwrap_or(0);
            let gap = skill.weight.saturating_sub(rating);

            total_skills += 1;
            if rating >= skill.weight {
                proficient_skills += 1;
            }

            points.push(RadarPoint {
                skill: skill.name,
                rating,
                required: skill.weight,
            });

            if gap > 0 {
                learning_path.push(SkillGapEntry {
                    category: category.name,
                    skill: skill.name,
                    rating,
                    required: skill.weight,
                    gap,
                    priority: gap * skill.weight,
                    resources: skill.resources,
                });
            }
        }
        radar.push(CategoryRadar {
            category: category.name,
            skills: points,
        });
    }

    // sort_by is stable, so equal priorities keep matrix order
    learning_path.sort_by(|a, b| b.priority.cmp(&a.priority));

    let progress_percent = if total_skills == 0 {
        0.0
    } else {
        (proficient_skills as f32 / total_skills as f32) * 100.0
    };

    GapReport {
        career_path: path.name().to_string(),
        break_duration_years: break_duration,
        learning_path,
        radar,
        total_skills,
        proficient_skills,
        progress_percent,
        analyzer_backend: "weighted".to_string(),
        narrative: None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::skills::SkillRequirement;

    static TWO_SKILL_MATRIX: &[SkillCategory] = &[SkillCategory {
        name: "Technical",
        skills: &[
            SkillRequirement {
                name: "A",
                weight: 3,
                resources: &[],
            },
            SkillRequirement {
                name: "B",
                weight: 5,
                resources: &[],
            },
        ],
    }];

    fn ratings(entries: &[(&str, &str, u8)]) -> HashMap<String, HashMap<String, u8>> {
        let mut map: HashMap<String, HashMap<String, u8>> = HashMap::new();
        for (category, skill, rating) in entries {
            map.entry(category.to_string())
                .or_default()
                .insert(skill.to_string(), *rating);
        }
        map
    }

    #[test]
    fn test_gap_ordering_puts_heavier_gaps_first() {
        // ratings {A:2, B:0}, weights {A:3, B:5}
        // gaps {A:1, B:5}, priorities {A:3, B:25} => order [B, A]
        let ratings = ratings(&[("Technical", "A", 2), ("Technical", "B", 0)]);
        let report = compute_gap_report(
            CareerPath::SoftwareDevelopment,
            TWO_SKILL_MATRIX,
            &ratings,
            0.0,
        );

        assert_eq!(report.learning_path.len(), 2);
        assert_eq!(report.learning_path[0].skill, "B");
        assert_eq!(report.learning_path[0].gap, 5);
        assert_eq!(report.learning_path[0].priority, 25);
        assert_eq!(report.learning_path[1].skill, "A");
        assert_eq!(report.learning_path[1].gap, 1);
        assert_eq!(report.learning_path[1].priority, 3);
    }

    #[test]
    fn test_rating_above_weight_is_no_gap() {
        let ratings = ratings(&[("Technical", "A", 5), ("Technical", "B", 5)]);
        let report = compute_gap_report(
            CareerPath::SoftwareDevelopment,
            TWO_SKILL_MATRIX,
            &ratings,
            0.0,
        );
        assert!(report.learning_path.is_empty());
        assert_eq!(report.proficient_skills, 2);
        assert_eq!(report.progress_percent, 100.0);
    }

    #[test]
    fn test_progress_measures_each_skill_against_its_own_weight() {
        // A rated exactly at its weight counts proficient; B below does not
        let ratings = ratings(&[("Technical", "A", 3), ("Technical", "B", 4)]);
        let report = compute_gap_report(
            CareerPath::SoftwareDevelopment,
            TWO_SKILL_MATRIX,
            &ratings,
            0.0,
        );
        assert_eq!(report.proficient_skills, 1);
        assert_eq!(report.progress_percent, 50.0);
        assert_eq!(report.learning_path.len(), 1);
        assert_eq!(report.learning_path[0].skill, "B");
    }

    #[test]
    fn test_cybersecurity_with_no_ratings_gaps_equal_weights() {
        let matrix = skill_matrix(CareerPath::Cybersecurity).unwrap();
        let report = compute_gap_report(CareerPath::Cybersecurity, matrix, &HashMap::new(), 0.0);

        assert_eq!(report.progress_percent, 0.0);
        assert_eq!(report.proficient_skills, 0);
        assert_eq!(report.learning_path.len(), report.total_skills);
        for entry in &report.learning_path {
            assert_eq!(entry.rating, 0);
            assert_eq!(entry.gap, entry.required);
            assert_eq!(entry.priority, entry.required * entry.required);
        }
    }

    #[test]
    fn test_radar_covers_every_skill_in_matrix_order() {
        let report = compute_gap_report(
            CareerPath::SoftwareDevelopment,
            TWO_SKILL_MATRIX,
            &HashMap::new(),
            2.5,
        );
        assert_eq!(report.radar.len(), 1);
        assert_eq!(report.radar[0].category, "Technical");
        assert_eq!(report.radar[0].skills.len(), 2);
        assert_eq!(report.radar[0].skills[0].skill, "A");
        assert_eq!(report.break_duration_years, 2.5);
    }

    #[test]
    fn test_gap_entries_keep_their_learning_resources() {
        let matrix = skill_matrix(CareerPath::DataScience).unwrap();
        let report = compute_gap_report(CareerPath::DataScience, matrix, &HashMap::new(), 0.0);
        assert!(report
            .learning_path
            .iter()
            .all(|entry| !entry.resources.is_empty()));
    }

    #[tokio::test]
    async fn test_weighted_analyzer_reports_backend() {
        let session = Session::new();
        let report = WeightedGapAnalyzer
            .analyze(&session, CareerPath::Cybersecurity)
            .await
            .unwrap();
        assert_eq!(report.analyzer_backend, "weighted");
        assert!(report.narrative.is_none());
    }

    #[tokio::test]
    async fn test_non_technical_path_is_a_validation_error() {
        let session = Session::new();
        let result = WeightedGapAnalyzer
            .analyze(&session, CareerPath::ProductManagement)
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_gap_narrative_parses_the_documented_shape() {
        let raw = r#"{
            "current_skills": ["Python"],
            "required_skills": ["Python", "Threat Modeling"],
            "skills_to_develop": [
                {"skill": "Threat Modeling", "priority": "high", "recommended_resources": ["OWASP guides"]}
            ],
            "estimated_time_to_bridge_gap": "6 months"
        }"#;
        let narrative: GapNarrative = serde_json::from_str(raw).unwrap();
        assert_eq!(narrative.skills_to_develop.len(), 1);
        assert_eq!(narrative.skills_to_develop[0].priority, "high");
    }
}
