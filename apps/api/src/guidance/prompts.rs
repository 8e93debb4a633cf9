// All LLM prompt constants for the guidance engines.
// Reuses cross-cutting fragments from llm_client::prompts.
// Profile and preference blocks are rendered in fixed question order so
// prompts are deterministic for a given session.

use std::collections::HashMap;

use crate::llm_client::prompts::CAREER_SCOPE_INSTRUCTION;
use crate::models::session::{PREFERENCE_QUESTIONS, PROFILE_QUESTIONS};

/// Career recommendations prompt template.
/// Replace: {scope_instruction}, {user_profile}, {preferences}
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"As an AI career advisor, analyze the following user profile and preferences, and recommend the most suitable technology career paths.

{scope_instruction}

USER PROFILE:
{user_profile}

CAREER PREFERENCES:
{preferences}

Recommend 3 to 5 career paths, best match first. Return a JSON object with this EXACT schema (no extra fields):
{
  "recommended_paths": [
    {
      "career_path": "Data Science",
      "match_score": "85%",
      "reasoning": "Why this path fits the profile and preferences",
      "key_skills_required": ["Python", "Statistics", "Machine Learning"],
      "market_outlook": "One-sentence demand and growth summary"
    }
  ]
}"#;

/// Learning roadmap prompt template.
/// Replace: {career_path}, {user_profile}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"As an AI career advisor, create a detailed, personalized learning roadmap for the career path: {career_path}

Tailor the roadmap to this user profile:
{user_profile}

Order every list from beginner to advanced. Return a JSON object with this EXACT schema (no extra fields):
{
  "roadmap": {
    "fundamentals": ["topic", "topic"],
    "intermediate_skills": ["topic", "topic"],
    "advanced_topics": ["topic", "topic"],
    "projects": ["hands-on project", "hands-on project"],
    "certifications": ["relevant certification"],
    "estimated_timeline": "X months"
  }
}"#;

/// Consultation prompt template — free text, not JSON.
/// Replace: {user_profile}, {question}
pub const CONSULTATION_PROMPT_TEMPLATE: &str = r#"As an AI career advisor, answer the user's question using their profile as context.

USER PROFILE:
{user_profile}

QUESTION:
{question}

Structure the answer as:
1. Direct answer to the question
2. Related insights and recommendations
3. Actionable next steps
4. Relevant resources or references

Keep it concise and specific to this user."#;

/// Skills gap analysis prompt template.
/// Replace: {career_path}, {user_profile}
pub const SKILLS_GAP_PROMPT_TEMPLATE: &str = r#"As an AI career advisor, analyze the skills gap between this user's current abilities and the requirements of the career path: {career_path}

USER PROFILE:
{user_profile}

Return a JSON object with this EXACT schema (no extra fields):
{
  "current_skills": ["skill the user already has"],
  "required_skills": ["skill the career path demands"],
  "skills_to_develop": [
    {
      "skill": "skill name",
      "priority": "high",
      "recommended_resources": ["course or resource name"]
    }
  ],
  "estimated_time_to_bridge_gap": "X months"
}

"priority" must be exactly one of: "high", "medium", "low"."#;

/// Reflection questions prompt template.
/// Replace: {user_profile}
pub const REFLECTION_QUESTIONS_PROMPT_TEMPLATE: &str = r#"As an AI career advisor, generate exactly 5 short self-reflection questions personalized to this user's profile. The questions should help them think through career direction, skills, and goals before a consultation.

USER PROFILE:
{user_profile}

Return a JSON object with this EXACT schema (no extra fields):
{
  "question1": "...",
  "question2": "...",
  "question3": "...",
  "question4": "...",
  "question5": "..."
}"#;

/// Renders profile answers as "question: answer" lines in question order.
/// Unanswered questions are omitted; an empty profile renders a placeholder
/// so templates never embed a blank block.
fn format_profile(user_data: &HashMap<String, String>) -> String {
    let lines: Vec<String> = PROFILE_QUESTIONS
        .iter()
        .filter_map(|(key, question)| {
            user_data
                .get(*key)
                .map(|answer| format!("- {question} {answer}"))
        })
        .collect();
    if lines.is_empty() {
        "- (no profile data provided)".to_string()
    } else {
        lines.join("\n")
    }
}

/// Renders assessment responses as "question: answer" lines in question order.
fn format_preferences(preferences: &HashMap<String, String>) -> String {
    let lines: Vec<String> = PREFERENCE_QUESTIONS
        .iter()
        .filter_map(|(key, question)| {
            preferences
                .get(*key)
                .map(|answer| format!("- {question} {answer}"))
        })
        .collect();
    if lines.is_empty() {
        "- (no preferences provided)".to_string()
    } else {
        lines.join("\n")
    }
}

pub fn build_recommendations_prompt(
    user_data: &HashMap<String, String>,
    preferences: &HashMap<String, String>,
) -> String {
    RECOMMENDATIONS_PROMPT_TEMPLATE
        .replace("{scope_instruction}", CAREER_SCOPE_INSTRUCTION)
        .replace("{user_profile}", &format_profile(user_data))
        .replace("{preferences}", &format_preferences(preferences))
}

pub fn build_roadmap_prompt(career_path: &str, user_data: &HashMap<String, String>) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("{career_path}", career_path)
        .replace("{user_profile}", &format_profile(user_data))
}

pub fn build_consultation_prompt(question: &str, user_data: &HashMap<String, String>) -> String {
    CONSULTATION_PROMPT_TEMPLATE
        .replace("{user_profile}", &format_profile(user_data))
        .replace("{question}", question)
}

pub fn build_skills_gap_prompt(career_path: &str, user_data: &HashMap<String, String>) -> String {
    SKILLS_GAP_PROMPT_TEMPLATE
        .replace("{career_path}", career_path)
        .replace("{user_profile}", &format_profile(user_data))
}

pub fn build_reflection_questions_prompt(user_data: &HashMap<String, String>) -> String {
    REFLECTION_QUESTIONS_PROMPT_TEMPLATE.replace("{user_profile}", &format_profile(user_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("FullName".to_string(), "Jane Doe".to_string());
        map.insert("TechnicalBackground".to_string(), "3 years backend".to_string());
        map
    }

    #[test]
    fn test_profile_renders_in_question_order() {
        let rendered = format_profile(&profile());
        let name_pos = rendered.find("Jane Doe").unwrap();
        let background_pos = rendered.find("3 years backend").unwrap();
        assert!(name_pos < background_pos);
        assert!(rendered.contains("What is your full name?"));
    }

    #[test]
    fn test_empty_profile_renders_placeholder() {
        let rendered = format_profile(&HashMap::new());
        assert_eq!(rendered, "- (no profile data provided)");
    }

    #[test]
    fn test_recommendations_prompt_embeds_inputs_and_schema() {
        let mut preferences = HashMap::new();
        preferences.insert("interests".to_string(), "data analysis".to_string());
        let prompt = build_recommendations_prompt(&profile(), &preferences);
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("data analysis"));
        assert!(prompt.contains("\"recommended_paths\""));
        assert!(prompt.contains("\"match_score\""));
        assert!(!prompt.contains("{user_profile}"));
        assert!(!prompt.contains("{scope_instruction}"));
    }

    #[test]
    fn test_roadmap_prompt_embeds_career_path() {
        let prompt = build_roadmap_prompt("Data Science", &profile());
        assert!(prompt.contains("career path: Data Science"));
        assert!(prompt.contains("\"estimated_timeline\""));
        assert!(!prompt.contains("{career_path}"));
    }

    #[test]
    fn test_consultation_prompt_embeds_question() {
        let prompt = build_consultation_prompt("Should I learn Rust?", &profile());
        assert!(prompt.contains("Should I learn Rust?"));
        assert!(prompt.contains("Actionable next steps"));
    }

    #[test]
    fn test_skills_gap_prompt_embeds_schema() {
        let prompt = build_skills_gap_prompt("Cybersecurity", &profile());
        assert!(prompt.contains("Cybersecurity"));
        assert!(prompt.contains("\"skills_to_develop\""));
        assert!(prompt.contains("\"estimated_time_to_bridge_gap\""));
    }

    #[test]
    fn test_reflection_questions_prompt_names_five_keys() {
        let prompt = build_reflection_questions_prompt(&profile());
        for key in ["question1", "question2", "question3", "question4", "question5"] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }
}
