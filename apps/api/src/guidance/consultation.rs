//! Live consultation engine.
//!
//! Three tiers, tried in order: the model (multi-turn, carrying the session's
//! chat handle), keyword-bucketed canned responses, and a generic
//! clarification request. Missing profile data short-circuits to a fixed
//! profile reminder before any model call. The engine never errors — the one
//! outgoing invariant is a non-empty reply.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::flow::Page;
use crate::guidance::prompts::{build_consultation_prompt, build_reflection_questions_prompt};
use crate::llm_client::prompts::{ADVISOR_SYSTEM, JSON_ONLY_SYSTEM};
use crate::llm_client::{GeminiClient, WireTurn};
use crate::models::session::{ChatHandle, ChatRole, ChatTurn};

pub const PROFILE_GATE_RESPONSE: &str = "Please complete your profile setup first to get \
    personalized career advice. This will help me provide more relevant guidance based on \
    your background and interests.";

pub const CONSULTATION_APOLOGY: &str =
    "I apologize, but I encountered an error. Please try rephrasing your question.";

const CANNED_CAREER: &str = "Based on current market trends, there are many promising career \
    paths in technology. Consider exploring roles in Software Development, Data Science, or \
    Cybersecurity. Each of these fields offers strong growth potential and competitive \
    salaries. Would you like to learn more about any specific career path?";

const CANNED_SKILLS: &str = "To build a successful tech career, focus on both technical and \
    soft skills. Key technical skills include programming languages, data analysis, and cloud \
    computing. Important soft skills are problem-solving, communication, and adaptability. \
    What specific skills are you interested in developing?";

const CANNED_SALARY: &str = "Salaries in tech careers vary by role, location, and experience. \
    Entry-level positions typically range from $50,000 to $80,000, while experienced \
    professionals can earn $100,000+. Would you like to see detailed salary information for \
    specific roles?";

const CANNED_CLARIFICATION: &str = "I understand you're interested in career guidance. Could \
    you please be more specific about what you'd like to know? For example, you can ask \
    about specific career paths, required skills, or salary expectations.";

/// Career-area mentions that light up the quick-action affordance.
const CAREER_MENTION_KEYWORDS: &[&str] = &[
    "software",
    "data",
    "machine learning",
    "devops",
    "analytics",
    "cybersecurity",
    "ui/ux",
];

/// Where a consultation reply came from — surfaced for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Model,
    Canned,
    Clarification,
    ProfileGate,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsultationOutcome {
    pub reply: String,
    pub source: ReplySource,
}

/// Answers one consultation question. The exchange is appended to the chat
/// handle only when the model produced the reply, so canned turns never
/// pollute model context.
pub async fn consult(
    llm: &GeminiClient,
    chat: &mut ChatHandle,
    user_data: &HashMap<String, String>,
    question: &str,
) -> ConsultationOutcome {
    let outcome = answer(llm, chat, user_data, question).await;

    if outcome.reply.trim().is_empty() {
        error!("Consultation engine produced an empty reply");
        return ConsultationOutcome {
            reply: CONSULTATION_APOLOGY.to_string(),
            source: ReplySource::Error,
        };
    }
    outcome
}

async fn answer(
    llm: &GeminiClient,
    chat: &mut ChatHandle,
    user_data: &HashMap<String, String>,
    question: &str,
) -> ConsultationOutcome {
    if user_data.is_empty() {
        return ConsultationOutcome {
            reply: PROFILE_GATE_RESPONSE.to_string(),
            source: ReplySource::ProfileGate,
        };
    }

    // Prior turns carry raw question/answer text; only the newest turn gets
    // the full prompt with profile context.
    let mut turns: Vec<WireTurn> = chat.turns.iter().map(wire_turn).collect();
    turns.push(WireTurn::user(build_consultation_prompt(
        question, user_data,
    )));

    match llm.chat(&turns, ADVISOR_SYSTEM).await {
        Ok(response) => match response.text() {
            Some(reply) if !reply.trim().is_empty() => {
                let reply = reply.trim().to_string();
                chat.record_exchange(question, reply.clone());
                ConsultationOutcome {
                    reply,
                    source: ReplySource::Model,
                }
            }
            _ => {
                warn!("Consultation call returned empty content, using keyword fallback");
                keyword_fallback(question)
            }
        },
        Err(e) => {
            warn!("Consultation call failed ({e}), using keyword fallback");
            keyword_fallback(question)
        }
    }
}

fn wire_turn(turn: &ChatTurn) -> WireTurn {
    match turn.role {
        ChatRole::User => WireTurn::user(turn.text.clone()),
        ChatRole::Model => WireTurn::model(turn.text.clone()),
    }
}

/// Tiers 2 and 3: canned responses bucketed by question keywords, generic
/// clarification when nothing matches. Bucket order is fixed — career before
/// skills before salary.
pub fn keyword_fallback(question: &str) -> ConsultationOutcome {
    let lower = question.to_lowercase();

    let (reply, source) = if lower.contains("career") || lower.contains("job") {
        (CANNED_CAREER, ReplySource::Canned)
    } else if lower.contains("skill") || lower.contains("learn") {
        (CANNED_SKILLS, ReplySource::Canned)
    } else if lower.contains("salary") || lower.contains("pay") {
        (CANNED_SALARY, ReplySource::Canned)
    } else {
        (CANNED_CLARIFICATION, ReplySource::Clarification)
    };

    ConsultationOutcome {
        reply: reply.to_string(),
        source,
    }
}

/// Pages worth jumping to after an assistant reply that names a career area.
pub fn quick_actions(reply: &str) -> Vec<Page> {
    let lower = reply.to_lowercase();
    if CAREER_MENTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        vec![Page::CareerRecommendations, Page::LearningRoadmap]
    } else {
        Vec::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Suggested reflection questions
// ────────────────────────────────────────────────────────────────────────────

/// All five keys are required — a partial set falls back wholesale.
#[derive(Debug, Deserialize)]
struct ReflectionQuestions {
    question1: String,
    question2: String,
    question3: String,
    question4: String,
    question5: String,
}

impl ReflectionQuestions {
    fn into_list(self) -> Vec<String> {
        vec![
            self.question1,
            self.question2,
            self.question3,
            self.question4,
            self.question5,
        ]
    }

    fn is_complete(&self) -> bool {
        [
            &self.question1,
            &self.question2,
            &self.question3,
            &self.question4,
            &self.question5,
        ]
        .iter()
        .all(|q| !q.trim().is_empty())
    }
}

pub const FALLBACK_REFLECTION_QUESTIONS: [&str; 5] = [
    "Which part of your current work or studies do you enjoy the most?",
    "What kind of problems would you be excited to solve every day?",
    "Which skills do you most want to be known for in three years?",
    "Do you see yourself going deep as a specialist or broad as a generalist?",
    "What would make a new role feel like a clear step forward for you?",
];

/// Five personalized self-reflection questions for the consultation page.
/// Returns the questions plus whether the fixed fallback was substituted.
pub async fn suggested_questions(
    llm: &GeminiClient,
    user_data: &HashMap<String, String>,
) -> (Vec<String>, bool) {
    let prompt = build_reflection_questions_prompt(user_data);

    match llm
        .call_json::<ReflectionQuestions>(&prompt, JSON_ONLY_SYSTEM)
        .await
    {
        Ok(questions) if questions.is_complete() => (questions.into_list(), false),
        Ok(_) => {
            warn!("Reflection question call returned blank questions, using fixed set");
            (fallback_questions(), true)
        }
        Err(e) => {
            warn!("Reflection question call failed ({e}), using fixed set");
            (fallback_questions(), true)
        }
    }
}

pub fn fallback_questions() -> Vec<String> {
    FALLBACK_REFLECTION_QUESTIONS
        .iter()
        .map(|q| q.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_profile_short_circuits_before_any_model_call() {
        // Dummy key: the gate path must return without touching the network.
        let llm = GeminiClient::new("test-key".to_string());
        let mut chat = ChatHandle::new();
        let outcome = consult(&llm, &mut chat, &HashMap::new(), "What career suits me?").await;
        assert_eq!(outcome.source, ReplySource::ProfileGate);
        assert_eq!(outcome.reply, PROFILE_GATE_RESPONSE);
        assert!(chat.turns.is_empty());
    }

    #[test]
    fn test_keyword_fallback_buckets() {
        let career = keyword_fallback("Which job should I take?");
        assert_eq!(career.source, ReplySource::Canned);
        assert!(career.reply.contains("career paths in technology"));

        let skills = keyword_fallback("What should I learn next?");
        assert!(skills.reply.contains("technical and soft skills"));

        let salary = keyword_fallback("How much do these roles pay?");
        assert!(salary.reply.contains("$50,000"));
    }

    #[test]
    fn test_keyword_fallback_bucket_order_career_wins() {
        // "career" and "skill" both present — the career bucket is checked first
        let outcome = keyword_fallback("Which career needs which skill?");
        assert!(outcome.reply.contains("career paths in technology"));
    }

    #[test]
    fn test_keyword_fallback_clarification_when_nothing_matches() {
        let outcome = keyword_fallback("Tell me something interesting");
        assert_eq!(outcome.source, ReplySource::Clarification);
        assert!(outcome.reply.contains("more specific"));
    }

    #[test]
    fn test_canned_responses_are_never_empty() {
        for text in [
            CANNED_CAREER,
            CANNED_SKILLS,
            CANNED_SALARY,
            CANNED_CLARIFICATION,
            PROFILE_GATE_RESPONSE,
            CONSULTATION_APOLOGY,
        ] {
            assert!(!text.trim().is_empty());
        }
    }

    #[test]
    fn test_quick_actions_trigger_on_career_mentions() {
        let actions = quick_actions("Cybersecurity roles are growing fast.");
        assert_eq!(
            actions,
            vec![Page::CareerRecommendations, Page::LearningRoadmap]
        );
        assert!(quick_actions("Keep practicing and stay curious!").is_empty());
    }

    #[test]
    fn test_reflection_questions_require_all_five() {
        let raw = r#"{
            "question1": "a", "question2": "b", "question3": "c",
            "question4": "d", "question5": " "
        }"#;
        let questions: ReflectionQuestions = serde_json::from_str(raw).unwrap();
        assert!(!questions.is_complete());

        let missing = serde_json::from_str::<ReflectionQuestions>(r#"{"question1": "a"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_fallback_question_set_has_five_entries() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| !q.is_empty()));
    }
}
