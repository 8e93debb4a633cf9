// Session state for the guidance wizard. One Session is the complete,
// self-contained record of a user's journey: profile answers, assessment
// responses, recommendations, selected path, consultation transcript and
// skill self-ratings. All page views are projections of this struct.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flow::Page;

/// The profile questions, asked one at a time in this order.
/// Keys are stable identifiers; prompts are shown to the user verbatim.
pub const PROFILE_QUESTIONS: &[(&str, &str)] = &[
    ("FullName", "What is your full name?"),
    ("Age", "What is your age?"),
    (
        "Education",
        "What is your current education level and field of study?",
    ),
    (
        "TechnicalBackground",
        "What is your current technical background or experience?",
    ),
];

/// The assessment questions, presented as one form. All four must be
/// answered (non-blank) before recommendations can be generated.
pub const PREFERENCE_QUESTIONS: &[(&str, &str)] = &[
    (
        "interests",
        "What aspects of technology interest you the most? (e.g., coding, data analysis, system design)",
    ),
    (
        "work_style",
        "Do you prefer working independently or in teams?",
    ),
    ("learning_style", "How do you prefer to learn new skills?"),
    (
        "career_goals",
        "What are your long-term career goals in the tech industry?",
    ),
];

/// Skill self-ratings run 0 (none) to 5 (expert), same scale as the
/// required weights in the skills catalog.
pub const MAX_SKILL_RATING: u8 = 5;

/// Career breaks longer than this are clamped; the consultation engine
/// treats anything above as "extended break" anyway.
pub const MAX_BREAK_YEARS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationRole {
    User,
    Assistant,
}

/// One entry in the visible consultation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationTurn {
    pub role: ConsultationRole,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ConsultationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ConsultationRole::User,
            text: text.into(),
            at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ConsultationRole::Assistant,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Role names follow the model API convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One model-side conversation turn held by a [`ChatHandle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Opaque handle for the multi-turn consultation conversation. Pages never
/// introspect it; Start Fresh replaces it wholesale, clearing the transcript
/// alone leaves it intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHandle {
    pub id: Uuid,
    pub turns: Vec<ChatTurn>,
}

impl ChatHandle {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    /// Records a completed exchange so later turns carry the context.
    pub fn record_exchange(&mut self, question: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            text: question.into(),
        });
        self.turns.push(ChatTurn {
            role: ChatRole::Model,
            text: reply.into(),
        });
    }
}

impl Default for ChatHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub current_page: Page,
    pub chat: ChatHandle,
    /// Index of the next unanswered profile question.
    pub stage: usize,
    /// Profile answers keyed by [`PROFILE_QUESTIONS`] keys.
    pub user_data: HashMap<String, String>,
    /// Assessment responses keyed by [`PREFERENCE_QUESTIONS`] keys.
    pub career_preferences: HashMap<String, String>,
    /// Recommended path names in recommendation order. Empty until generated.
    pub career_path_recommendations: Vec<String>,
    pub selected_career_path: Option<String>,
    pub consultation_history: Vec<ConsultationTurn>,
    /// Skill self-ratings: category name -> skill name -> rating (0-5).
    pub skills_gap: HashMap<String, HashMap<String, u8>>,
    /// Career break length in years, for returning professionals.
    pub break_duration: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Fresh defaults under an existing id — this is the Start Fresh reset.
    /// A new [`ChatHandle`] is minted so the model conversation restarts too.
    pub fn with_id(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            current_page: Page::ProfileSetup,
            chat: ChatHandle::new(),
            stage: 0,
            user_data: HashMap::new(),
            career_preferences: HashMap::new(),
            career_path_recommendations: Vec::new(),
            selected_career_path: None,
            consultation_history: Vec::new(),
            skills_gap: HashMap::new(),
            break_duration: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn profile_complete(&self) -> bool {
        self.stage >= PROFILE_QUESTIONS.len()
    }

    /// The profile question currently awaiting an answer, if any.
    pub fn current_profile_question(&self) -> Option<(&'static str, &'static str)> {
        PROFILE_QUESTIONS.get(self.stage).copied()
    }

    /// Answered profile entries in question order, for display.
    pub fn profile_entries(&self) -> Vec<(&'static str, &str)> {
        PROFILE_QUESTIONS
            .iter()
            .filter_map(|(key, _)| self.user_data.get(*key).map(|v| (*key, v.as_str())))
            .collect()
    }

    pub fn assessment_complete(&self) -> bool {
        PREFERENCE_QUESTIONS.iter().all(|(key, _)| {
            self.career_preferences
                .get(*key)
                .is_some_and(|v| !v.trim().is_empty())
        })
    }

    /// Assessment questions not yet answered, in question order.
    pub fn pending_preferences(&self) -> Vec<(&'static str, &'static str)> {
        PREFERENCE_QUESTIONS
            .iter()
            .filter(|(key, _)| {
                !self
                    .career_preferences
                    .get(*key)
                    .is_some_and(|v| !v.trim().is_empty())
            })
            .copied()
            .collect()
    }

    pub fn skill_rating(&self, category: &str, skill: &str) -> u8 {
        self.skills_gap
            .get(category)
            .and_then(|skills| skills.get(skill))
            .copied()
            .unwrap_or(0)
    }

    pub fn rate_skill(&mut self, category: &str, skill: &str, rating: u8) {
        self.skills_gap
            .entry(category.to_string())
            .or_default()
            .insert(skill.to_string(), rating.min(MAX_SKILL_RATING));
    }

    pub fn set_break_duration(&mut self, years: f64) {
        self.break_duration = years.clamp(0.0, MAX_BREAK_YEARS);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_profile_setup() {
        let session = Session::new();
        assert_eq!(session.current_page, Page::ProfileSetup);
        assert_eq!(session.stage, 0);
        assert!(session.user_data.is_empty());
        assert!(session.career_path_recommendations.is_empty());
        assert!(session.selected_career_path.is_none());
        assert!(!session.profile_complete());
    }

    #[test]
    fn test_current_profile_question_follows_stage() {
        let mut session = Session::new();
        assert_eq!(
            session.current_profile_question().map(|(k, _)| k),
            Some("FullName")
        );
        session.stage = 3;
        assert_eq!(
            session.current_profile_question().map(|(k, _)| k),
            Some("TechnicalBackground")
        );
        session.stage = 4;
        assert!(session.current_profile_question().is_none());
        assert!(session.profile_complete());
    }

    #[test]
    fn test_profile_entries_keep_question_order() {
        let mut session = Session::new();
        session
            .user_data
            .insert("TechnicalBackground".into(), "Python".into());
        session.user_data.insert("FullName".into(), "Jane Doe".into());
        let entries = session.profile_entries();
        assert_eq!(entries[0], ("FullName", "Jane Doe"));
        assert_eq!(entries[1], ("TechnicalBackground", "Python"));
    }

    #[test]
    fn test_assessment_complete_requires_all_four_non_blank() {
        let mut session = Session::new();
        assert!(!session.assessment_complete());
        for (key, _) in PREFERENCE_QUESTIONS {
            session
                .career_preferences
                .insert(key.to_string(), "something".into());
        }
        assert!(session.assessment_complete());

        session
            .career_preferences
            .insert("work_style".into(), "   ".into());
        assert!(!session.assessment_complete());
        assert_eq!(
            session.pending_preferences(),
            vec![(
                "work_style",
                "Do you prefer working independently or in teams?"
            )]
        );
    }

    #[test]
    fn test_rate_skill_clamps_to_five() {
        let mut session = Session::new();
        session.rate_skill("Technical Skills", "Rust", 9);
        assert_eq!(session.skill_rating("Technical Skills", "Rust"), 5);
        session.rate_skill("Technical Skills", "Rust", 3);
        assert_eq!(session.skill_rating("Technical Skills", "Rust"), 3);
        assert_eq!(session.skill_rating("Technical Skills", "Go"), 0);
    }

    #[test]
    fn test_break_duration_clamps_to_valid_range() {
        let mut session = Session::new();
        session.set_break_duration(-2.0);
        assert_eq!(session.break_duration, 0.0);
        session.set_break_duration(3.5);
        assert_eq!(session.break_duration, 3.5);
        session.set_break_duration(99.0);
        assert_eq!(session.break_duration, MAX_BREAK_YEARS);
    }

    #[test]
    fn test_with_id_resets_everything_but_the_id() {
        let mut session = Session::new();
        let id = session.id;
        let old_chat = session.chat.id;
        session.stage = 4;
        session.user_data.insert("FullName".into(), "Jane".into());
        session.selected_career_path = Some("Data Science".into());
        session.consultation_history.push(ConsultationTurn::user("hi"));
        session.chat.record_exchange("hi", "hello");

        let fresh = Session::with_id(id);
        assert_eq!(fresh.id, id);
        assert_eq!(fresh.stage, 0);
        assert!(fresh.user_data.is_empty());
        assert!(fresh.selected_career_path.is_none());
        assert!(fresh.consultation_history.is_empty());
        assert!(fresh.chat.turns.is_empty());
        assert_ne!(fresh.chat.id, old_chat);
    }

    #[test]
    fn test_chat_handle_records_exchanges_in_order() {
        let mut chat = ChatHandle::new();
        chat.record_exchange("first question", "first answer");
        chat.record_exchange("second question", "second answer");
        assert_eq!(chat.turns.len(), 4);
        assert_eq!(chat.turns[0].role, ChatRole::User);
        assert_eq!(chat.turns[1].role, ChatRole::Model);
        assert_eq!(chat.turns[2].text, "second question");
    }
}
