//! Wizard flow — the page state machine driving the guidance journey.
//!
//! Navigation is never rejected: a user can jump to any page at any time, and
//! a page whose prerequisite is missing projects a guidance view instead of
//! content (`view.rs`). `apply` is the single pure transition function;
//! handlers map HTTP requests onto [`Action`]s and persist the result.

pub mod handlers;
pub mod view;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::session::{ConsultationTurn, Session, PREFERENCE_QUESTIONS, PROFILE_QUESTIONS};

// ────────────────────────────────────────────────────────────────────────────
// Pages
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    ProfileSetup,
    CareerAssessment,
    CareerRecommendations,
    LearningRoadmap,
    SkillsGapAnalysis,
    LiveConsultation,
}

impl Page {
    /// Wizard pages in journey order. `LiveConsultation` sits outside the
    /// wizard and is reachable from every page.
    pub const WIZARD: [Page; 5] = [
        Page::ProfileSetup,
        Page::CareerAssessment,
        Page::CareerRecommendations,
        Page::LearningRoadmap,
        Page::SkillsGapAnalysis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::ProfileSetup => "Profile Setup",
            Page::CareerAssessment => "Career Assessment",
            Page::CareerRecommendations => "Career Recommendations",
            Page::LearningRoadmap => "Learning Roadmap",
            Page::SkillsGapAnalysis => "Skills Gap Analysis",
            Page::LiveConsultation => "Live Consultation",
        }
    }

    /// The next wizard page. The last wizard page and the consultation page
    /// have no successor.
    pub fn next(self) -> Option<Page> {
        match self {
            Page::ProfileSetup => Some(Page::CareerAssessment),
            Page::CareerAssessment => Some(Page::CareerRecommendations),
            Page::CareerRecommendations => Some(Page::LearningRoadmap),
            Page::LearningRoadmap => Some(Page::SkillsGapAnalysis),
            Page::SkillsGapAnalysis | Page::LiveConsultation => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Actions and the transition function
// ────────────────────────────────────────────────────────────────────────────

/// Everything that can change a session. LLM-dependent actions carry already
/// generated content so transitions stay pure.
#[derive(Debug, Clone)]
pub enum Action {
    Navigate(Page),
    /// Advance to the next wizard page if the current one is complete.
    Proceed,
    SubmitProfileAnswer(String),
    SubmitPreferences(HashMap<String, String>),
    StoreRecommendations(Vec<String>),
    SelectCareerPath(String),
    RateSkill {
        category: String,
        skill: String,
        rating: u8,
    },
    SetBreakDuration(f64),
    AppendConsultation(ConsultationTurn),
    ClearConsultation,
}

/// Applies one action to a session. Total: invalid or out-of-turn actions
/// leave the session unchanged rather than erroring (empty profile answers,
/// unknown preference keys, proceeding from an incomplete page).
pub fn apply(session: Session, action: Action) -> Session {
    let mut session = session;
    match action {
        Action::Navigate(page) => {
            session.current_page = page;
        }
        Action::Proceed => {
            if page_complete(&session, session.current_page) {
                if let Some(next) = session.current_page.next() {
                    session.current_page = next;
                }
            }
        }
        Action::SubmitProfileAnswer(answer) => {
            let answer = answer.trim();
            if !answer.is_empty() {
                if let Some((key, _)) = session.current_profile_question() {
                    session.user_data.insert(key.to_string(), answer.to_string());
                    session.stage += 1;
                }
            }
        }
        Action::SubmitPreferences(responses) => {
            for (key, _) in PREFERENCE_QUESTIONS {
                if let Some(value) = responses.get(*key) {
                    let value = value.trim();
                    if !value.is_empty() {
                        session
                            .career_preferences
                            .insert(key.to_string(), value.to_string());
                    }
                }
            }
        }
        Action::StoreRecommendations(paths) => {
            session.career_path_recommendations = paths;
        }
        Action::SelectCareerPath(path) => {
            session.selected_career_path = Some(path);
        }
        Action::RateSkill {
            category,
            skill,
            rating,
        } => {
            session.rate_skill(&category, &skill, rating);
        }
        Action::SetBreakDuration(years) => {
            session.set_break_duration(years);
        }
        Action::AppendConsultation(turn) => {
            session.consultation_history.push(turn);
        }
        Action::ClearConsultation => {
            session.consultation_history.clear();
        }
    }
    session.touch();
    session
}

/// Whether `page` is complete for the purpose of advancing past it.
pub fn page_complete(session: &Session, page: Page) -> bool {
    match page {
        Page::ProfileSetup => session.profile_complete(),
        Page::CareerAssessment => session.assessment_complete(),
        Page::CareerRecommendations => session.selected_career_path.is_some(),
        Page::LearningRoadmap | Page::SkillsGapAnalysis | Page::LiveConsultation => true,
    }
}

/// The page a user must visit first when `page`'s content cannot render yet.
/// `None` means the prerequisite is satisfied (or the page has none).
pub fn missing_prerequisite(session: &Session, page: Page) -> Option<Page> {
    match page {
        Page::ProfileSetup | Page::LiveConsultation => None,
        Page::CareerAssessment | Page::SkillsGapAnalysis => {
            if session.user_data.is_empty() {
                Some(Page::ProfileSetup)
            } else {
                None
            }
        }
        Page::CareerRecommendations => {
            if session.assessment_complete() {
                None
            } else {
                Some(Page::CareerAssessment)
            }
        }
        Page::LearningRoadmap => {
            if session.selected_career_path.is_some() {
                None
            } else {
                Some(Page::CareerRecommendations)
            }
        }
    }
}

/// Profile progress as a whole percentage, matching the original wizard's
/// progress bar.
pub fn profile_progress_percent(session: &Session) -> u8 {
    ((session.stage.min(PROFILE_QUESTIONS.len()) * 100) / PROFILE_QUESTIONS.len()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered_profile() -> Session {
        let mut session = Session::new();
        for (key, _) in PROFILE_QUESTIONS {
            session = apply(session, Action::SubmitProfileAnswer(format!("answer for {key}")));
        }
        session
    }

    fn answered_preferences(mut session: Session) -> Session {
        let responses: HashMap<String, String> = PREFERENCE_QUESTIONS
            .iter()
            .map(|(key, _)| (key.to_string(), format!("pref for {key}")))
            .collect();
        session = apply(session, Action::SubmitPreferences(responses));
        session
    }

    #[test]
    fn test_profile_answer_advances_stage_by_one() {
        let session = Session::new();
        let session = apply(session, Action::SubmitProfileAnswer("Jane Doe".into()));
        assert_eq!(session.stage, 1);
        assert_eq!(session.user_data.get("FullName").map(String::as_str), Some("Jane Doe"));
        assert_eq!(session.user_data.len(), 1);
    }

    #[test]
    fn test_empty_profile_answer_changes_nothing() {
        let session = Session::new();
        let session = apply(session, Action::SubmitProfileAnswer("   ".into()));
        assert_eq!(session.stage, 0);
        assert!(session.user_data.is_empty());
    }

    #[test]
    fn test_full_profile_flow_stores_all_answers() {
        let answers = ["Jane Doe", "29", "BSc Computer Science", "3 years backend"];
        let mut session = Session::new();
        for answer in answers {
            session = apply(session, Action::SubmitProfileAnswer(answer.into()));
        }
        assert!(session.profile_complete());
        assert_eq!(session.user_data.get("FullName").map(String::as_str), Some("Jane Doe"));
        assert_eq!(session.user_data.get("Age").map(String::as_str), Some("29"));
        assert_eq!(
            session.user_data.get("Education").map(String::as_str),
            Some("BSc Computer Science")
        );
        assert_eq!(
            session.user_data.get("TechnicalBackground").map(String::as_str),
            Some("3 years backend")
        );
        // A fifth answer has no question to land on
        let session = apply(session, Action::SubmitProfileAnswer("extra".into()));
        assert_eq!(session.stage, 4);
        assert_eq!(session.user_data.len(), 4);
    }

    #[test]
    fn test_preferences_ignore_unknown_keys_and_blanks() {
        let session = Session::new();
        let mut responses = HashMap::new();
        responses.insert("interests".to_string(), "coding".to_string());
        responses.insert("favorite_color".to_string(), "green".to_string());
        responses.insert("work_style".to_string(), "  ".to_string());
        let session = apply(session, Action::SubmitPreferences(responses));
        assert_eq!(session.career_preferences.len(), 1);
        assert_eq!(
            session.career_preferences.get("interests").map(String::as_str),
            Some("coding")
        );
    }

    #[test]
    fn test_blank_preference_never_overwrites_stored_answer() {
        let session = Session::new();
        let mut first = HashMap::new();
        first.insert("interests".to_string(), "coding".to_string());
        let session = apply(session, Action::SubmitPreferences(first));

        let mut second = HashMap::new();
        second.insert("interests".to_string(), "".to_string());
        let session = apply(session, Action::SubmitPreferences(second));
        assert_eq!(
            session.career_preferences.get("interests").map(String::as_str),
            Some("coding")
        );
    }

    #[test]
    fn test_assessment_completion_is_idempotent() {
        let session = answered_preferences(Session::new());
        assert!(session.assessment_complete());
        let session = answered_preferences(session);
        assert!(session.assessment_complete());
        assert_eq!(session.career_preferences.len(), PREFERENCE_QUESTIONS.len());
    }

    #[test]
    fn test_proceed_blocked_until_page_complete() {
        let session = Session::new();
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::ProfileSetup);

        let session = answered_profile();
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::CareerAssessment);
    }

    #[test]
    fn test_proceed_walks_the_wizard_in_order() {
        let session = answered_preferences(answered_profile());
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::CareerAssessment);
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::CareerRecommendations);

        // Recommendations requires a selection before advancing
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::CareerRecommendations);

        let session = apply(session, Action::SelectCareerPath("Data Science".into()));
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::LearningRoadmap);
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::SkillsGapAnalysis);

        // Last wizard page stays put
        let session = apply(session, Action::Proceed);
        assert_eq!(session.current_page, Page::SkillsGapAnalysis);
    }

    #[test]
    fn test_navigate_is_never_rejected() {
        let session = Session::new();
        let session = apply(session, Action::Navigate(Page::LearningRoadmap));
        assert_eq!(session.current_page, Page::LearningRoadmap);
        let session = apply(session, Action::Navigate(Page::LiveConsultation));
        assert_eq!(session.current_page, Page::LiveConsultation);
    }

    #[test]
    fn test_missing_prerequisites_name_the_redirect_page() {
        let session = Session::new();
        assert_eq!(
            missing_prerequisite(&session, Page::CareerAssessment),
            Some(Page::ProfileSetup)
        );
        assert_eq!(
            missing_prerequisite(&session, Page::SkillsGapAnalysis),
            Some(Page::ProfileSetup)
        );
        assert_eq!(
            missing_prerequisite(&session, Page::CareerRecommendations),
            Some(Page::CareerAssessment)
        );
        assert_eq!(
            missing_prerequisite(&session, Page::LearningRoadmap),
            Some(Page::CareerRecommendations)
        );
        assert_eq!(missing_prerequisite(&session, Page::ProfileSetup), None);
        assert_eq!(missing_prerequisite(&session, Page::LiveConsultation), None);
    }

    #[test]
    fn test_prerequisites_clear_as_the_journey_progresses() {
        let session = apply(
            Session::new(),
            Action::SubmitProfileAnswer("Jane Doe".into()),
        );
        // Any profile data unlocks assessment and gap analysis
        assert_eq!(missing_prerequisite(&session, Page::CareerAssessment), None);
        assert_eq!(missing_prerequisite(&session, Page::SkillsGapAnalysis), None);
        // Recommendations still needs the full assessment
        assert_eq!(
            missing_prerequisite(&session, Page::CareerRecommendations),
            Some(Page::CareerAssessment)
        );

        let session = answered_preferences(session);
        assert_eq!(missing_prerequisite(&session, Page::CareerRecommendations), None);

        let session = apply(session, Action::SelectCareerPath("Data Science".into()));
        assert_eq!(missing_prerequisite(&session, Page::LearningRoadmap), None);
    }

    #[test]
    fn test_profile_progress_percent() {
        let mut session = Session::new();
        assert_eq!(profile_progress_percent(&session), 0);
        session.stage = 1;
        assert_eq!(profile_progress_percent(&session), 25);
        session.stage = 4;
        assert_eq!(profile_progress_percent(&session), 100);
        session.stage = 9;
        assert_eq!(profile_progress_percent(&session), 100);
    }

    #[test]
    fn test_clear_consultation_keeps_chat_handle() {
        let mut session = Session::new();
        session.chat.record_exchange("q", "a");
        let chat_id = session.chat.id;
        let session = apply(
            session,
            Action::AppendConsultation(ConsultationTurn::user("q")),
        );
        let session = apply(session, Action::ClearConsultation);
        assert!(session.consultation_history.is_empty());
        assert_eq!(session.chat.id, chat_id);
        assert_eq!(session.chat.turns.len(), 2);
    }

    #[test]
    fn test_rate_skill_and_break_duration_actions() {
        let session = apply(
            Session::new(),
            Action::RateSkill {
                category: "Tools".into(),
                skill: "Git".into(),
                rating: 7,
            },
        );
        assert_eq!(session.skill_rating("Tools", "Git"), 5);

        let session = apply(session, Action::SetBreakDuration(-1.0));
        assert_eq!(session.break_duration, 0.0);
    }
}
