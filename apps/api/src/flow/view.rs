//! Pure view projection: what each page shows for a given session.
//!
//! `project` never fails and never performs I/O. A page whose prerequisite is
//! missing projects the guidance branch naming the page to visit first; the
//! wizard treats that as content, not as an error.

use serde::Serialize;

use crate::catalog::details::{career_details, CareerDetails};
use crate::catalog::market::{market_data, MarketData};
use crate::catalog::skills::skill_matrix;
use crate::catalog::{CareerCategory, CareerPath};
use crate::flow::{
    missing_prerequisite, page_complete, profile_progress_percent, Page,
};
use crate::guidance::consultation::quick_actions;
use crate::guidance::gap::{compute_gap_report, GapReport};
use crate::guidance::recommendations::filter_by_category;
use crate::guidance::roadmap::{static_roadmap, StaticRoadmap};
use crate::models::session::{ConsultationRole, ConsultationTurn, Session};

/// The gap page's initial target before the user picks one.
pub const DEFAULT_GAP_TARGET: CareerPath = CareerPath::SoftwareDevelopment;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Guidance(GuidanceView),
    ProfileSetup(ProfileSetupView),
    CareerAssessment(AssessmentView),
    CareerRecommendations(RecommendationsView),
    LearningRoadmap(StaticRoadmap),
    SkillsGapAnalysis(SkillsGapView),
    LiveConsultation(ConsultationView),
}

/// Shown instead of page content when a prerequisite is missing.
#[derive(Debug, Clone, Serialize)]
pub struct GuidanceView {
    pub requested: Page,
    pub message: String,
    /// One-click redirect target: the page to complete first.
    pub redirect_to: Page,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuestion {
    pub key: &'static str,
    pub question: &'static str,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingQuestion {
    pub key: &'static str,
    pub question: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSetupView {
    pub progress_percent: u8,
    pub answered: Vec<AnsweredQuestion>,
    pub current_question: Option<PendingQuestion>,
    pub complete: bool,
    pub next_page: Option<Page>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub answered: Vec<AnsweredQuestion>,
    pub pending: Vec<PendingQuestion>,
    pub complete: bool,
    pub next_page: Option<Page>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsView {
    /// True once the one generation call has stored a list.
    pub generated: bool,
    pub recommendations: Vec<String>,
    pub technical: Vec<String>,
    pub non_technical: Vec<String>,
    pub selected: Option<SelectedPathView>,
    pub complete: bool,
    pub next_page: Option<Page>,
}

/// Market data and career details for the selected path.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedPathView {
    pub career_path: String,
    pub market: &'static MarketData,
    pub details: &'static CareerDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsGapView {
    /// Target options offered by the page — the technical paths.
    pub targets: Vec<String>,
    pub target: String,
    pub report: GapReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsultationView {
    pub transcript: Vec<ConsultationTurn>,
    /// False while the profile gate would answer instead of the model.
    pub profile_ready: bool,
    /// Suggested jumps when the last assistant reply names a career area.
    pub quick_actions: Vec<Page>,
}

/// Projects the session's current page into its view.
pub fn project(session: &Session) -> PageView {
    page_view_for(session, session.current_page)
}

/// Projects an explicit page for this session, independent of where the
/// session currently sits. Feature endpoints use this to answer for their
/// page without navigating.
pub fn page_view_for(session: &Session, page: Page) -> PageView {
    if let Some(redirect) = missing_prerequisite(session, page) {
        return PageView::Guidance(GuidanceView {
            requested: page,
            message: guidance_message(redirect),
            redirect_to: redirect,
        });
    }

    match page {
        Page::ProfileSetup => PageView::ProfileSetup(profile_view(session)),
        Page::CareerAssessment => PageView::CareerAssessment(assessment_view(session)),
        Page::CareerRecommendations => {
            PageView::CareerRecommendations(recommendations_view(session))
        }
        Page::LearningRoadmap => PageView::LearningRoadmap(roadmap_view(session)),
        Page::SkillsGapAnalysis => {
            PageView::SkillsGapAnalysis(gap_view(session, DEFAULT_GAP_TARGET))
        }
        Page::LiveConsultation => PageView::LiveConsultation(consultation_view(session)),
    }
}

fn guidance_message(redirect: Page) -> String {
    match redirect {
        Page::ProfileSetup => "Please complete your profile setup first!".to_string(),
        Page::CareerAssessment => "Please complete your career assessment first!".to_string(),
        Page::CareerRecommendations => {
            "Please select a career path from the Career Recommendations section first!"
                .to_string()
        }
        _ => format!("Please visit {} first!", redirect.title()),
    }
}

fn profile_view(session: &Session) -> ProfileSetupView {
    let complete = session.profile_complete();
    ProfileSetupView {
        progress_percent: profile_progress_percent(session),
        answered: answered_profile(session),
        current_question: session
            .current_profile_question()
            .map(|(key, question)| PendingQuestion { key, question }),
        complete,
        next_page: complete.then(|| Page::ProfileSetup.next()).flatten(),
    }
}

fn answered_profile(session: &Session) -> Vec<AnsweredQuestion> {
    crate::models::session::PROFILE_QUESTIONS
        .iter()
        .filter_map(|(key, question)| {
            session.user_data.get(*key).map(|answer| AnsweredQuestion {
                key,
                question,
                answer: answer.clone(),
            })
        })
        .collect()
}

fn assessment_view(session: &Session) -> AssessmentView {
    let answered = crate::models::session::PREFERENCE_QUESTIONS
        .iter()
        .filter_map(|(key, question)| {
            session
                .career_preferences
                .get(*key)
                .filter(|answer| !answer.trim().is_empty())
                .map(|answer| AnsweredQuestion {
                    key,
                    question,
                    answer: answer.clone(),
                })
        })
        .collect();
    let pending = session
        .pending_preferences()
        .into_iter()
        .map(|(key, question)| PendingQuestion { key, question })
        .collect();
    let complete = session.assessment_complete();

    AssessmentView {
        answered,
        pending,
        complete,
        next_page: complete.then(|| Page::CareerAssessment.next()).flatten(),
    }
}

fn recommendations_view(session: &Session) -> RecommendationsView {
    let recommendations = session.career_path_recommendations.clone();
    let selected = session
        .selected_career_path
        .as_deref()
        .and_then(CareerPath::parse)
        .map(|path| SelectedPathView {
            career_path: path.name().to_string(),
            market: market_data(path),
            details: career_details(path),
        });
    let complete = page_complete(session, Page::CareerRecommendations);

    RecommendationsView {
        generated: !recommendations.is_empty(),
        technical: filter_by_category(&recommendations, CareerCategory::Technical),
        non_technical: filter_by_category(&recommendations, CareerCategory::NonTechnical),
        recommendations,
        selected,
        complete,
        next_page: complete
            .then(|| Page::CareerRecommendations.next())
            .flatten(),
    }
}

fn roadmap_view(session: &Session) -> StaticRoadmap {
    // The prerequisite check guarantees a selection; an unparseable stored
    // name (impossible via the validated select endpoint) falls back to the
    // flagged generic roadmap.
    let path = session
        .selected_career_path
        .as_deref()
        .and_then(CareerPath::parse)
        .unwrap_or(CareerPath::SoftwareDevelopment);
    static_roadmap(path)
}

fn gap_view(session: &Session, target: CareerPath) -> SkillsGapView {
    // Every offered target has a matrix; the empty-slice arm keeps this total.
    let matrix = skill_matrix(target).unwrap_or(&[]);
    SkillsGapView {
        targets: CareerPath::technical().map(|p| p.name().to_string()).collect(),
        target: target.name().to_string(),
        report: compute_gap_report(target, matrix, &session.skills_gap, session.break_duration),
    }
}

/// The gap page view for an explicit target, used by the skills-gap endpoint.
pub fn gap_view_for(session: &Session, target: CareerPath) -> SkillsGapView {
    gap_view(session, target)
}

fn consultation_view(session: &Session) -> ConsultationView {
    let quick = session
        .consultation_history
        .iter()
        .rev()
        .find(|turn| turn.role == ConsultationRole::Assistant)
        .map(|turn| quick_actions(&turn.text))
        .unwrap_or_default();

    ConsultationView {
        transcript: session.consultation_history.clone(),
        profile_ready: !session.user_data.is_empty(),
        quick_actions: quick,
    }
}
