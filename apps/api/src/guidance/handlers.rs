use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::CareerPath;
use crate::errors::AppError;
use crate::flow::view::{
    gap_view_for, page_view_for, PageView, SkillsGapView, DEFAULT_GAP_TARGET,
};
use crate::flow::{apply, missing_prerequisite, Action, Page};
use crate::guidance::consultation::{consult, quick_actions, suggested_questions, ReplySource};
use crate::guidance::gap::require_matrix;
use crate::guidance::roadmap::{
    personalized_roadmap, static_roadmap, PersonalizedRoadmap, StaticRoadmap,
};
use crate::models::session::ConsultationTurn;
use crate::session::handlers::{envelope, session_not_found, SessionEnvelope};
use crate::state::AppState;

fn parse_career_path(name: &str) -> Result<CareerPath, AppError> {
    CareerPath::parse(name)
        .ok_or_else(|| AppError::Validation(format!("Unknown career path: {name}")))
}

// ─────────────────────────────────────────────────────────────────────────────
// Career path selection
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SelectPathRequest {
    pub career_path: String,
}

/// POST /api/v1/sessions/:id/recommendations/select
pub async fn handle_select_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectPathRequest>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let path = parse_career_path(&req.career_path)?;
    // Store the canonical name so later lookups never re-validate
    let session = apply(session, Action::SelectCareerPath(path.name().to_string()));
    state.sessions.put(session.clone()).await;
    info!("Session {id} selected career path: {}", path.name());
    Ok(Json(envelope(&session)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Learning roadmap
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(untagged)]
pub enum RoadmapEndpointResponse {
    /// No career path selected yet — the guidance branch of the page.
    Guidance(PageView),
    Roadmap(RoadmapResponse),
}

#[derive(Serialize)]
pub struct RoadmapResponse {
    #[serde(flatten)]
    pub roadmap: StaticRoadmap,
    pub personalized: PersonalizedRoadmap,
    /// True when the personalized half came from the deterministic fallback
    /// instead of the model.
    pub personalized_fallback: bool,
}

/// GET /api/v1/sessions/:id/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoadmapEndpointResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    if missing_prerequisite(&session, Page::LearningRoadmap).is_some() {
        return Ok(Json(RoadmapEndpointResponse::Guidance(page_view_for(
            &session,
            Page::LearningRoadmap,
        ))));
    }

    let path = session
        .selected_career_path
        .as_deref()
        .and_then(CareerPath::parse)
        .unwrap_or(CareerPath::SoftwareDevelopment);
    let (personalized, personalized_fallback) =
        personalized_roadmap(&state.llm, path, &session.user_data).await;

    Ok(Json(RoadmapEndpointResponse::Roadmap(RoadmapResponse {
        roadmap: static_roadmap(path),
        personalized,
        personalized_fallback,
    })))
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills gap analysis
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GapQuery {
    pub path: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum GapEndpointResponse {
    /// No profile yet — the guidance branch of the page.
    Guidance(PageView),
    Report(SkillsGapView),
}

/// GET /api/v1/sessions/:id/skills-gap?path=Data+Science
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<GapQuery>,
) -> Result<Json<GapEndpointResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    if missing_prerequisite(&session, Page::SkillsGapAnalysis).is_some() {
        return Ok(Json(GapEndpointResponse::Guidance(page_view_for(
            &session,
            Page::SkillsGapAnalysis,
        ))));
    }

    let target = match query.path.as_deref() {
        Some(name) => parse_career_path(name)?,
        None => DEFAULT_GAP_TARGET,
    };
    let report = state.gap_analyzer.analyze(&session, target).await?;

    Ok(Json(GapEndpointResponse::Report(SkillsGapView {
        targets: CareerPath::technical()
            .map(|p| p.name().to_string())
            .collect(),
        target: target.name().to_string(),
        report,
    })))
}

#[derive(Deserialize)]
pub struct RatingRequest {
    pub path: String,
    pub category: String,
    pub skill: String,
    pub rating: u8,
}

/// POST /api/v1/sessions/:id/skills-gap/ratings
///
/// Stores one slider rating and returns the recomputed report for the rated
/// path. Ratings are keyed by category and skill, so paths sharing a skill
/// (Git appears in several matrices) share its rating.
pub async fn handle_rate_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RatingRequest>,
) -> Result<Json<SkillsGapView>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let path = parse_career_path(&req.path)?;
    require_matrix(path)?;

    let session = apply(
        session,
        Action::RateSkill {
            category: req.category,
            skill: req.skill,
            rating: req.rating,
        },
    );
    state.sessions.put(session.clone()).await;
    Ok(Json(gap_view_for(&session, path)))
}

#[derive(Deserialize)]
pub struct BreakDurationRequest {
    pub years: f64,
}

/// POST /api/v1/sessions/:id/skills-gap/break-duration
pub async fn handle_break_duration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<BreakDurationRequest>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::SetBreakDuration(req.years));
    state.sessions.put(session.clone()).await;
    Ok(Json(envelope(&session)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Live consultation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ConsultationRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct ConsultationResponse {
    pub session_id: Uuid,
    /// None when the question was blank and nothing was asked.
    pub reply: Option<ConsultationReply>,
    pub view: PageView,
}

#[derive(Serialize)]
pub struct ConsultationReply {
    pub text: String,
    pub source: ReplySource,
    pub quick_actions: Vec<Page>,
}

/// POST /api/v1/sessions/:id/consultation
pub async fn handle_consultation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConsultationRequest>,
) -> Result<Json<ConsultationResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    let question = req.question.trim().to_string();
    if question.is_empty() {
        // Blank questions are ignored, not errors
        return Ok(Json(ConsultationResponse {
            session_id: id,
            reply: None,
            view: page_view_for(&session, Page::LiveConsultation),
        }));
    }

    let mut session = apply(
        session,
        Action::AppendConsultation(ConsultationTurn::user(question.clone())),
    );
    let outcome = consult(&state.llm, &mut session.chat, &session.user_data, &question).await;
    let actions = quick_actions(&outcome.reply);

    let session = apply(
        session,
        Action::AppendConsultation(ConsultationTurn::assistant(outcome.reply.clone())),
    );
    state.sessions.put(session.clone()).await;

    Ok(Json(ConsultationResponse {
        session_id: id,
        reply: Some(ConsultationReply {
            text: outcome.reply,
            source: outcome.source,
            quick_actions: actions,
        }),
        view: page_view_for(&session, Page::LiveConsultation),
    }))
}

/// POST /api/v1/sessions/:id/consultation/clear
pub async fn handle_clear_consultation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::ClearConsultation);
    state.sessions.put(session.clone()).await;
    info!("Session {id} cleared its consultation transcript");
    Ok(Json(envelope(&session)))
}

#[derive(Serialize)]
pub struct SuggestedQuestionsResponse {
    pub questions: Vec<String>,
    /// True when the generic fallback list was used instead of the model.
    pub fallback: bool,
}

/// GET /api/v1/sessions/:id/consultation/suggestions
pub async fn handle_suggested_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestedQuestionsResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let (questions, fallback) = suggested_questions(&state.llm, &session.user_data).await;
    Ok(Json(SuggestedQuestionsResponse { questions, fallback }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
