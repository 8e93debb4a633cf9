use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flow::{apply, Action, Page};
use crate::guidance::recommendations::recommend_paths;
use crate::models::session::Session;
use crate::session::handlers::{envelope, session_not_found, SessionEnvelope};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

#[derive(Deserialize)]
pub struct ProfileAnswerRequest {
    pub answer: String,
}

#[derive(Deserialize)]
pub struct AssessmentRequest {
    pub responses: HashMap<String, String>,
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::Navigate(req.page));
    let session = ensure_recommendations(&state, session).await;
    state.sessions.put(session.clone()).await;
    Ok(Json(envelope(&session)))
}

/// POST /api/v1/sessions/:id/proceed
pub async fn handle_proceed(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::Proceed);
    let session = ensure_recommendations(&state, session).await;
    state.sessions.put(session.clone()).await;
    Ok(Json(envelope(&session)))
}

/// POST /api/v1/sessions/:id/profile
pub async fn handle_profile_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProfileAnswerRequest>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::SubmitProfileAnswer(req.answer));
    state.sessions.put(session.clone()).await;
    Ok(Json(envelope(&session)))
}

/// POST /api/v1/sessions/:id/assessment
pub async fn handle_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let session = apply(session, Action::SubmitPreferences(req.responses));
    // Covers finishing the assessment while already sitting on the
    // recommendations page.
    let session = ensure_recommendations(&state, session).await;
    state.sessions.put(session.clone()).await;
    Ok(Json(envelope(&session)))
}

/// True when landing on the recommendations page should trigger generation:
/// assessment is done and nothing has been generated yet. Re-entry after
/// generation is a no-op, so recommendations stay stable across visits.
fn needs_recommendations(session: &Session) -> bool {
    session.current_page == Page::CareerRecommendations
        && session.assessment_complete()
        && session.career_path_recommendations.is_empty()
}

async fn ensure_recommendations(state: &AppState, session: Session) -> Session {
    if !needs_recommendations(&session) {
        return session;
    }
    let paths = recommend_paths(&state.llm, &session.user_data, &session.career_preferences).await;
    info!(
        "Generated {} career recommendations for session {}",
        paths.len(),
        session.id
    );
    apply(session, Action::StoreRecommendations(paths))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{PREFERENCE_QUESTIONS, PROFILE_QUESTIONS};

    fn completed_assessment() -> Session {
        let mut session = Session::new();
        for (_, _) in PROFILE_QUESTIONS {
            session = apply(
                session,
                Action::SubmitProfileAnswer("something".to_string()),
            );
        }
        let responses: HashMap<String, String> = PREFERENCE_QUESTIONS
            .iter()
            .map(|(key, _)| (key.to_string(), "an answer".to_string()))
            .collect();
        apply(session, Action::SubmitPreferences(responses))
    }

    #[test]
    fn test_generation_waits_for_recommendations_page() {
        let session = completed_assessment();
        // Submissions advance stage, never the page.
        assert_eq!(session.current_page, Page::ProfileSetup);
        assert!(!needs_recommendations(&session));

        let session = apply(session, Action::Navigate(Page::CareerRecommendations));
        assert!(needs_recommendations(&session));
    }

    #[test]
    fn test_generation_requires_completed_assessment() {
        let session = apply(
            Session::new(),
            Action::Navigate(Page::CareerRecommendations),
        );
        // Redirected view or not, nothing to generate from yet.
        assert!(!needs_recommendations(&session));
    }

    #[test]
    fn test_generation_runs_once() {
        let session = apply(
            completed_assessment(),
            Action::Navigate(Page::CareerRecommendations),
        );
        let session = apply(
            session,
            Action::StoreRecommendations(vec!["Software Development".to_string()]),
        );
        assert!(!needs_recommendations(&session));
    }
}
