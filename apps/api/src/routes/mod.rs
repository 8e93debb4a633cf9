pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flow::handlers as flow;
use crate::guidance::handlers as guidance;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        .route(
            "/api/v1/sessions/:id/reset",
            post(sessions::handle_reset_session),
        )
        // Wizard flow
        .route("/api/v1/sessions/:id/navigate", post(flow::handle_navigate))
        .route("/api/v1/sessions/:id/proceed", post(flow::handle_proceed))
        .route(
            "/api/v1/sessions/:id/profile",
            post(flow::handle_profile_answer),
        )
        .route(
            "/api/v1/sessions/:id/assessment",
            post(flow::handle_assessment),
        )
        // Recommendations and roadmap
        .route(
            "/api/v1/sessions/:id/recommendations/select",
            post(guidance::handle_select_path),
        )
        .route("/api/v1/sessions/:id/roadmap", get(guidance::handle_roadmap))
        // Skills gap
        .route(
            "/api/v1/sessions/:id/skills-gap",
            get(guidance::handle_skills_gap),
        )
        .route(
            "/api/v1/sessions/:id/skills-gap/ratings",
            post(guidance::handle_rate_skill),
        )
        .route(
            "/api/v1/sessions/:id/skills-gap/break-duration",
            post(guidance::handle_break_duration),
        )
        // Live consultation
        .route(
            "/api/v1/sessions/:id/consultation",
            post(guidance::handle_consultation),
        )
        .route(
            "/api/v1/sessions/:id/consultation/clear",
            post(guidance::handle_clear_consultation),
        )
        .route(
            "/api/v1/sessions/:id/consultation/suggestions",
            get(guidance::handle_suggested_questions),
        )
        .with_state(state)
}
