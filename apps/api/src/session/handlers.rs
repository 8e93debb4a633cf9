use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::flow::view::{project, PageView};
use crate::models::session::Session;
use crate::state::AppState;

/// Session id plus the projected view of its current page — the response
/// shape shared by every endpoint that changes session state.
#[derive(Serialize)]
pub struct SessionEnvelope {
    pub session_id: Uuid,
    pub view: PageView,
}

pub(crate) fn envelope(session: &Session) -> SessionEnvelope {
    SessionEnvelope {
        session_id: session.id,
        view: project(session),
    }
}

pub(crate) fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionEnvelope> {
    let session = state.sessions.create().await;
    info!(
        "Created session {} ({} active)",
        session.id,
        state.sessions.count().await
    );
    Json(envelope(&session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(envelope(&session)))
}

/// POST /api/v1/sessions/:id/reset
/// Start Fresh: everything back to defaults under the same id.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionEnvelope>, AppError> {
    let session = state
        .sessions
        .reset(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    info!("Reset session {id}");
    Ok(Json(envelope(&session)))
}
