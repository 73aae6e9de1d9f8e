use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::models::LoginRequest;
use crate::session::{Session, SessionError};
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<Session>), (StatusCode, Json<Value>)> {
    let mut session = state.session.lock().await;

    match session.login(&payload.identifier, &payload.secret) {
        Ok(established) => Ok((StatusCode::OK, Json(established))),
        Err(SessionError::InvalidCredentials) => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid credentials"
            })),
        )),
        Err(SessionError::Storage(e)) => {
            error!("Failed to persist session: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to persist session"
                })),
            ))
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mut session = state.session.lock().await;
    let mut settings = state.settings.lock().await;

    let navigate = settings.logout(&mut session);

    (
        StatusCode::OK,
        Json(json!({
            "navigate": navigate,
            "url": navigate.url(),
        })),
    )
}

pub async fn current_session(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let session = state.session.lock().await;

    (
        StatusCode::OK,
        Json(json!({
            "authenticated": session.is_authenticated(),
            "state": session.state(),
            "user": session.current_user(),
        })),
    )
}
