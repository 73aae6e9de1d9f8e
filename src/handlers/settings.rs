use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::dashboard::SettingsView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NotificationsRequest {
    pub enabled: bool,
}

pub async fn get_settings(State(state): State<AppState>) -> (StatusCode, Json<SettingsView>) {
    let settings = state.settings.lock().await;
    (StatusCode::OK, Json(settings.view()))
}

pub async fn toggle_notifications(
    State(state): State<AppState>,
    Json(payload): Json<NotificationsRequest>,
) -> (StatusCode, Json<Value>) {
    let mut settings = state.settings.lock().await;
    let message = settings.toggle_notifications(payload.enabled);

    (
        StatusCode::OK,
        Json(json!({
            "message": message,
            "notificationsEnabled": settings.view().notifications_enabled,
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentialStore;
    use crate::dashboard::DashboardProvider;
    use crate::session::SessionStore;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_toggle_notifications() {
        let state = AppState::new(
            SessionStore::new(
                Arc::new(MemoryStorage::new()),
                Arc::new(StaticCredentialStore::default()),
            ),
            DashboardProvider::default(),
        );

        let (_, Json(view)) = get_settings(State(state.clone())).await;
        assert!(view.notifications_enabled);

        let (_, Json(body)) = toggle_notifications(
            State(state.clone()),
            Json(NotificationsRequest { enabled: false }),
        )
        .await;
        assert_eq!(body["message"], "Notificações Desativadas");
        assert_eq!(body["notificationsEnabled"], false);

        let (_, Json(view)) = get_settings(State(state)).await;
        assert!(!view.notifications_enabled);
    }
}
