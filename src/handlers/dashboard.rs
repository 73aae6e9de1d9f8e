use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::dashboard::{AccessDeniedParams, GuardDecision, HomeController, HomeView, Route, authorize};
use crate::state::AppState;

pub async fn home(State(state): State<AppState>) -> (StatusCode, Json<HomeView>) {
    let session = state.session.lock().await;

    let mut controller = HomeController::new();
    controller.init(&session, &state.dashboard);

    (StatusCode::OK, Json(controller.view()))
}

pub async fn access_denied(Query(params): Query<AccessDeniedParams>) -> (StatusCode, Json<Value>) {
    let notice = HomeController::new().check_access_denied(&params);
    (StatusCode::OK, Json(json!({ "notice": notice })))
}

/// Ask the route guard whether a navigation may proceed
pub async fn navigate(
    State(state): State<AppState>,
    Path(route_name): Path<String>,
) -> Result<(StatusCode, Json<GuardDecision>), (StatusCode, Json<Value>)> {
    let route = Route::from_name(&route_name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown route '{}'", route_name) })),
        )
    })?;

    let session = state.session.lock().await;
    let decision = authorize(&session, route);
    debug!("Navigation to {} -> {:?}", route.path(), decision);

    Ok((StatusCode::OK, Json(decision)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentialStore;
    use crate::dashboard::DashboardProvider;
    use crate::session::SessionStore;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            SessionStore::new(
                Arc::new(MemoryStorage::new()),
                Arc::new(StaticCredentialStore::default()),
            ),
            DashboardProvider::default(),
        )
    }

    #[tokio::test]
    async fn test_home_for_parent() {
        let state = test_state();
        state
            .session
            .lock()
            .await
            .login("093.149.994-16", "Maria#19820225")
            .unwrap();

        let (status, Json(view)) = home(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!view.is_coordinator);
        assert_eq!(view.data.unwrap().user.name, "Maria Betânia da Silva");
    }

    #[tokio::test]
    async fn test_access_denied_notice() {
        let params = AccessDeniedParams {
            access_denied: Some("true".to_string()),
            required_role: Some("COORDINATOR".to_string()),
        };

        let (_, Json(body)) = access_denied(Query(params)).await;
        assert_eq!(body["notice"]["header"], "Acesso Negado");

        let (_, Json(body)) = access_denied(Query(AccessDeniedParams::default())).await;
        assert!(body["notice"].is_null());
    }

    #[tokio::test]
    async fn test_navigate_unknown_route() {
        let state = test_state();
        let (status, _) = navigate(State(state), Path("admin".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_navigate_redirects_anonymous() {
        let state = test_state();
        let (_, Json(decision)) = navigate(State(state), Path("calendar".to_string()))
            .await
            .unwrap();

        match decision {
            GuardDecision::Redirect { to } => assert_eq!(to.route, Route::Login),
            GuardDecision::Allow => panic!("anonymous navigation must be redirected"),
        }
    }
}
