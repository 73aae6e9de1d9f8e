pub mod auth;
pub mod dashboard;
pub mod health;
pub mod settings;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::require_session;
use crate::state::AppState;

/// All API routes; the caller adds the global layers
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/v1/home", get(dashboard::home))
        .route("/api/v1/settings", get(settings::get_settings))
        .route(
            "/api/v1/settings/notifications",
            post(settings::toggle_notifications),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/api/v1/session", get(auth::current_session))
        .route("/api/v1/session/login", post(auth::login))
        .route("/api/v1/session/logout", post(auth::logout))
        .route("/api/v1/home/access-denied", get(dashboard::access_denied))
        .route("/api/v1/navigate/:route", get(dashboard::navigate))
        .merge(protected)
        .with_state(state)
}
