use school_dashboard::{config, handlers, models::AppConfig, state::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "school_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let app_config = match config::load_config_with_fallback() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}. Using built-in defaults.", e);
            Arc::new(AppConfig::default())
        }
    };

    let state = match AppState::from_config(&app_config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open session storage: {}", e);
            std::process::exit(1);
        }
    };

    {
        let session = state.session.lock().await;
        match session.current_user() {
            Some(user) => tracing::info!("Resuming session for {} ({})", user.name, user.role),
            None => tracing::info!("No active session"),
        }
    }

    let app = handlers::build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = match app_config.bind_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {}", app_config.bind_address, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting school dashboard on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
