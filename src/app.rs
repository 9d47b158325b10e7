use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/popular-items", get(handlers::get_popular_items))
        .route("/api/recent-transactions", get(handlers::get_recent_transactions))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
