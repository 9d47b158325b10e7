use crate::errors::AppError;
use crate::models::{HealthResponse, PopularItem, RecentTransaction, StatsResponse};
use crate::state::AppState;
use crate::stats::{fetch_popular_items, fetch_recent_transactions, fetch_stats, today};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let client = state.db.connect().await?;
    let stats = fetch_stats(&client, today()).await.map_err(|err| {
        error!("stats query failed: {err}");
        AppError::from(err)
    })?;
    Ok(Json(stats))
}

pub async fn get_popular_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<PopularItem>>, AppError> {
    let client = state.db.connect().await?;
    let items = fetch_popular_items(&client, today()).await.map_err(|err| {
        error!("popular items query failed: {err}");
        AppError::from(err)
    })?;
    Ok(Json(items))
}

pub async fn get_recent_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentTransaction>>, AppError> {
    let client = state.db.connect().await?;
    let transactions = fetch_recent_transactions(&client).await.map_err(|err| {
        error!("recent transactions query failed: {err}");
        AppError::from(err)
    })?;
    Ok(Json(transactions))
}

// Never touches the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
