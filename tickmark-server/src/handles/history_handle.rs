use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tickmark_api::models::CheckinResponse;

use crate::errors::ApiError;
use crate::repositories::HistoryRepository;
use crate::services::ClockService;

#[derive(Clone)]
pub struct HistoryState {
    pub history_repository: Arc<HistoryRepository>,
    pub clock: ClockService,
}

pub fn history_router(history_state: HistoryState) -> Router {
    Router::new()
        .route("/history", get(get_history).post(create_history))
        .with_state(history_state)
}

#[utoipa::path(
    post,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Check-in recorded", body = CheckinResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_history(
    State(state): State<HistoryState>,
) -> Result<Json<CheckinResponse>, ApiError> {
    let stamp = state.clock.now();

    let id = state.history_repository.create(&stamp).await?;

    tracing::info!("check-in {id} recorded at {}", stamp.timestamp);

    Ok(Json(CheckinResponse::new(stamp.local_date, stamp.local_time)))
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "All check-ins, newest first", body = Vec<CheckinResponse>)
    )
)]
pub async fn get_history(State(state): State<HistoryState>) -> Json<Vec<CheckinResponse>> {
    match state.history_repository.find_all().await {
        Ok(entries) => Json(entries.into_iter().map(CheckinResponse::from).collect()),
        Err(e) => {
            tracing::error!("Failed to read history: {:?}", e);
            Json(vec![])
        }
    }
}
