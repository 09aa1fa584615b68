use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tickmark_api::models::{AlarmResponse, SetAlarmRequest, SetAlarmResponse};

use crate::errors::ApiError;
use crate::services::AlarmService;

#[derive(Clone)]
pub struct AlarmState {
    pub alarm_service: Arc<AlarmService>,
}

pub fn alarm_router(alarm_state: AlarmState) -> Router {
    Router::new()
        .route("/alarm", get(get_alarm).post(set_alarm))
        .with_state(alarm_state)
}

#[utoipa::path(
    post,
    path = "/alarm",
    tag = "alarm",
    request_body = SetAlarmRequest,
    responses(
        (status = 200, description = "Alarm replaced", body = SetAlarmResponse),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn set_alarm(
    State(state): State<AlarmState>,
    Json(body): Json<SetAlarmRequest>,
) -> Result<Json<SetAlarmResponse>, ApiError> {
    let response = state.alarm_service.set(body).await?;

    tracing::info!("alarm set for {:?} at {:?}", response.days, response.times);

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/alarm",
    tag = "alarm",
    responses(
        (status = 200, description = "Current alarm, or empty defaults", body = AlarmResponse)
    )
)]
pub async fn get_alarm(State(state): State<AlarmState>) -> Json<AlarmResponse> {
    match state.alarm_service.get().await {
        Ok(alarm) => Json(alarm),
        Err(e) => {
            tracing::error!("Failed to read alarm: {:?}", e);
            Json(AlarmResponse::default())
        }
    }
}
