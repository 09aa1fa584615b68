use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tickmark_api::models::CheckinResponse;

use crate::services::ClockService;

#[derive(Clone)]
pub struct ClockState {
    pub clock: ClockService,
}

pub fn clock_router(clock_state: ClockState) -> Router {
    Router::new()
        .route("/", get(get_current_time))
        .with_state(clock_state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "clock",
    responses(
        (status = 200, description = "Current Pacific date and time", body = CheckinResponse)
    )
)]
pub async fn get_current_time(State(state): State<ClockState>) -> Json<CheckinResponse> {
    let stamp = state.clock.now();

    Json(CheckinResponse::new(stamp.local_date, stamp.local_time))
}
