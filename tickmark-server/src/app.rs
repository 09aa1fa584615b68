use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tickmark_api::models::{
    AlarmResponse, CheckinResponse, ItemResponse, SetAlarmRequest, SetAlarmResponse,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::repositories::{AlarmRepository, HistoryRepository};
use crate::services::{AlarmService, ClockService};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handles::get_current_time,
        crate::handles::create_history,
        crate::handles::get_history,
        crate::handles::set_alarm,
        crate::handles::get_alarm,
        crate::handles::get_item,
    ),
    components(schemas(
        CheckinResponse,
        SetAlarmRequest,
        SetAlarmResponse,
        AlarmResponse,
        ItemResponse,
    )),
    tags(
        (name = "clock", description = "Current Pacific time"),
        (name = "history", description = "Check-in log"),
        (name = "alarm", description = "Recurring alarm configuration"),
        (name = "items", description = "Demo echo endpoint"),
    )
)]
pub struct ApiDoc;

pub async fn create_app(settings: &Arc<Settings>) -> Result<Router, sqlx::Error> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);

    Ok(create_router(storage, ClockService::default()))
}

pub fn create_router(storage: Arc<Storage>, clock: ClockService) -> Router {
    let history_repository = Arc::new(HistoryRepository::new(storage.clone()));
    let alarm_repository = Arc::new(AlarmRepository::new(storage.clone()));
    let alarm_service = Arc::new(AlarmService::new(alarm_repository, clock.clone()));

    Router::new()
        .merge(clock_router(ClockState {
            clock: clock.clone(),
        }))
        .merge(history_router(HistoryState {
            history_repository,
            clock: clock.clone(),
        }))
        .merge(alarm_router(AlarmState { alarm_service }))
        .merge(item_router())
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
