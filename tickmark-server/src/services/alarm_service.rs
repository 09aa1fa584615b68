use std::sync::Arc;

use tickmark_api::models::{AlarmResponse, SetAlarmRequest, SetAlarmResponse};

use crate::errors::ApiError;
use crate::models::Alarm;
use crate::repositories::AlarmRepository;
use crate::services::ClockService;

/// `times` wins when present, then a non-empty legacy `time`, else nothing.
pub fn normalize_times(request: &SetAlarmRequest) -> Vec<String> {
    match (&request.times, &request.time) {
        (Some(times), _) => times.clone(),
        (None, Some(time)) if !time.is_empty() => vec![time.clone()],
        _ => vec![],
    }
}

/// Value written to the legacy `time` column.
pub fn legacy_time(request: &SetAlarmRequest, times: &[String]) -> String {
    request
        .time
        .clone()
        .or_else(|| times.first().cloned())
        .unwrap_or_default()
}

/// Reads `times`, falling back to the legacy column for rows that predate it.
pub fn decode_times(alarm: &Alarm) -> Vec<String> {
    if let Some(times) = alarm.times.as_deref().filter(|t| !t.is_empty()) {
        match serde_json::from_str::<Vec<String>>(times) {
            Ok(times) => return times,
            Err(e) => tracing::warn!("alarm {} has unreadable times {:?}: {}", alarm.id, times, e),
        }
    }

    match alarm.time.as_deref() {
        Some(time) if !time.is_empty() => vec![time.to_string()],
        _ => vec![],
    }
}

pub struct AlarmService {
    repository: Arc<AlarmRepository>,
    clock: ClockService,
}

impl AlarmService {
    pub fn new(repository: Arc<AlarmRepository>, clock: ClockService) -> Self {
        Self { repository, clock }
    }

    pub async fn set(&self, request: SetAlarmRequest) -> Result<SetAlarmResponse, ApiError> {
        let times = normalize_times(&request);
        let alarm = Alarm {
            id: 0,
            days: serde_json::to_string(&request.days)?,
            time: Some(legacy_time(&request, &times)),
            times: Some(serde_json::to_string(&times)?),
            created_at: Some(self.clock.now().timestamp),
        };

        let mut tx = self.repository.get_pool().begin().await?;
        let id = self.repository.replace(&alarm, &mut tx).await?;
        tx.commit().await?;

        tracing::debug!("alarm {id} replaced: days={:?} times={:?}", request.days, times);

        Ok(SetAlarmResponse {
            success: true,
            days: request.days,
            times,
        })
    }

    pub async fn get(&self) -> Result<AlarmResponse, ApiError> {
        let Some(alarm) = self.repository.find_latest().await? else {
            return Ok(AlarmResponse::default());
        };

        Ok(AlarmResponse {
            days: serde_json::from_str(&alarm.days)?,
            times: decode_times(&alarm),
            created_at: alarm.created_at,
        })
    }
}
