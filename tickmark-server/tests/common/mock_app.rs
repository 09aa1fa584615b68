use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt;

use tickmark_server::app::create_router;
use tickmark_server::configs::{Database, SchemaManager, Storage};
use tickmark_server::services::{ClockService, TimeProvider};

/// Clock whose instant only moves when a test says so.
pub struct ManualTimeProvider {
    now: Mutex<DateTime<Utc>>,
}

impl ManualTimeProvider {
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap() = instant;
    }
}

impl TimeProvider for ManualTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub time: Arc<ManualTimeProvider>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let time = Arc::new(ManualTimeProvider {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap()),
        });
        let router = create_router(storage.clone(), ClockService::new(time.clone()));

        Self {
            storage,
            time,
            router,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().uri(uri).method(method);

        let body = match body {
            Some(value) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&value).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        (status, value)
    }
}
