use axum::http::{Method, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_get_alarm_defaults() {
    let app = MockApp::new().await;

    let (status, body) = app.send(Method::GET, "/alarm", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "days": [], "times": [], "created_at": null }));
}

#[tokio::test]
async fn test_set_alarm_with_legacy_time() {
    let app = MockApp::new().await;

    let (status, body) = app
        .send(Method::POST, "/alarm", Some(json!({ "days": ["Mon"], "time": "07:00" })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "days": ["Mon"], "times": ["07:00"] }));

    let (_, body) = app.send(Method::GET, "/alarm", None).await;
    assert_eq!(body["times"], json!(["07:00"]));
}

#[tokio::test]
async fn test_set_alarm_with_times() {
    let app = MockApp::new().await;
    app.time.set(Utc.with_ymd_and_hms(2024, 7, 4, 16, 0, 0).unwrap());

    app.send(
        Method::POST,
        "/alarm",
        Some(json!({ "days": ["Mon", "Thu"], "times": ["07:00", "19:00"] })),
    )
    .await;

    let (_, body) = app.send(Method::GET, "/alarm", None).await;

    assert_eq!(
        body,
        json!({
            "days": ["Mon", "Thu"],
            "times": ["07:00", "19:00"],
            "created_at": "2024-07-04T09:00:00.000000-07:00",
        })
    );
}

#[tokio::test]
async fn test_set_alarm_without_any_time() {
    let app = MockApp::new().await;

    let (_, body) = app
        .send(Method::POST, "/alarm", Some(json!({ "days": ["Mon"] })))
        .await;
    assert_eq!(body["times"], json!([]));

    let (_, body) = app.send(Method::GET, "/alarm", None).await;
    assert_eq!(body["days"], json!(["Mon"]));
    assert_eq!(body["times"], json!([]));
}

#[tokio::test]
async fn test_only_last_alarm_survives() {
    let app = MockApp::new().await;

    for payload in [
        json!({ "days": ["Mon"], "time": "07:00" }),
        json!({ "days": ["Tue", "Wed"], "times": ["06:00"] }),
        json!({ "days": ["Sat"], "times": ["10:00", "22:00"] }),
    ] {
        let (status, _) = app.send(Method::POST, "/alarm", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alarms")
        .fetch_one(app.storage.get_pool())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let (_, body) = app.send(Method::GET, "/alarm", None).await;
    assert_eq!(body["days"], json!(["Sat"]));
    assert_eq!(body["times"], json!(["10:00", "22:00"]));
}

#[tokio::test]
async fn test_legacy_time_column_is_written() {
    let app = MockApp::new().await;

    app.send(
        Method::POST,
        "/alarm",
        Some(json!({ "days": ["Fri"], "times": ["05:30", "17:30"] })),
    )
    .await;

    let time: String = sqlx::query_scalar("SELECT time FROM alarms")
        .fetch_one(app.storage.get_pool())
        .await
        .unwrap();
    assert_eq!(time, "05:30");
}

#[tokio::test]
async fn test_pre_migration_row_is_readable() {
    let app = MockApp::new().await;

    sqlx::query("DROP TABLE alarms")
        .execute(app.storage.get_pool())
        .await
        .unwrap();
    sqlx::query(
        r#"
        CREATE TABLE alarms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            days TEXT NOT NULL,
            time TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(app.storage.get_pool())
    .await
    .unwrap();
    sqlx::query("INSERT INTO alarms (days, time, created_at) VALUES ($1, $2, $3)")
        .bind(r#"["Mon","Wed"]"#)
        .bind("06:45")
        .bind("2023-09-01T06:00:00-07:00")
        .execute(app.storage.get_pool())
        .await
        .unwrap();

    app.storage.init().await.unwrap();

    let (_, body) = app.send(Method::GET, "/alarm", None).await;

    assert_eq!(
        body,
        json!({
            "days": ["Mon", "Wed"],
            "times": ["06:45"],
            "created_at": "2023-09-01T06:00:00-07:00",
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = MockApp::new().await;

    let (status, _) = app
        .send(Method::POST, "/alarm", Some(json!({ "days": "Mon" })))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_alarm_read_failure_returns_default() {
    let app = MockApp::new().await;

    sqlx::query("INSERT INTO alarms (days, time, times, created_at) VALUES ('broken', '', '[]', NULL)")
        .execute(app.storage.get_pool())
        .await
        .unwrap();

    let (status, body) = app.send(Method::GET, "/alarm", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "days": [], "times": [], "created_at": null }));
}

#[tokio::test]
async fn test_set_alarm_requires_days() {
    let app = MockApp::new().await;

    let (status, _) = app
        .send(Method::POST, "/alarm", Some(json!({ "times": ["07:00"] })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app.send(Method::GET, "/alarm", None).await;
    assert_eq!(body, json!({ "days": [], "times": [], "created_at": null }));
}

#[tokio::test]
async fn test_failed_replace_keeps_previous_alarm() {
    let app = MockApp::new().await;

    app.send(Method::POST, "/alarm", Some(json!({ "days": ["Mon"], "time": "07:00" })))
        .await;
    let (_, before) = app.send(Method::GET, "/alarm", None).await;

    sqlx::query(
        r#"
        CREATE TRIGGER reject_alarm_insert BEFORE INSERT ON alarms
        BEGIN
            SELECT RAISE(ABORT, 'alarm writes disabled');
        END
        "#,
    )
    .execute(app.storage.get_pool())
    .await
    .unwrap();

    let (status, body) = app
        .send(Method::POST, "/alarm", Some(json!({ "days": ["Sat"], "times": ["10:00"] })))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!(500));

    let (_, after) = app.send(Method::GET, "/alarm", None).await;
    assert_eq!(after, before);
    assert_eq!(after["days"], json!(["Mon"]));
    assert_eq!(after["times"], json!(["07:00"]));
}
