// ABOUTME: Integration tests for the HTTP API surface
// ABOUTME: Exercises the assembled router end to end with the synthetic provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::Router;
use chrono::Utc;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use stride_coach::config::environment::{
    CorsConfig, Environment, LogLevel, PlanCacheConfig, ProviderConfig, ServerConfig,
};
use stride_coach::context::AppContext;
use stride_coach::routes;
use stride_intelligence::WeeklyMileageCalculator;
use tower::ServiceExt;
use uuid::Uuid;

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::default(),
        environment: Environment::Testing,
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
        plan_cache: PlanCacheConfig {
            ttl_seconds: 60,
            max_entries: 100,
        },
        provider: ProviderConfig {
            synthetic_seed: Some(42),
        },
    }
}

/// Helper: full application router backed by the seeded synthetic provider
async fn test_app() -> Result<Router> {
    let context = AppContext::from_config(test_config()).await?;
    Ok(routes::router(Arc::new(context)))
}

/// Helper: GET a JSON endpoint
async fn get_json(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

/// Helper: PUT a JSON body
async fn put_json(app: &Router, uri: &str, body: &Value) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn fitness_body(mileage: f64) -> Value {
    json!({
        "goal": "general_fitness",
        "current_weekly_mileage": mileage,
        "intensity": "normal"
    })
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let app = test_app().await?;

    let (status, body) = get_json(&app, "/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "stride-coach");
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_readiness_endpoint() -> Result<()> {
    let app = test_app().await?;

    let (status, body) = get_json(&app, "/ready").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    Ok(())
}

#[tokio::test]
async fn test_weekly_mileage_endpoint() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, body) = get_json(&app, &format!("/api/users/{user_id}/mileage")).await?;

    assert_eq!(status, StatusCode::OK);
    // The synthetic athlete runs four to five times every week
    assert_eq!(body["confidence"], "high");
    let weeks = body["weeks_analyzed"].as_u64().unwrap();
    assert!((4..=9).contains(&weeks));
    assert!(body["calculated_mileage"].as_u64().unwrap() > 0);
    assert!(body["total_run_count"].as_u64().unwrap() >= 8);
    Ok(())
}

#[tokio::test]
async fn test_plan_requires_training_config() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, body) = get_json(&app, &format!("/api/users/{user_id}/plan")).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_plan_generation_after_config() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, _) = put_json(
        &app,
        &format!("/api/users/{user_id}/config"),
        &fitness_body(25.0),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, plan) = get_json(&app, &format!("/api/users/{user_id}/plan")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(plan["user_id"], user_id.to_string());
    let monday = WeeklyMileageCalculator::week_start(Utc::now().date_naive());
    assert_eq!(plan["week_start"], monday.to_string());
    assert_eq!(plan["week_summary"]["phase"], "build");

    // Recovery can derate volume, but never below the floor
    let total = plan["week_summary"]["total_miles"].as_u64().unwrap();
    assert!((15..=25).contains(&total));

    let schedule = plan["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 7);
    let scheduled: f64 = schedule
        .iter()
        .map(|day| day["miles"].as_f64().unwrap())
        .sum();
    assert!((scheduled - total as f64).abs() < 1e-9);
    for day in schedule {
        assert!(day["date"].is_string());
        assert!(day["kind"].is_string());
        assert!(day["description"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn test_plan_caching_and_forced_refresh() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();
    put_json(
        &app,
        &format!("/api/users/{user_id}/config"),
        &fitness_body(25.0),
    )
    .await?;

    let (_, first) = get_json(&app, &format!("/api/users/{user_id}/plan")).await?;
    let (_, cached) = get_json(&app, &format!("/api/users/{user_id}/plan")).await?;
    assert_eq!(cached["generated_at"], first["generated_at"]);

    let (status, refreshed) =
        get_json(&app, &format!("/api/users/{user_id}/plan?refresh=true")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(refreshed["generated_at"], first["generated_at"]);
    Ok(())
}

#[tokio::test]
async fn test_config_roundtrip() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();
    let body = json!({
        "goal": "race",
        "goal_date": "2025-11-02",
        "current_weekly_mileage": 32.0,
        "intensity": "aggressive"
    });

    let (status, saved) = put_json(&app, &format!("/api/users/{user_id}/config"), &body).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved, body);

    let (status, fetched) = get_json(&app, &format!("/api/users/{user_id}/config")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
    Ok(())
}

#[tokio::test]
async fn test_config_missing_user_is_not_found() -> Result<()> {
    let app = test_app().await?;

    let (status, body) = get_json(&app, &format!("/api/users/{}/config", Uuid::new_v4())).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_config_rejects_negative_mileage() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, body) = put_json(
        &app,
        &format!("/api/users/{user_id}/config"),
        &fitness_body(-5.0),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_config_rejects_excessive_mileage() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, body) = put_json(
        &app,
        &format!("/api/users/{user_id}/config"),
        &fitness_body(500.0),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    Ok(())
}

#[tokio::test]
async fn test_invalid_user_id_is_rejected() -> Result<()> {
    let app = test_app().await?;

    let request = Request::builder()
        .uri("/api/users/not-a-uuid/plan")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_modification_history_starts_empty() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();

    let (status, body) = get_json(&app, &format!("/api/users/{user_id}/modifications")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["modifications"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_config_update_invalidates_cached_plan() -> Result<()> {
    let app = test_app().await?;
    let user_id = Uuid::new_v4();
    let config_uri = format!("/api/users/{user_id}/config");
    let plan_uri = format!("/api/users/{user_id}/plan");

    put_json(&app, &config_uri, &fitness_body(20.0)).await?;
    let (_, before) = get_json(&app, &plan_uri).await?;
    let before_total = before["week_summary"]["total_miles"].as_u64().unwrap();
    assert!(before_total <= 20);

    put_json(&app, &config_uri, &fitness_body(40.0)).await?;
    let (_, after) = get_json(&app, &plan_uri).await?;

    // Regenerated without ?refresh=true: the update dropped the cache
    let after_total = after["week_summary"]["total_miles"].as_u64().unwrap();
    assert!(after_total >= 24);
    assert!(after_total > before_total);
    assert_ne!(after["generated_at"], before["generated_at"]);
    Ok(())
}

#[tokio::test]
async fn test_cors_headers_are_applied() -> Result<()> {
    let app = test_app().await?;

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap();
    assert_eq!(allow_origin, "*");
    Ok(())
}
