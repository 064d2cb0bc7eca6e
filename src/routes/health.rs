// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness is static; readiness exercises the plan cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Health check routes for service monitoring
//!
//! `/health` reports liveness and always succeeds while the process runs;
//! `/ready` verifies the service's collaborators are serving before a load
//! balancer sends traffic.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use stride_core::errors::AppError;

use crate::context::AppContext;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(context)
    }

    async fn health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": "stride-coach",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready(State(context): State<Arc<AppContext>>) -> Result<Response, AppError> {
        context.plan_service.readiness().await?;
        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
            .into_response())
    }
}
