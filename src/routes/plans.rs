// ABOUTME: Route handlers for weekly mileage, training plans, and modification history
// ABOUTME: Thin axum handlers delegating to PlanService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Plan pipeline routes
//!
//! The read surface of the planning pipeline: the mileage summary, the
//! current week's plan, and the history of recovery-driven adjustments.
//! Handlers parse the request and delegate; `PlanService` owns the logic.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use stride_core::errors::AppError;
use tracing::debug;
use uuid::Uuid;

use crate::context::AppContext;

#[derive(Debug, Deserialize)]
struct PlanQuery {
    /// `?refresh=true` bypasses the cache and regenerates
    #[serde(default)]
    refresh: bool,
}

/// Plan pipeline routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the mileage, plan, and modification-history routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/api/users/:user_id/mileage", get(Self::weekly_mileage))
            .route("/api/users/:user_id/plan", get(Self::training_plan))
            .route(
                "/api/users/:user_id/modifications",
                get(Self::modification_history),
            )
            .with_state(context)
    }

    async fn weekly_mileage(
        State(context): State<Arc<AppContext>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let summary = context.plan_service.weekly_mileage(user_id).await?;
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    async fn training_plan(
        State(context): State<Arc<AppContext>>,
        Path(user_id): Path<Uuid>,
        Query(query): Query<PlanQuery>,
    ) -> Result<Response, AppError> {
        debug!(%user_id, refresh = query.refresh, "Training plan requested");
        let plan = context
            .plan_service
            .training_plan(user_id, query.refresh)
            .await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    async fn modification_history(
        State(context): State<Arc<AppContext>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let modifications = context.plan_service.modification_history(user_id).await?;
        let count = modifications.len();
        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "modifications": modifications,
                "count": count
            })),
        )
            .into_response())
    }
}
