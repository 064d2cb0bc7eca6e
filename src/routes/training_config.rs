// ABOUTME: Route handlers for reading and updating a user's training configuration
// ABOUTME: The API seam the external settings UI talks to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Training configuration routes
//!
//! Settings live behind the same service seam as everything else. A PUT
//! drops the user's cached plans so the next plan request reflects the new
//! configuration.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use stride_core::errors::AppError;
use stride_core::models::TrainingConfig;
use tracing::info;
use uuid::Uuid;

use crate::context::AppContext;

/// Training configuration routes implementation
pub struct TrainingConfigRoutes;

impl TrainingConfigRoutes {
    /// Create the configuration read/write routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/config",
                get(Self::get_config).put(Self::update_config),
            )
            .with_state(context)
    }

    async fn get_config(
        State(context): State<Arc<AppContext>>,
        Path(user_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let config = context.plan_service.get_config(user_id).await?;
        Ok((StatusCode::OK, Json(config)).into_response())
    }

    async fn update_config(
        State(context): State<Arc<AppContext>>,
        Path(user_id): Path<Uuid>,
        Json(config): Json<TrainingConfig>,
    ) -> Result<Response, AppError> {
        let saved = context.plan_service.update_config(user_id, config).await?;
        info!(%user_id, "Training configuration saved");
        Ok((StatusCode::OK, Json(saved)).into_response())
    }
}
