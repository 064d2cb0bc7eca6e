// ABOUTME: Route module organization for Stride Coach HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain plus the assembled router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Route module for Stride Coach
//!
//! Routes are organized by domain. Each domain module contains only route
//! definitions and thin handler functions that delegate to the service
//! layer; [`router`] assembles them with the shared middleware stack.

/// Health check and system status routes
pub mod health;
/// Weekly mileage, training plan, and modification history routes
pub mod plans;
/// Training configuration read/write routes
pub mod training_config;

pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use training_config::TrainingConfigRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::setup_cors;

/// Assemble the full application router with middleware applied
#[must_use]
pub fn router(context: Arc<AppContext>) -> Router {
    let cors = setup_cors(&context.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&context)))
        .merge(PlanRoutes::routes(Arc::clone(&context)))
        .merge(TrainingConfigRoutes::routes(context))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
