// ABOUTME: Main library entry point for the Stride Coach training plan service
// ABOUTME: REST API turning fitness tracker data into adaptive weekly training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Coach
//!
//! A service that turns raw fitness tracker data (Garmin, Strava) into a
//! personalized weekly training plan. The computational core lives in the
//! `stride-intelligence` crate as pure functions; this crate provides the
//! orchestration around it: provider fetch, caching, settings storage,
//! modification history, and the REST surface.
//!
//! ## Architecture
//!
//! - **Providers**: the [`providers::FitnessProvider`] seam plus the seeded
//!   synthetic implementation
//! - **Services**: [`services::PlanService`] orchestrating fetch, analysis,
//!   generation, caching, and persistence
//! - **Cache**: generated plans cached per (user, week) with a TTL
//! - **Storage**: in-memory training config and modification stores behind
//!   trait seams
//! - **Routes**: thin axum handlers over the service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use stride_coach::config::environment::ServerConfig;
//! use stride_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Stride Coach configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Cache abstraction for generated plans with pluggable backends
pub mod cache;

/// Configuration management from environment variables
pub mod config;

/// Centralized dependency injection container
pub mod context;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware applied when assembling the router
pub mod middleware;

/// Fitness provider seam and the synthetic implementation
pub mod providers;

/// HTTP routes organized by domain
pub mod routes;

/// Domain service layer orchestrating the plan pipeline
pub mod services;

/// Persistence seams for settings and modification history
pub mod storage;
