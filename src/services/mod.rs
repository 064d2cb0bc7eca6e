// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Orchestrates providers, the analytics kernel, caching, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Domain service layer
//!
//! Business logic extracted from route handlers. Handlers stay thin: they
//! parse the request, call a service method, and map the result to a
//! response. The services own orchestration across the provider, the
//! analytics kernel, the plan cache, and the persistence stores.

/// Plan generation pipeline: fetch, analyze, generate, cache, record
pub mod plan_service;

pub use plan_service::PlanService;
