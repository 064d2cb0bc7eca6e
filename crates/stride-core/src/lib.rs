// ABOUTME: Core types for the Stride Coach training platform
// ABOUTME: Foundation crate with shared models and the unified error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types for the Stride Coach training plan
//! service. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **models**: Core data models (`Activity`, `DailyHealth`, `TrainingPlan`, ...)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Activity, DailyHealth, TrainingConfig, TrainingPlan, etc.)
pub mod models;
