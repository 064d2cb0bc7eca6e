// ABOUTME: Common benchmark utilities and test fixtures for performance testing
// ABOUTME: Provides reusable data generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Common benchmark utilities and test fixtures.
//!
//! Provides deterministic data generators for reproducible performance
//! measurements.

pub mod fixtures;
