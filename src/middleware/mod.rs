// ABOUTME: HTTP middleware for the API surface
// ABOUTME: CORS configuration applied when assembling the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

pub mod cors;

pub use cors::setup_cors;
