// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment variables, deployment modes, and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

//! Configuration module for the Stride Coach server
//!
//! Server settings come exclusively from environment variables; there is no
//! configuration file layer. Plan tuning lives in `stride_intelligence` and
//! per-user training configuration is stored at runtime.

/// Environment and server configuration
pub mod environment;
