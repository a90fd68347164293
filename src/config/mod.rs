// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Environment-only configuration; no config files beyond .env
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based configuration loading
pub mod environment;
