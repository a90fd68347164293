// ABOUTME: Garmin Connect client module - trait seam, token lifecycle, HTTP client
// ABOUTME: Everything that talks to the upstream service lives under this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Garmin Connect API access
//!
//! The [`api::GarminApi`] trait is the seam the tool handlers call through;
//! [`client::GarminClient`] is the production implementation with on-disk
//! token persistence and refresh-on-expiry.

/// Client trait with one method per upstream endpoint
pub mod api;

/// Authenticated Garmin Connect HTTP client
pub mod client;

/// OAuth token model, on-disk store, and token endpoint calls
pub mod token;

pub use api::GarminApi;
pub use client::{GarminClient, GarminConfig};
pub use token::{OAuth2Token, TokenStore};
