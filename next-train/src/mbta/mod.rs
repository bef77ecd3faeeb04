//! MBTA v3 API client.
//!
//! This module provides an HTTP client for the MBTA's public v3 API, which
//! serves routes, stops and real-time departure predictions.
//!
//! Key characteristics of the API:
//! - Responses are JSON:API documents; we read the `data` array only
//! - Unauthenticated clients get a small per-minute quota, reported in
//!   `x-ratelimit-remaining` / `x-ratelimit-reset` headers
//! - Predictions carry RFC 3339 timestamps in Boston local time

mod client;
mod config;
mod convert;
mod error;
mod gateway;
#[cfg(test)]
pub mod mock;
mod types;

pub use client::MbtaClient;
pub use config::{DEFAULT_BASE_URL, MbtaConfig};
pub use convert::ConversionError;
pub use error::ApiError;
pub use gateway::{Gateway, HttpTransport, RateLimit, RawResponse, Transport};
pub use types::{Document, PredictionAttributes, Resource, RouteAttributes, StopAttributes};
