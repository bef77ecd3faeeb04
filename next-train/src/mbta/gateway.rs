//! Rate-limit-aware request gateway.
//!
//! Every API call goes through [`Gateway::get_data`], which issues one GET,
//! reads the rate-limit headers and sleeps in proportion to how little quota
//! is left before handing back the document's `data` array. A 429 is
//! retried a bounded number of times, after the window resets when the
//! response says when that is, or after a fixed delay otherwise.

use std::future::Future;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::clock::Clock;

use super::config::MbtaConfig;
use super::error::ApiError;
use super::types::{Document, Resource};

const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// A response as the gateway sees it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// One HTTP round trip.
pub trait Transport {
    fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// The real transport, backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the configured timeout.
    pub fn new(config: &MbtaConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, ApiError> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Quota information from a response's rate-limit headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the current window ends.
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Read `x-ratelimit-remaining` and `x-ratelimit-reset` (epoch seconds).
    ///
    /// Returns `None` unless both are present and well formed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = parse_header::<u32>(headers, REMAINING_HEADER)?;
        let reset = parse_header::<i64>(headers, RESET_HEADER)?;
        let reset = DateTime::<Utc>::from_timestamp(reset, 0)?;

        Some(Self { remaining, reset })
    }
}

fn parse_header<T: std::str::FromStr>(headers: &HeaderMap, key: &str) -> Option<T> {
    headers.get(key)?.to_str().ok()?.trim().parse().ok()
}

/// Issues throttled GET requests against the MBTA API.
#[derive(Debug, Clone)]
pub struct Gateway<T, C> {
    transport: T,
    clock: C,
    config: MbtaConfig,
}

impl<T: Transport, C: Clock> Gateway<T, C> {
    pub fn new(transport: T, clock: C, config: MbtaConfig) -> Self {
        Self {
            transport,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &MbtaConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// GET `url` and return the `data` array of the JSON:API document.
    ///
    /// Sleeps before returning as part of normal operation; see
    /// [`MbtaConfig::backoff`]. Any status other than 200 or 429 is an
    /// error and is not retried.
    pub async fn get_data<A: DeserializeOwned>(
        &self,
        url: &Url,
    ) -> Result<Vec<Resource<A>>, ApiError> {
        let mut rate_limited = 0;

        loop {
            let response = self.transport.get(url).await?;

            match response.status {
                StatusCode::OK => {
                    self.throttle(&response.headers).await;
                    return decode(&response.body);
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    rate_limited += 1;
                    if rate_limited > self.config.max_rate_limit_retries {
                        return Err(ApiError::RateLimited {
                            attempts: rate_limited,
                        });
                    }
                    warn!(url = %url, attempt = rate_limited, "rate limited, retrying");
                    self.pause_after_rate_limit(&response.headers).await;
                }
                status => {
                    return Err(ApiError::UnexpectedStatus {
                        status: status.as_u16(),
                    });
                }
            }
        }
    }

    /// Pause according to the quota left after a successful request.
    ///
    /// With nothing left we first wait out the window, then take the
    /// proportional pause as usual.
    async fn throttle(&self, headers: &HeaderMap) {
        let Some(limit) = RateLimit::from_headers(headers) else {
            debug!("no rate limit headers, not throttling");
            return;
        };

        if limit.remaining == 0 {
            self.wait_for_reset(limit.reset).await;
        }

        let pause = self.config.backoff(limit.remaining);
        debug!(remaining = limit.remaining, ?pause, "throttling");
        if !pause.is_zero() {
            self.clock.sleep(pause).await;
        }
    }

    /// Wait out a 429: until the window resets if the response says when,
    /// otherwise the fixed retry delay.
    async fn pause_after_rate_limit(&self, headers: &HeaderMap) {
        match RateLimit::from_headers(headers) {
            Some(limit) if limit.reset > self.clock.now() => {
                self.wait_for_reset(limit.reset).await;
            }
            _ => self.clock.sleep(self.config.rate_limit_delay).await,
        }
    }

    async fn wait_for_reset(&self, reset: DateTime<Utc>) {
        let started = self.clock.now();
        let give_up = started
            + chrono::Duration::from_std(self.config.max_reset_wait)
                .unwrap_or_else(|_| chrono::Duration::zero());

        if started < reset {
            debug!(%reset, "quota exhausted, waiting for window reset");
        }

        while self.clock.now() < reset {
            if self.clock.now() >= give_up {
                warn!(%reset, "gave up waiting for rate limit reset");
                return;
            }
            self.clock.sleep(self.config.reset_poll_interval).await;
        }
    }
}

fn decode<A: DeserializeOwned>(body: &str) -> Result<Vec<Resource<A>>, ApiError> {
    let document: Document<A> = serde_json::from_str(body).map_err(|e| ApiError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    Ok(document.data)
}
