//! Configuration for the MBTA client and its request gateway.

use std::time::Duration;

/// Default base URL for the MBTA v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// Base URL for the API (defaults to production MBTA)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Back-off when quota is exhausted; the pause after a successful
    /// request is `backoff_ceiling_secs - remaining / backoff_divisor`,
    /// clamped at zero.
    pub backoff_ceiling_secs: f64,

    /// See `backoff_ceiling_secs`.
    pub backoff_divisor: f64,

    /// Wait before retrying a 429 that doesn't say when the window resets.
    pub rate_limit_delay: Duration,

    /// How many 429s in a row we retry before giving up. With the fixed
    /// delay this covers more than one 60 s rate-limit window.
    pub max_rate_limit_retries: u32,

    /// How often to check the clock while waiting for the window to reset.
    pub reset_poll_interval: Duration,

    /// Upper bound on the reset wait, in case the reset header is bogus.
    pub max_reset_wait: Duration,
}

impl MbtaConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the 429 retry budget.
    pub fn with_max_rate_limit_retries(mut self, n: u32) -> Self {
        self.max_rate_limit_retries = n;
        self
    }

    /// Set the cap on waiting for a rate-limit window to reset.
    pub fn with_max_reset_wait(mut self, wait: Duration) -> Self {
        self.max_reset_wait = wait;
        self
    }

    /// Pause after a successful request, given the remaining quota.
    ///
    /// Grows linearly as quota shrinks: 5 s at zero remaining, nothing once
    /// 20 or more requests are left (with the defaults).
    pub fn backoff(&self, remaining: u32) -> Duration {
        let secs = self.backoff_ceiling_secs - remaining as f64 / self.backoff_divisor;
        Duration::from_secs_f64(secs.max(0.0))
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            backoff_ceiling_secs: 5.0,
            backoff_divisor: 4.0,
            rate_limit_delay: Duration::from_secs(5),
            max_rate_limit_retries: 15,
            reset_poll_interval: Duration::from_secs(1),
            max_reset_wait: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = MbtaConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.rate_limit_delay, Duration::from_secs(5));
        assert_eq!(config.max_rate_limit_retries, 15);
        assert_eq!(config.reset_poll_interval, Duration::from_secs(1));
        assert_eq!(config.max_reset_wait, Duration::from_secs(60));
    }

    #[test]
    fn config_builder() {
        let config = MbtaConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .with_max_rate_limit_retries(2)
            .with_max_reset_wait(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_rate_limit_retries, 2);
        assert_eq!(config.max_reset_wait, Duration::from_secs(5));
    }

    #[test]
    fn default_429_budget_outlasts_a_window() {
        let config = MbtaConfig::default();
        assert!(config.rate_limit_delay * config.max_rate_limit_retries > Duration::from_secs(60));
    }

    #[test]
    fn backoff_is_inverse_linear() {
        let config = MbtaConfig::default();

        assert_eq!(config.backoff(0), Duration::from_secs(5));
        assert_eq!(config.backoff(2), Duration::from_secs_f64(4.5));
        assert_eq!(config.backoff(10), Duration::from_secs_f64(2.5));
        assert_eq!(config.backoff(20), Duration::ZERO);
        assert_eq!(config.backoff(1000), Duration::ZERO);
    }
}
