//! In-memory rate limiting for search requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<Uuid, VecDeque<Instant>>`,
//! keyed by the caller-supplied `x-client-id`. This is the service-side
//! rendition of the original UI's 500 ms input debounce: it bounds request
//! rate while an operator types, rather than coalescing keystrokes.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use uuid::Uuid;

const DEFAULT_SEARCH_LIMIT: usize = 4;
const DEFAULT_SEARCH_WINDOW_MS: u64 = 2000;

#[derive(Clone, Copy)]
struct RateLimitConfig {
    limit: usize,
    window: Duration,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            limit: env_parse("SEARCH_RATE_LIMIT", DEFAULT_SEARCH_LIMIT),
            window: Duration::from_millis(env_parse("SEARCH_RATE_WINDOW_MS", DEFAULT_SEARCH_WINDOW_MS)),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("search rate limit exceeded (max {limit} requests/{window_ms}ms)")]
    Exceeded { limit: usize, window_ms: u64 },
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<Uuid, VecDeque<Instant>>>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            config: RateLimitConfig::from_env(),
        }
    }

    /// Check the client's sliding window, then record the request.
    ///
    /// # Errors
    ///
    /// Returns `Exceeded` when the client is over its window budget.
    pub fn check_and_record(&self, client_id: Uuid) -> Result<(), RateLimitError> {
        self.check_and_record_at(client_id, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client_id: Uuid, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        let deque = inner.entry(client_id).or_default();
        prune_window(deque, now, cfg.window);
        if deque.len() >= cfg.limit {
            return Err(RateLimitError::Exceeded {
                limit: cfg.limit,
                window_ms: u64::try_from(cfg.window.as_millis()).unwrap_or(u64::MAX),
            });
        }

        deque.push_back(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
