//! In-memory per-key rate limiting.
//!
//! Best-effort only: counts live in the instance, reset with it, and do
//! not coordinate across processes. Construct one limiter per concern
//! and thread it through explicitly; there is no global instance.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window event counter keyed by string.
#[derive(Debug)]
pub struct RateLimiter {
    max_events: u32,
    window: Duration,
    events: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_events: u32, window: Duration) -> Self {
        Self { max_events, window, events: Mutex::new(HashMap::new()) }
    }

    /// Record an event for `key`; returns `false` when the key already
    /// has `max_events` within the window.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut events = self.events.lock().expect("rate limiter lock poisoned");

        // Sweep expired events everywhere so keys that are never checked
        // again do not accumulate. Key counts stay small (per-process,
        // per-window), so the full pass is cheap.
        events.retain(|_, timestamps| {
            timestamps.retain(|t| now.duration_since(*t) < self.window);
            !timestamps.is_empty()
        });

        let timestamps = events.entry(key.to_string()).or_default();
        if timestamps.len() >= self.max_events as usize {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// Number of keys currently holding unexpired events.
    pub fn tracked_keys(&self) -> usize {
        self.events.lock().expect("rate limiter lock poisoned").len()
    }
}
