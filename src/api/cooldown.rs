//! Cooldown gate between outbound network calls.
//!
//! Tracks the instant of the last fetch and blocks new calls until the
//! minimum interval has elapsed. One instance per API client; this is not a
//! multi-process coordinator. The wait is an explicit sleep until the
//! deadline rather than a spin loop.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Tracks the last outbound fetch and the minimum spacing between fetches.
pub struct Cooldown {
    /// `None` until the first fetch — a fresh client may fetch immediately.
    last_fetch: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl Cooldown {
    /// Create a cooldown with the given minimum interval between fetches.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_fetch: Mutex::new(None),
            min_interval,
        }
    }

    /// Return `true` iff more than the minimum interval has passed since the
    /// last `reset()`. Always `true` before the first fetch.
    pub fn is_elapsed(&self) -> bool {
        match self.deadline() {
            Some(deadline) => Instant::now() > deadline,
            None => true,
        }
    }

    /// Record that a network call just completed (success or failure).
    pub fn reset(&self) {
        let mut guard = self.last_fetch.lock().expect("cooldown lock poisoned");
        *guard = Some(Instant::now());
    }

    /// Sleep until the cooldown has elapsed. Returns immediately when the
    /// deadline has already passed.
    pub async fn wait_ready(&self) {
        while let Some(deadline) = self.deadline() {
            let now = Instant::now();
            if now > deadline {
                break;
            }
            tokio::time::sleep(deadline - now).await;
        }
    }

    /// The instant after which the next fetch is allowed, or `None` when no
    /// fetch has happened yet.
    fn deadline(&self) -> Option<Instant> {
        let guard = self.last_fetch.lock().expect("cooldown lock poisoned");
        guard.map(|last| last + self.min_interval)
    }
}
