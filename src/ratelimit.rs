//! Sliding-window attempt limiting for unlock attempts.
//!
//! Tracks failed-unlock counts per logical action key, independent of
//! the cryptographic path. Each key moves through Fresh → Counting →
//! Exhausted; the window elapsing resets it to Fresh, as does an
//! explicit `clear` after a successful unlock.
//!
//! This is advisory local throttling — it slows casual guessing through
//! the normal UI path, and is no boundary against an attacker with
//! direct access to the stored envelope.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Default attempt budget per window.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default window length: 15 minutes.
pub fn default_window() -> Duration {
    Duration::minutes(15)
}

/// One rate-limited action's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub count: u32,
    #[serde(rename = "resetAt")]
    pub reset_at: DateTime<Utc>,
}

/// Outcome of a `check` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied { retry_at: DateTime<Utc> },
}

/// Where attempt records live.
///
/// The limiter defines the record shape and the transition rules; the
/// store decides the medium (in-memory for tests, a JSON file for the
/// CLI — see `storage::FsAttemptStore`).
pub trait AttemptStore {
    fn load(&self, key: &str) -> Result<Option<AttemptRecord>>;
    fn save(&mut self, key: &str, record: &AttemptRecord) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Sliding-window limiter over a pluggable store.
pub struct AttemptLimiter<S> {
    store: S,
}

impl<S: AttemptStore> AttemptLimiter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record an attempt against `key` and decide whether it may
    /// proceed. Counting is a side effect of the call itself: every
    /// allowed check consumes one attempt from the window's budget.
    pub fn check(&mut self, key: &str, max_attempts: u32, window: Duration) -> Result<Decision> {
        let now = Utc::now();

        let record = match self.store.load(key)? {
            // Window elapsed — restart fresh.
            Some(record) if now > record.reset_at => None,
            other => other,
        };

        match record {
            None => {
                self.store.save(
                    key,
                    &AttemptRecord {
                        count: 1,
                        reset_at: now + window,
                    },
                )?;
                Ok(Decision::Allowed)
            }
            Some(record) if record.count >= max_attempts => Ok(Decision::Denied {
                retry_at: record.reset_at,
            }),
            Some(mut record) => {
                record.count += 1;
                self.store.save(key, &record)?;
                Ok(Decision::Allowed)
            }
        }
    }

    /// Forget all attempts for `key` immediately. Called after a
    /// successful unlock so a legitimate user never inherits a partial
    /// window.
    pub fn clear(&mut self, key: &str) -> Result<()> {
        self.store.remove(key)
    }

    /// Attempts left in the current window, without consuming one.
    pub fn remaining(&self, key: &str, max_attempts: u32) -> Result<u32> {
        let now = Utc::now();
        Ok(match self.store.load(key)? {
            None => max_attempts,
            Some(record) if now > record.reset_at => max_attempts,
            Some(record) => max_attempts.saturating_sub(record.count),
        })
    }
}

/// In-memory attempt store, used in tests and library embedding.
#[derive(Debug, Default)]
pub struct MemoryAttemptStore {
    records: HashMap<String, AttemptRecord>,
}

impl MemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptStore for MemoryAttemptStore {
    fn load(&self, key: &str) -> Result<Option<AttemptRecord>> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, record: &AttemptRecord) -> Result<()> {
        self.records.insert(key.to_string(), record.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}
