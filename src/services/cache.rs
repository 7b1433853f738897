//! TTL cache for fetched financial histories.
//!
//! Keyed by normalized ticker; entries expire on read so a stale history is
//! never served past its TTL.

use crate::sources::yahoo::FinancialHistory;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Thread-safe per-ticker cache of fundamentals with TTL expiry.
pub struct FundamentalsCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

struct CacheEntry {
    history: FinancialHistory,
    expires_at: Instant,
}

impl FundamentalsCache {
    /// Create a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Get the cached history for a ticker, dropping it if expired.
    pub fn get(&self, ticker: &str) -> Option<FinancialHistory> {
        let entry = self.entries.get(ticker)?;
        if entry.expires_at > Instant::now() {
            Some(entry.history.clone())
        } else {
            drop(entry);
            self.entries.remove(ticker);
            None
        }
    }

    /// Store a fetched history for a ticker.
    pub fn insert(&self, ticker: String, history: FinancialHistory) {
        self.entries.insert(
            ticker,
            CacheEntry {
                history,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Number of entries currently held (including expired, until read).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
