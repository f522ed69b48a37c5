//! Visit counter for the static file server.
//!
//! Counts requests served under `/app` for the admin metrics page. The counter lives in
//! application state rather than a global; clones share one underlying atomic.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Process-wide count of static file requests.
///
/// Cheap to clone; every clone observes and updates the same value. Increments never
/// lose updates under concurrent access. No other state is synchronized through the
/// counter, so relaxed ordering is used throughout.
#[derive(Clone, Debug, Default)]
pub struct VisitCounter {
    hits: Arc<AtomicU64>,
}

impl VisitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit.
    ///
    /// # Returns
    /// - `u64` - Count after this visit
    pub fn increment(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current number of recorded visits.
    pub fn load(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Sets the count back to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
