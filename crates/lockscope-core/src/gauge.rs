//! Live gauge cells (single writer, concurrent readers).

use std::sync::atomic::{AtomicI64, Ordering};

/// A mutable numeric cell holding the latest observed count for one category.
///
/// Written exclusively by the sampling path, read concurrently by the metrics
/// sink. Single independent scalar, so relaxed ordering on both sides.
#[derive(Debug, Default)]
pub struct GaugeCell {
    value: AtomicI64,
}

impl GaugeCell {
    /// New cell initialized to zero.
    pub fn new() -> Self {
        Self {
            value: AtomicI64::new(0),
        }
    }

    /// Unconditional overwrite with the latest observation.
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    /// Latest observed value.
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}
