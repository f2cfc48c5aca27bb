//! Lock category identity and per-row sample records.

use serde::Deserialize;

/// Identity of one gauge series: lock mode name plus the fast-path flag.
///
/// Insertion order is irrelevant; the pair itself is the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey {
    /// Lock mode name as reported by the lock manager (e.g. `AccessShareLock`).
    pub mode: String,
    /// Whether the entry was taken via the fast path.
    pub fastpath: bool,
}

impl CategoryKey {
    pub fn new(mode: impl Into<String>, fastpath: bool) -> Self {
        Self {
            mode: mode.into(),
            fastpath,
        }
    }
}

/// One query result row: (mode, fastpath, count).
///
/// Transient: consumed by the sampler as the result set is walked, never
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleRow {
    pub mode: String,
    pub fastpath: bool,
    pub count: i64,
}

impl SampleRow {
    pub fn key(&self) -> CategoryKey {
        CategoryKey::new(self.mode.clone(), self.fastpath)
    }
}
