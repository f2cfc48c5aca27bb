//! Query execution seam.
//!
//! The collector never talks to the database directly; it asks a
//! [`LockQueryExecutor`] for one round of (mode, fastpath, count) rows. The
//! bundled Postgres executor lives behind the `postgres` feature.

#[cfg(feature = "postgres")]
mod postgres;

use async_trait::async_trait;

use lockscope_core::{Result, SampleRow};

#[cfg(feature = "postgres")]
pub use postgres::{PgLockQueryExecutor, FAST_PATH_LOCKS_SQL};

/// One query round against the lock manager's fast-path counters.
///
/// Implementations own the connection source. The future returned by
/// `fetch_fast_path_counts` must be cancellation-safe: the scheduler drops it
/// when a stop signal arrives mid-query.
#[async_trait]
pub trait LockQueryExecutor: Send + Sync {
    async fn fetch_fast_path_counts(&self, relname: &str) -> Result<Vec<SampleRow>>;
}
