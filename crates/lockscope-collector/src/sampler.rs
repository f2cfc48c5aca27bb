//! One query round: fetch rows, overwrite gauge cells.

use std::sync::Arc;

use lockscope_core::LockScopeError;

use crate::query::LockQueryExecutor;
use crate::store::CategoryStore;

/// Result of one sampling round.
///
/// Failures are terminal for the round only: nothing propagates, the next
/// scheduled tick is the sole recovery mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// All rows applied to their cells.
    Applied { rows: usize },
    /// Query or row extraction failed; every gauge keeps its previous value.
    Failed,
}

/// Observer for sampling rounds.
///
/// Injected so hosts and tests can see suppressed failures; the sampler never
/// surfaces them as errors.
pub trait SampleObserver: Send + Sync {
    fn on_applied(&self, relname: &str, rows: usize);
    fn on_failed(&self, relname: &str, error: &LockScopeError);
}

/// Default observer: log and move on.
pub struct TracingObserver;

impl SampleObserver for TracingObserver {
    fn on_applied(&self, relname: &str, rows: usize) {
        tracing::debug!(relname, rows, "fast-path lock sample applied");
    }

    fn on_failed(&self, relname: &str, error: &LockScopeError) {
        tracing::warn!(relname, code = error.code(), %error, "fast-path lock sample failed; gauges keep previous values");
    }
}

/// Executes one query round and updates the category store.
pub struct Sampler {
    executor: Arc<dyn LockQueryExecutor>,
    relname: String,
    store: Arc<CategoryStore>,
    observer: Arc<dyn SampleObserver>,
}

impl Sampler {
    pub fn new(
        executor: Arc<dyn LockQueryExecutor>,
        relname: String,
        store: Arc<CategoryStore>,
        observer: Arc<dyn SampleObserver>,
    ) -> Self {
        Self {
            executor,
            relname,
            store,
            observer,
        }
    }

    pub fn relname(&self) -> &str {
        &self.relname
    }

    /// Run exactly one round.
    ///
    /// Rows are applied incrementally as the result set is walked; readers may
    /// observe a partially-applied round across categories. Each write is an
    /// unconditional overwrite: last writer for a tick wins.
    pub async fn sample(&self) -> SampleOutcome {
        match self.executor.fetch_fast_path_counts(&self.relname).await {
            Ok(rows) => {
                let n = rows.len();
                for row in rows {
                    self.store.get_or_create(&row.mode, row.fastpath).set(row.count);
                }
                self.observer.on_applied(&self.relname, n);
                SampleOutcome::Applied { rows: n }
            }
            Err(e) => {
                self.observer.on_failed(&self.relname, &e);
                SampleOutcome::Failed
            }
        }
    }
}
