//! Entry point wiring store, sampler, and scheduler to a metrics sink.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use lockscope_core::{LockScopeError, Result};

use crate::config::CollectorConfig;
use crate::query::LockQueryExecutor;
use crate::sampler::{SampleObserver, Sampler, TracingObserver};
use crate::scheduler::{self, SamplerTask};
use crate::sink::MetricsSink;
use crate::store::CategoryStore;

/// Publishes fast-path lock counts for one relation as live gauges.
///
/// One instance binds at most once. With an interval configured, `bind`
/// spawns the recurring loop and returns; without one, it awaits a single
/// sample round inline. Either way a sampling failure never surfaces to the
/// caller; only misuse does.
pub struct FastPathLockMetrics {
    executor: Arc<dyn LockQueryExecutor>,
    relname: String,
    interval: Option<Duration>,
    observer: Arc<dyn SampleObserver>,
    bound: AtomicBool,
    task: Mutex<Option<SamplerTask>>,
}

impl FastPathLockMetrics {
    pub fn new(
        executor: Arc<dyn LockQueryExecutor>,
        relname: impl Into<String>,
        interval: Option<Duration>,
    ) -> Self {
        Self {
            executor,
            relname: relname.into(),
            interval,
            observer: Arc::new(TracingObserver),
            bound: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    /// Build from a validated [`CollectorConfig`].
    pub fn from_config(executor: Arc<dyn LockQueryExecutor>, cfg: &CollectorConfig) -> Self {
        Self::new(executor, cfg.relname.clone(), cfg.interval())
    }

    /// Replace the default logging observer (tests inject recorders here).
    pub fn with_observer(mut self, observer: Arc<dyn SampleObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Wire the category store to `sink` and start sampling.
    ///
    /// One-shot mode (no interval): exactly one sample round completes,
    /// success or suppressed failure, before this returns. Recurring mode:
    /// the loop task is spawned and owned by this instance; the first sample
    /// fires only after the first interval.
    ///
    /// Errors only on reuse: a second call returns
    /// [`LockScopeError::AlreadyBound`].
    pub async fn bind(&self, sink: Arc<dyn MetricsSink>) -> Result<()> {
        if self.bound.swap(true, Ordering::SeqCst) {
            return Err(LockScopeError::AlreadyBound);
        }

        let store = Arc::new(CategoryStore::new(self.relname.clone(), sink));
        let sampler = Sampler::new(
            Arc::clone(&self.executor),
            self.relname.clone(),
            store,
            Arc::clone(&self.observer),
        );

        match self.interval {
            None => {
                tracing::info!(relname = %self.relname, "fast-path lock metrics: one-shot sample");
            }
            Some(every) => {
                tracing::info!(
                    relname = %self.relname,
                    interval_ms = every.as_millis() as u64,
                    "fast-path lock metrics: recurring sampler starting"
                );
            }
        }

        if let Some(task) = scheduler::start(sampler, self.interval).await {
            *self.task.lock().await = Some(task);
        }
        Ok(())
    }

    /// Stop the recurring loop and wait for it to finish.
    ///
    /// Idempotent; a no-op in one-shot mode or before `bind`.
    pub async fn shutdown(&self) {
        if let Some(task) = self.task.lock().await.take() {
            task.stop().await;
        }
    }
}
