//! Scripted executor, recording sink, and recording observer shared by
//! collector integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lockscope_collector::query::LockQueryExecutor;
use lockscope_collector::sampler::SampleObserver;
use lockscope_collector::sink::{GaugeSpec, MetricsSink};
use lockscope_core::{GaugeCell, LockScopeError, Result, SampleRow};

/// One scripted query round.
pub enum ScriptedRound {
    Rows(Vec<SampleRow>),
    Fail,
}

/// Executor replaying a fixed script; exhausted scripts return empty row sets.
pub struct ScriptedExecutor {
    rounds: Mutex<VecDeque<ScriptedRound>>,
    calls: AtomicUsize,
}

impl ScriptedExecutor {
    pub fn new(rounds: Vec<ScriptedRound>) -> Self {
        Self {
            rounds: Mutex::new(rounds.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LockQueryExecutor for ScriptedExecutor {
    async fn fetch_fast_path_counts(&self, _relname: &str) -> Result<Vec<SampleRow>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.rounds.lock().unwrap().pop_front() {
            Some(ScriptedRound::Rows(rows)) => Ok(rows),
            Some(ScriptedRound::Fail) => {
                Err(LockScopeError::Query("scripted failure".into()))
            }
            None => Ok(vec![]),
        }
    }
}

/// Sink recording every registration it sees.
#[derive(Default)]
pub struct RecordingSink {
    registered: Mutex<Vec<(String, Vec<(String, String)>, Arc<GaugeCell>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> usize {
        self.registered.lock().unwrap().len()
    }

    /// Value of the registered series matching `tags` exactly (sorted by key).
    pub fn value_for(&self, tags: &[(&str, &str)]) -> Option<i64> {
        let mut want: Vec<(String, String)> = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        want.sort();
        self.registered
            .lock()
            .unwrap()
            .iter()
            .find(|(_, t, _)| *t == want)
            .map(|(_, _, cell)| cell.get())
    }
}

impl MetricsSink for RecordingSink {
    fn register_gauge(&self, spec: GaugeSpec, cell: Arc<GaugeCell>) {
        let mut tags = spec.tags;
        tags.sort();
        self.registered
            .lock()
            .unwrap()
            .push((spec.name.to_string(), tags, cell));
    }
}

/// Observer counting applied/failed rounds.
#[derive(Default)]
pub struct RecordingObserver {
    applied: AtomicUsize,
    failed: AtomicUsize,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }
}

impl SampleObserver for RecordingObserver {
    fn on_applied(&self, _relname: &str, _rows: usize) {
        self.applied.fetch_add(1, Ordering::SeqCst);
    }

    fn on_failed(&self, _relname: &str, _error: &LockScopeError) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn row(mode: &str, fastpath: bool, count: i64) -> SampleRow {
    SampleRow {
        mode: mode.to_string(),
        fastpath,
        count,
    }
}

/// Test diagnostics: honor RUST_LOG if set, stay quiet otherwise.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
