//! lockscope collector library entry.
//!
//! This crate wires the query executor, category store, sampler, scheduler,
//! and metrics sink into a cohesive collection stack. It is intended to be
//! consumed by hosting processes (which own the connection pool and the
//! metrics endpoint) and by integration tests.

pub mod binder;
pub mod config;
pub mod query;
pub mod sampler;
pub mod scheduler;
pub mod sink;
pub mod store;

pub use binder::FastPathLockMetrics;
pub use config::CollectorConfig;
pub use query::LockQueryExecutor;
pub use sampler::{SampleObserver, SampleOutcome, Sampler, TracingObserver};
pub use sink::{GaugeSpec, MetricsSink, PromTextSink};
pub use store::CategoryStore;
