//! Metrics sink seam.
//!
//! The collector registers each gauge cell exactly once with a sink; the sink
//! reads cell values concurrently whenever it is scraped or flushed. The
//! bundled [`PromTextSink`] renders Prometheus text exposition format; hosts
//! with their own registry implement [`MetricsSink`] instead.

mod prom;

use std::sync::Arc;

use lockscope_core::GaugeCell;

pub use prom::PromTextSink;

/// Registration-time description of one gauge series.
#[derive(Debug, Clone)]
pub struct GaugeSpec {
    /// Fixed metric name shared by all series of one family.
    pub name: &'static str,
    /// Help text for the family.
    pub help: &'static str,
    /// Label pairs, sorted by key for deterministic ordering.
    pub tags: Vec<(String, String)>,
}

/// External metrics registry seam.
///
/// `register_gauge` is called at most once per distinct tag set for the
/// lifetime of a bound instance; the sink keeps the `Arc<GaugeCell>` and
/// reads it on every scrape.
pub trait MetricsSink: Send + Sync {
    fn register_gauge(&self, spec: GaugeSpec, cell: Arc<GaugeCell>);
}
