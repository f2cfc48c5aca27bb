//! Prometheus text sink backed by `DashMap`.
//!
//! Gauge cells are registered under (family name, sorted label set) and
//! rendered on demand in text exposition format. No external metrics crate is
//! used; cells are atomics owned jointly with the store.

use std::fmt::Write;
use std::sync::Arc;

use dashmap::DashMap;

use lockscope_core::GaugeCell;

use crate::sink::{GaugeSpec, MetricsSink};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

struct GaugeFamily {
    help: &'static str,
    cells: DashMap<Vec<(String, String)>, Arc<GaugeCell>>,
}

/// In-process gauge registry rendering Prometheus text format.
#[derive(Default)]
pub struct PromTextSink {
    families: DashMap<&'static str, GaugeFamily>,
}

impl PromTextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered series across all families.
    pub fn series_count(&self) -> usize {
        self.families.iter().map(|f| f.cells.len()).sum()
    }

    /// Render all registered gauges in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for family in self.families.iter() {
            let name = *family.key();
            let _ = writeln!(out, "# HELP {} {}", name, family.help);
            let _ = writeln!(out, "# TYPE {} gauge", name);
            for r in family.cells.iter() {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, r.value().get());
            }
        }
        out
    }
}

impl MetricsSink for PromTextSink {
    fn register_gauge(&self, spec: GaugeSpec, cell: Arc<GaugeCell>) {
        let mut tags = spec.tags;
        tags.sort();

        let family = self.families.entry(spec.name).or_insert_with(|| GaugeFamily {
            help: spec.help,
            cells: DashMap::new(),
        });
        family.cells.insert(tags, cell);
    }
}
