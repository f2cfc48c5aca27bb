//! Category store:
//! - `CategoryKey -> Arc<GaugeCell>`
//! - cells created lazily, registered with the sink exactly once

use std::sync::Arc;

use dashmap::DashMap;

use lockscope_core::{CategoryKey, GaugeCell};

use crate::sink::{GaugeSpec, MetricsSink};

/// Metric family published for fast-path lock counts.
pub const FASTPATH_GAUGE_NAME: &str = "lockscope_fastpath_locks";
pub const FASTPATH_GAUGE_HELP: &str = "The total number of fastpath locks";

/// Owns the mapping from lock category to live gauge cell.
///
/// Cells live for the lifetime of the bound instance; there is no removal, so
/// categories accumulate. A category absent from a later sample keeps its
/// previous value.
pub struct CategoryStore {
    relname: String,
    sink: Arc<dyn MetricsSink>,
    cells: DashMap<CategoryKey, Arc<GaugeCell>>,
}

impl CategoryStore {
    pub fn new(relname: String, sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            relname,
            sink,
            cells: DashMap::new(),
        }
    }

    /// Return the cell for `(mode, fastpath)`, creating and registering it on
    /// first encounter.
    ///
    /// The `entry` API makes create+register atomic, so this is safe under
    /// concurrent invocation even though the scheduler serializes calls.
    pub fn get_or_create(&self, mode: &str, fastpath: bool) -> Arc<GaugeCell> {
        self.cells
            .entry(CategoryKey::new(mode, fastpath))
            .or_insert_with(|| {
                let cell = Arc::new(GaugeCell::new());
                self.sink.register_gauge(
                    GaugeSpec {
                        name: FASTPATH_GAUGE_NAME,
                        help: FASTPATH_GAUGE_HELP,
                        tags: vec![
                            ("fastpath".to_string(), fastpath.to_string()),
                            ("mode".to_string(), mode.to_string()),
                            ("relname".to_string(), self.relname.clone()),
                        ],
                    },
                    Arc::clone(&cell),
                );
                cell
            })
            .clone()
    }

    /// Current value for a category, if it has ever been sampled.
    pub fn value(&self, mode: &str, fastpath: bool) -> Option<i64> {
        self.cells
            .get(&CategoryKey::new(mode, fastpath))
            .map(|r| r.value().get())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
