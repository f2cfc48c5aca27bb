use std::time::Duration;

use serde::Deserialize;

use lockscope_core::{LockScopeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    pub version: u32,

    /// Relation whose locks are counted (query filter parameter).
    pub relname: String,

    /// Sampling interval in milliseconds. Absent means one-shot mode.
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LockScopeError::UnsupportedVersion);
        }
        if self.relname.is_empty() {
            return Err(LockScopeError::BadConfig("relname must not be empty".into()));
        }
        if let Some(ms) = self.interval_ms {
            if !(100..=3_600_000).contains(&ms) {
                return Err(LockScopeError::BadConfig(
                    "interval_ms must be between 100 and 3600000".into(),
                ));
            }
        }
        Ok(())
    }

    /// Configured interval, or `None` for one-shot mode.
    pub fn interval(&self) -> Option<Duration> {
        self.interval_ms.map(Duration::from_millis)
    }
}
