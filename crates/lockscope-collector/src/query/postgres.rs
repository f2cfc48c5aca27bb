//! Postgres executor for the fast-path lock query.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use lockscope_core::{LockScopeError, Result, SampleRow};

use crate::query::LockQueryExecutor;

/// Counts `pg_locks` entries for one relation, grouped by (fastpath, mode).
pub const FAST_PATH_LOCKS_SQL: &str = "\
SELECT l.fastpath AS fastpath, l.mode AS mode, COUNT(*) AS count
FROM pg_locks l
JOIN pg_class c ON c.oid = l.relation
WHERE c.relname = $1
GROUP BY l.fastpath, l.mode";

/// Executor bound to an `sqlx` Postgres pool.
#[derive(Clone)]
pub struct PgLockQueryExecutor {
    pool: PgPool,
}

impl PgLockQueryExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LockQueryExecutor for PgLockQueryExecutor {
    async fn fetch_fast_path_counts(&self, relname: &str) -> Result<Vec<SampleRow>> {
        let rows = sqlx::query(FAST_PATH_LOCKS_SQL)
            .bind(relname)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LockScopeError::Query(format!("fast path lock query failed: {e}")))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let fastpath: bool = row
                .try_get("fastpath")
                .map_err(|e| LockScopeError::Query(format!("malformed row (fastpath): {e}")))?;
            let mode: String = row
                .try_get("mode")
                .map_err(|e| LockScopeError::Query(format!("malformed row (mode): {e}")))?;
            let count: i64 = row
                .try_get("count")
                .map_err(|e| LockScopeError::Query(format!("malformed row (count): {e}")))?;
            out.push(SampleRow {
                mode,
                fastpath,
                count,
            });
        }
        Ok(out)
    }
}
