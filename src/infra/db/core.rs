//! Relational store adapter: one shared connection pool plus the typed
//! query/execute primitives every entity operation goes through.
//!
//! The handle is constructed once by the process entry point and injected
//! into every operation via `AppState`; there is no process-wide singleton.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, PgPool, Postgres};
use tracing::{info, warn};

use super::health::{advise, PoolStats, StatusReport};
use crate::config::db::{DbConfig, HealthThresholds};
use crate::error::AppError;

/// A prepared statement with bound arguments.
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;
/// A prepared read statement mapped to a typed row.
pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Counters the pool does not expose itself; fed by the `after_connect`
/// hook and the acquire path.
#[derive(Debug, Default)]
struct PoolMetrics {
    opened: AtomicU64,
    wait_count: AtomicU64,
    wait_nanos: AtomicU64,
}

/// Shared handle to the relational store. Cloning is cheap; every clone
/// shares the same pool and counters.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
    metrics: Arc<PoolMetrics>,
    thresholds: HealthThresholds,
}

impl Store {
    /// Establish the pool. Postgres may still be coming up when the process
    /// starts, so the initial connection is retried a bounded number of
    /// times before giving up.
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        const CONNECT_ATTEMPTS: u32 = 5;
        const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(500);

        let url = config.conn_url();
        let metrics = Arc::new(PoolMetrics::default());

        let mut attempt = 1;
        let pool = loop {
            match build_pool_options(config, &metrics).connect(&url).await {
                Ok(pool) => break pool,
                Err(e) if attempt < CONNECT_ATTEMPTS => {
                    warn!(
                        "pool=connect attempt={attempt}/{CONNECT_ATTEMPTS} \
                         retry_in_ms={} error={e}",
                        CONNECT_RETRY_DELAY.as_millis()
                    );
                    tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(AppError::config(format!(
                        "failed to connect to Postgres after {CONNECT_ATTEMPTS} attempts: {e}"
                    )));
                }
            }
        };

        info!(
            "pool=create engine=postgres min={} max={} acquire_timeout_ms={}",
            config.pool.min_connections,
            config.pool.max_connections,
            config.pool.acquire_timeout.as_millis()
        );

        Ok(Self {
            pool,
            metrics,
            thresholds: config.health.clone(),
        })
    }

    /// Underlying pool, exposed for migration tooling.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a mutating statement and report how many rows it changed, so
    /// callers can tell "target row did not exist" from success.
    pub async fn execute(&self, query: PgQuery<'_>) -> Result<u64, AppError> {
        let mut conn = self.acquire().await?;
        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Run a read statement and scan every row into `R`. A scan failure on
    /// any row fails the whole call; there are no partial records.
    pub async fn fetch_all<R>(&self, query: PgQueryAs<'_, R>) -> Result<Vec<R>, AppError>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut conn = self.acquire().await?;
        Ok(query.fetch_all(&mut *conn).await?)
    }

    /// Run a read statement expected to match at most one row.
    pub async fn fetch_optional<R>(&self, query: PgQueryAs<'_, R>) -> Result<Option<R>, AppError>
    where
        R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut conn = self.acquire().await?;
        Ok(query.fetch_optional(&mut *conn).await?)
    }

    /// Bounded-time liveness probe plus pool statistics and an advisory
    /// message. A failed or timed-out probe is reported as a "down" status,
    /// never as a process-level failure.
    pub async fn health(&self) -> StatusReport {
        let probe = sqlx::query("SELECT 1").execute(&self.pool);
        match tokio::time::timeout(self.thresholds.probe_timeout, probe).await {
            Err(_) => StatusReport::down(format!(
                "db down: health probe timed out after {}ms",
                self.thresholds.probe_timeout.as_millis()
            )),
            Ok(Err(e)) => StatusReport::down(format!("db down: {e}")),
            Ok(Ok(_)) => {
                let stats = self.pool_stats();
                let message = advise(&stats, &self.thresholds);
                StatusReport::up(message, stats)
            }
        }
    }

    /// Point-in-time statistics for the shared pool.
    pub fn pool_stats(&self) -> PoolStats {
        let open = self.pool.size();
        let idle = self.pool.num_idle() as u32;
        let opened = self.metrics.opened.load(Ordering::Relaxed);
        let wait_nanos = self.metrics.wait_nanos.load(Ordering::Relaxed);
        PoolStats {
            open_connections: open,
            in_use: open.saturating_sub(idle),
            idle,
            wait_count: self.metrics.wait_count.load(Ordering::Relaxed),
            wait_duration_ms: Duration::from_nanos(wait_nanos).as_millis() as u64,
            recycled: opened.saturating_sub(u64::from(open)),
        }
    }

    /// Release the pool. Safe to call once at shutdown; operations issued
    /// afterwards fail with a pool-closed error.
    pub async fn close(&self) {
        info!("pool=close engine=postgres");
        self.pool.close().await;
    }

    /// Check out a connection, counting and timing acquires that found no
    /// idle connection available.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>, AppError> {
        let waited = self.pool.num_idle() == 0;
        let started = Instant::now();
        let conn = self.pool.acquire().await?;
        if waited {
            self.metrics.wait_count.fetch_add(1, Ordering::Relaxed);
            self.metrics
                .wait_nanos
                .fetch_add(started.elapsed().as_nanos() as u64, Ordering::Relaxed);
        }
        Ok(conn)
    }
}

fn build_pool_options(config: &DbConfig, metrics: &Arc<PoolMetrics>) -> PgPoolOptions {
    let session = config.session_statements();
    let hook_metrics = Arc::clone(metrics);
    PgPoolOptions::new()
        .min_connections(config.pool.min_connections)
        .max_connections(config.pool.max_connections)
        .acquire_timeout(config.pool.acquire_timeout)
        .idle_timeout(Duration::from_secs(30))
        .after_connect(move |conn, _meta| {
            let statements = session.clone();
            let metrics = Arc::clone(&hook_metrics);
            Box::pin(async move {
                for statement in &statements {
                    sqlx::query(statement).execute(&mut *conn).await?;
                }
                metrics.opened.fetch_add(1, Ordering::Relaxed);
                Ok(())
            })
        })
}
