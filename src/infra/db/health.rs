//! Pool health reporting: point-in-time statistics plus an advisory
//! message classified against configured ceilings.

use serde::Serialize;

use crate::config::db::HealthThresholds;

/// Statistics for the shared pool at the moment of a health probe.
#[derive(Debug, Clone, Serialize)]
pub struct PoolStats {
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub wait_count: u64,
    pub wait_duration_ms: u64,
    /// Connections opened over the process lifetime that are no longer in
    /// the pool; covers both idle-timeout and max-lifetime recycling.
    pub recycled: u64,
}

/// Outcome of a health probe. `up` carries statistics and an advisory
/// message; `down` carries the probe error text.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub stats: Option<PoolStats>,
}

impl StatusReport {
    pub fn up(message: String, stats: PoolStats) -> Self {
        Self {
            status: "up",
            message: Some(message),
            error: None,
            stats: Some(stats),
        }
    }

    pub fn down(error: String) -> Self {
        Self {
            status: "down",
            message: None,
            error: Some(error),
            stats: None,
        }
    }
}

/// Classify pool statistics into an advisory message. Rules are evaluated
/// in order and a later match overwrites an earlier one.
pub(super) fn advise(stats: &PoolStats, thresholds: &HealthThresholds) -> String {
    let mut message = "It's healthy".to_string();

    if stats.open_connections > thresholds.open_ceiling {
        message = "The database is experiencing heavy load.".to_string();
    }

    if stats.wait_count > thresholds.wait_ceiling {
        message = "The database has a high number of wait events, indicating potential bottlenecks."
            .to_string();
    }

    if stats.recycled > u64::from(stats.open_connections) / 2 {
        message =
            "Many connections are being recycled, consider revising the connection pool settings."
                .to_string();
    }

    message
}
