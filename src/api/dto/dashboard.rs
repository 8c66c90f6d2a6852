//! DTOs for the dashboard endpoint.

use serde::Serialize;

/// Aggregate counters backing the dashboard cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_members: i64,
    pub active_members: i64,
    pub revenue: i64,
}
