//! DTOs for pricing endpoints.
//!
//! The same underlying table has two external shapes: the persisted form
//! (`monthlyMembership` / `quarterlyMembership` / `yearlyMembership`) used by
//! the settings screen, and the read-optimized form (`monthly` / `quarterly` /
//! `yearly`) served to plan-selection clients. Both are kept as distinct
//! named types on purpose.

use serde::{Deserialize, Serialize};

/// Price fields as submitted by the settings screen.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPayload {
    pub monthly_membership: Option<i64>,
    pub quarterly_membership: Option<i64>,
    pub yearly_membership: Option<i64>,
}

/// Pricing table in its persisted shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub monthly_membership: i64,
    pub quarterly_membership: i64,
    pub yearly_membership: i64,
}

/// Pricing table in its read-optimized listing shape.
#[derive(Debug, Serialize)]
pub struct PricingListView {
    pub monthly: i64,
    pub quarterly: i64,
    pub yearly: i64,
}
