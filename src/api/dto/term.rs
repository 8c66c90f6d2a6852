//! DTOs for the membership term preview endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for a term preview.
///
/// Both parameters are optional: with an incomplete pair the end date is
/// simply not computed.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TermQuery {
    pub membership_start_date: Option<String>,
    pub membership_type: Option<String>,
}

/// Computed membership term for the selected plan and start date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermView {
    pub membership_end_date: Option<NaiveDate>,
    pub pricing: i64,
}
