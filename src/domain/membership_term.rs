//! Membership term calculation and plan pricing lookup.
//!
//! The end date of a membership is a pure function of the start date and the
//! plan name. Both the add-member and edit-member flows go through
//! [`compute_end_date`] so the two screens can never disagree on term length.

use chrono::{Months, NaiveDate};

use crate::domain::entities::PricingSettings;

/// Returns the plan duration in calendar months.
///
/// The lookup is case-sensitive: `"Monthly"`, `"Quarterly"` and `"Yearly"`
/// map to 1, 3 and 12 months. Any other spelling yields 0: an unknown plan
/// is treated as a zero-length term, not rejected.
pub fn plan_duration_months(plan: &str) -> u32 {
    match plan {
        "Monthly" => 1,
        "Quarterly" => 3,
        "Yearly" => 12,
        _ => 0,
    }
}

/// Computes the membership end date for a start date and plan name.
///
/// Adds the plan duration in calendar months, preserving the day-of-month.
/// When the target month is too short (e.g. Jan 31 + 1 month), the result is
/// clamped to the last day of the target month rather than rolling over.
///
/// An unknown plan has duration 0, so the end date equals the start date.
pub fn compute_end_date(start: NaiveDate, plan: &str) -> NaiveDate {
    let duration = plan_duration_months(plan);

    // checked_add_months clamps to the last day of the target month, which is
    // exactly the overflow rule the membership form applies. None only occurs
    // at the far edge of chrono's date range.
    start
        .checked_add_months(Months::new(duration))
        .unwrap_or(start)
}

/// Looks up the price for a plan in the pricing table.
///
/// Unlike the duration map, this lookup is case-insensitive: the plan name is
/// lower-cased first, so `"Monthly"` and `"monthly"` both resolve. Unknown
/// plans price at 0.
pub fn price_for(plan: &str, pricing: &PricingSettings) -> i64 {
    match plan.to_lowercase().as_str() {
        "monthly" => pricing.monthly_membership,
        "quarterly" => pricing.quarterly_membership,
        "yearly" => pricing.yearly_membership,
        _ => 0,
    }
}
