//! Pricing settings entity.

use chrono::{DateTime, Utc};

/// Default monthly plan price used when the settings row does not exist yet.
pub const DEFAULT_MONTHLY: i64 = 700;
/// Default quarterly plan price.
pub const DEFAULT_QUARTERLY: i64 = 2000;
/// Default yearly plan price.
pub const DEFAULT_YEARLY: i64 = 8000;

/// The pricing table for membership plans.
///
/// Exactly one logical row exists system-wide. It is created lazily with the
/// default prices on first access and only ever mutated through the pricing
/// update operation, never deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PricingSettings {
    pub id: i64,
    pub monthly_membership: i64,
    pub quarterly_membership: i64,
    pub yearly_membership: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingSettings {
    /// Builds a settings row carrying the hard-coded default prices.
    pub fn with_defaults(id: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            monthly_membership: DEFAULT_MONTHLY,
            quarterly_membership: DEFAULT_QUARTERLY,
            yearly_membership: DEFAULT_YEARLY,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input data for overwriting the three price fields.
#[derive(Debug, Clone, Copy)]
pub struct PricingUpdate {
    pub monthly_membership: i64,
    pub quarterly_membership: i64,
    pub yearly_membership: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let settings = PricingSettings::with_defaults(1);

        assert_eq!(settings.monthly_membership, 700);
        assert_eq!(settings.quarterly_membership, 2000);
        assert_eq!(settings.yearly_membership, 8000);
    }
}
