//! Pricing settings service.

use std::sync::Arc;

use crate::domain::entities::pricing::{DEFAULT_MONTHLY, DEFAULT_QUARTERLY, DEFAULT_YEARLY};
use crate::domain::entities::{PricingSettings, PricingUpdate};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;

/// Read-optimized pricing listing for plan-selection clients.
#[derive(Debug, Clone, Copy)]
pub struct PricingListing {
    pub monthly: i64,
    pub quarterly: i64,
    pub yearly: i64,
    /// True when no settings row exists and the hard-coded defaults were
    /// returned without being persisted.
    pub is_default: bool,
}

/// Service for the singleton membership pricing table.
///
/// The settings row is created lazily with default prices on first
/// get-or-create access. The update path deliberately does not create the
/// row, and the public listing falls back to defaults without persisting
/// anything.
pub struct PricingService<S: SettingsRepository> {
    settings: Arc<S>,
}

impl<S: SettingsRepository> PricingService<S> {
    /// Creates a new pricing service.
    pub fn new(settings: Arc<S>) -> Self {
        Self { settings }
    }

    /// Returns the pricing row, creating it with defaults on first access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_or_create(&self) -> Result<PricingSettings, AppError> {
        self.settings.get_or_create_default().await
    }

    /// Overwrites the three price fields on the existing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no settings row exists yet.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, update: PricingUpdate) -> Result<PricingSettings, AppError> {
        self.settings.update(update).await
    }

    /// Returns the pricing listing in its read-optimized shape.
    ///
    /// When no settings row exists, the hard-coded defaults are returned
    /// without creating the row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn listing(&self) -> Result<PricingListing, AppError> {
        match self.settings.find().await? {
            Some(settings) => Ok(PricingListing {
                monthly: settings.monthly_membership,
                quarterly: settings.quarterly_membership,
                yearly: settings.yearly_membership,
                is_default: false,
            }),
            None => Ok(PricingListing {
                monthly: DEFAULT_MONTHLY,
                quarterly: DEFAULT_QUARTERLY,
                yearly: DEFAULT_YEARLY,
                is_default: true,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSettingsRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_or_create_returns_row() {
        let mut settings = MockSettingsRepository::new();

        settings
            .expect_get_or_create_default()
            .times(1)
            .returning(|| Ok(PricingSettings::with_defaults(1)));

        let service = PricingService::new(Arc::new(settings));

        let pricing = service.get_or_create().await.unwrap();

        assert_eq!(pricing.monthly_membership, 700);
    }

    #[tokio::test]
    async fn test_update_passes_through_not_found() {
        let mut settings = MockSettingsRepository::new();

        settings
            .expect_update()
            .times(1)
            .returning(|_| Err(AppError::not_found("Settings not found.", json!({}))));

        let service = PricingService::new(Arc::new(settings));

        let result = service
            .update(PricingUpdate {
                monthly_membership: 800,
                quarterly_membership: 2100,
                yearly_membership: 8500,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_listing_uses_stored_row() {
        let mut settings = MockSettingsRepository::new();

        settings.expect_find().times(1).returning(|| {
            let mut row = PricingSettings::with_defaults(1);
            row.monthly_membership = 900;
            Ok(Some(row))
        });

        let service = PricingService::new(Arc::new(settings));

        let listing = service.listing().await.unwrap();

        assert_eq!(listing.monthly, 900);
        assert!(!listing.is_default);
    }

    #[tokio::test]
    async fn test_listing_falls_back_to_defaults_without_creating() {
        let mut settings = MockSettingsRepository::new();

        // find only; get_or_create_default must not be touched.
        settings.expect_find().times(1).returning(|| Ok(None));

        let service = PricingService::new(Arc::new(settings));

        let listing = service.listing().await.unwrap();

        assert_eq!(listing.monthly, 700);
        assert_eq!(listing.quarterly, 2000);
        assert_eq!(listing.yearly, 8000);
        assert!(listing.is_default);
    }
}
