//! Repository trait for the singleton pricing settings row.

use crate::domain::entities::{PricingSettings, PricingUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the membership pricing table.
///
/// The pricing table is a single row. The repository enforces that at most
/// one row is ever created, even under concurrent first access, by leaning on
/// a database uniqueness constraint rather than in-process locking, since
/// multiple service instances may run against the same database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSettingsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_settings.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the pricing row if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self) -> Result<Option<PricingSettings>, AppError>;

    /// Returns the pricing row, creating it with the default prices when absent.
    ///
    /// Idempotent: concurrent callers racing on first access all observe the
    /// same single row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_or_create_default(&self) -> Result<PricingSettings, AppError>;

    /// Overwrites the three price fields on the existing row.
    ///
    /// This operation never creates the row; callers relying on lazy creation
    /// must go through [`get_or_create_default`](Self::get_or_create_default)
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pricing row exists yet.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, update: PricingUpdate) -> Result<PricingSettings, AppError>;
}
