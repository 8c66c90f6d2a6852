//! PostgreSQL implementation of the pricing settings repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::pricing::{DEFAULT_MONTHLY, DEFAULT_QUARTERLY, DEFAULT_YEARLY};
use crate::domain::entities::{PricingSettings, PricingUpdate};
use crate::domain::repositories::SettingsRepository;
use crate::error::AppError;
use serde_json::json;

const SETTINGS_COLUMNS: &str = "id, monthly_membership, quarterly_membership, \
     yearly_membership, created_at, updated_at";

/// PostgreSQL repository for the singleton pricing row.
///
/// Singleton-ness is enforced by a unique constraint on the constant
/// `singleton` column, so racing first-access inserts collapse into one row
/// regardless of how many service instances hit the database at once.
pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn find(&self) -> Result<Option<PricingSettings>, AppError> {
        let sql = format!("SELECT {SETTINGS_COLUMNS} FROM settings LIMIT 1");

        let settings = sqlx::query_as::<_, PricingSettings>(&sql)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(settings)
    }

    async fn get_or_create_default(&self) -> Result<PricingSettings, AppError> {
        let insert_sql = format!(
            r#"
            INSERT INTO settings (monthly_membership, quarterly_membership, yearly_membership)
            VALUES ($1, $2, $3)
            ON CONFLICT (singleton) DO NOTHING
            RETURNING {SETTINGS_COLUMNS}
            "#
        );

        let inserted = sqlx::query_as::<_, PricingSettings>(&insert_sql)
            .bind(DEFAULT_MONTHLY)
            .bind(DEFAULT_QUARTERLY)
            .bind(DEFAULT_YEARLY)
            .fetch_optional(self.pool.as_ref())
            .await?;

        if let Some(settings) = inserted {
            return Ok(settings);
        }

        // Insert hit the singleton constraint: the row already exists,
        // possibly created by a concurrent first access.
        self.find().await?.ok_or_else(|| {
            AppError::internal(
                crate::error::INTERNAL_ERROR_MESSAGE,
                json!({"hint": "settings row vanished between insert and select"}),
            )
        })
    }

    async fn update(&self, update: PricingUpdate) -> Result<PricingSettings, AppError> {
        let sql = format!(
            r#"
            UPDATE settings SET
                monthly_membership   = $1,
                quarterly_membership = $2,
                yearly_membership    = $3,
                updated_at           = NOW()
            WHERE singleton
            RETURNING {SETTINGS_COLUMNS}
            "#
        );

        let updated = sqlx::query_as::<_, PricingSettings>(&sql)
            .bind(update.monthly_membership)
            .bind(update.quarterly_membership)
            .bind(update.yearly_membership)
            .fetch_optional(self.pool.as_ref())
            .await?;

        updated.ok_or_else(|| AppError::not_found("Settings not found.", json!({})))
    }
}
