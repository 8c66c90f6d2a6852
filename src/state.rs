//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, DashboardService, MemberService, PricingService};
use crate::infrastructure::persistence::{
    PgMemberRepository, PgSettingsRepository, PgTokenRepository,
};

/// Application state shared across handlers.
///
/// Services are wired against the PostgreSQL repositories; tests that need to
/// substitute storage do so at the service level with mocked repositories.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub member_service: Arc<MemberService<PgMemberRepository, PgSettingsRepository>>,
    pub pricing_service: Arc<PricingService<PgSettingsRepository>>,
    pub dashboard_service: Arc<DashboardService<PgMemberRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
        let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));
        let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));

        let member_service = Arc::new(MemberService::new(
            member_repo.clone(),
            settings_repo.clone(),
        ));
        let pricing_service = Arc::new(PricingService::new(settings_repo));
        let dashboard_service = Arc::new(DashboardService::new(member_repo));
        let auth_service = Arc::new(AuthService::new(token_repo, token_signing_secret));

        Self {
            db: pool,
            member_service,
            pricing_service,
            dashboard_service,
            auth_service,
        }
    }
}
