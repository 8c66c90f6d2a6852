//! Dashboard aggregation service.

use std::sync::Arc;

use crate::domain::entities::MemberStats;
use crate::domain::repositories::MemberRepository;
use crate::error::AppError;

/// Service backing the staff dashboard cards.
///
/// Counters are computed from stored member records: a member is active while
/// their stored membership end date has not passed, and revenue is the sum of
/// the prices captured on the records at edit time.
pub struct DashboardService<M: MemberRepository> {
    members: Arc<M>,
}

impl<M: MemberRepository> DashboardService<M> {
    /// Creates a new dashboard service.
    pub fn new(members: Arc<M>) -> Self {
        Self { members }
    }

    /// Aggregates member counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self) -> Result<MemberStats, AppError> {
        self.members.stats().await
    }
}
