//! Repository trait for member records.

use crate::domain::entities::{Member, MemberStats, MemberSummary, NewMember};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for gym member records.
///
/// Members are created and updated but never deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMemberRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_member.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Creates a new member record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_member: NewMember) -> Result<Member, AppError>;

    /// Finds a member by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError>;

    /// Replaces all fields of an existing member record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the member does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, member: NewMember) -> Result<Member, AppError>;

    /// Lists all members as reduced summaries for the listing view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_summaries(&self) -> Result<Vec<MemberSummary>, AppError>;

    /// Aggregates member counters for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn stats(&self) -> Result<MemberStats, AppError>;
}
