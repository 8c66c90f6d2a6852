//! PostgreSQL implementation of member repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Member, MemberStats, MemberSummary, NewMember};
use crate::domain::repositories::MemberRepository;
use crate::error::AppError;
use serde_json::json;

const MEMBER_COLUMNS: &str = "id, first_name, last_name, email, phone_number, date_of_birth, \
     gender, joining_date, membership_type, membership_start_date, membership_end_date, \
     pricing, created_at, updated_at";

/// PostgreSQL repository for gym member records.
///
/// Records are never deleted; updates replace every membership field and bump
/// `updated_at`.
pub struct PgMemberRepository {
    pool: Arc<PgPool>,
}

impl PgMemberRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn create(&self, new_member: NewMember) -> Result<Member, AppError> {
        let sql = format!(
            r#"
            INSERT INTO members (
                first_name, last_name, email, phone_number, date_of_birth,
                gender, joining_date, membership_type, membership_start_date,
                membership_end_date, pricing
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        let member = sqlx::query_as::<_, Member>(&sql)
            .bind(&new_member.first_name)
            .bind(&new_member.last_name)
            .bind(&new_member.email)
            .bind(&new_member.phone_number)
            .bind(new_member.date_of_birth)
            .bind(&new_member.gender)
            .bind(new_member.joining_date)
            .bind(&new_member.membership_type)
            .bind(new_member.membership_start_date)
            .bind(new_member.membership_end_date)
            .bind(new_member.pricing)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, AppError> {
        let sql = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1");

        let member = sqlx::query_as::<_, Member>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(member)
    }

    async fn update(&self, id: i64, member: NewMember) -> Result<Member, AppError> {
        let sql = format!(
            r#"
            UPDATE members SET
                first_name            = $2,
                last_name             = $3,
                email                 = $4,
                phone_number          = $5,
                date_of_birth         = $6,
                gender                = $7,
                joining_date          = $8,
                membership_type       = $9,
                membership_start_date = $10,
                membership_end_date   = $11,
                pricing               = $12,
                updated_at            = NOW()
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        let updated = sqlx::query_as::<_, Member>(&sql)
            .bind(id)
            .bind(&member.first_name)
            .bind(&member.last_name)
            .bind(&member.email)
            .bind(&member.phone_number)
            .bind(member.date_of_birth)
            .bind(&member.gender)
            .bind(member.joining_date)
            .bind(&member.membership_type)
            .bind(member.membership_start_date)
            .bind(member.membership_end_date)
            .bind(member.pricing)
            .fetch_optional(self.pool.as_ref())
            .await?;

        updated.ok_or_else(|| AppError::not_found("Member not found.", json!({"id": id})))
    }

    async fn list_summaries(&self) -> Result<Vec<MemberSummary>, AppError> {
        let summaries = sqlx::query_as::<_, MemberSummary>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, membership_end_date
            FROM members
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(summaries)
    }

    async fn stats(&self) -> Result<MemberStats, AppError> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*)                                                      AS total_members,
                COUNT(*) FILTER (WHERE membership_end_date >= CURRENT_DATE)   AS active_members,
                COALESCE(SUM(pricing), 0)::BIGINT                             AS revenue
            FROM members
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(MemberStats {
            total_members: row.try_get("total_members")?,
            active_members: row.try_get("active_members")?,
            revenue: row.try_get("revenue")?,
        })
    }
}
