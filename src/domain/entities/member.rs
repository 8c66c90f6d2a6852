//! Member entity and its input types.

use chrono::{DateTime, NaiveDate, Utc};

/// A gym member record.
///
/// `membership_end_date` and `pricing` are derived from the plan and start
/// date at the time the record was last edited. They are stored as-is and are
/// not recomputed when the pricing table changes later.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub joining_date: NaiveDate,
    pub membership_type: String,
    pub membership_start_date: NaiveDate,
    pub membership_end_date: NaiveDate,
    pub pricing: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating or replacing a member record.
///
/// Updates are full-record replacements, so the same input type serves both
/// the create and update paths.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub joining_date: NaiveDate,
    pub membership_type: String,
    pub membership_start_date: NaiveDate,
    pub membership_end_date: NaiveDate,
    pub pricing: i64,
}

/// Reduced projection of a member used by listing views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub membership_end_date: NaiveDate,
}

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberStats {
    pub total_members: i64,
    pub active_members: i64,
    pub revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_member_creation() {
        let new_member = NewMember {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "555-0101".to_string(),
            date_of_birth: date(1990, 6, 1),
            gender: "Female".to_string(),
            joining_date: date(2024, 1, 10),
            membership_type: "Monthly".to_string(),
            membership_start_date: date(2024, 1, 15),
            membership_end_date: date(2024, 2, 15),
            pricing: 700,
        };

        assert_eq!(new_member.membership_type, "Monthly");
        assert_eq!(new_member.pricing, 700);
    }

    #[test]
    fn test_member_stats_default() {
        let stats = MemberStats::default();

        assert_eq!(stats.total_members, 0);
        assert_eq!(stats.active_members, 0);
        assert_eq!(stats.revenue, 0);
    }
}
