#![allow(dead_code)]

use chrono::NaiveDate;
use gym_admin::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SIGNING_SECRET.to_string())
}

/// A complete, valid member payload in the wire format.
pub fn member_body() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "phoneNumber": "555-0101",
        "dateOfBirth": "1990-06-01",
        "gender": "Female",
        "joiningDate": "2024-01-10",
        "membershipType": "Monthly",
        "membershipStartDate": "2024-01-15",
        "membershipEndDate": "2024-02-15",
        "pricing": 700
    })
}

pub async fn insert_test_member(
    pool: &PgPool,
    email: &str,
    membership_end_date: NaiveDate,
    pricing: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO members
            (first_name, last_name, email, phone_number, date_of_birth, gender,
             joining_date, membership_type, membership_start_date,
             membership_end_date, pricing)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id
        "#,
    )
    .bind("Test")
    .bind("Member")
    .bind(email)
    .bind("555-0100")
    .bind(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
    .bind("Other")
    .bind(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    .bind("Monthly")
    .bind(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    .bind(membership_end_date)
    .bind(pricing)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn members_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn settings_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM settings")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A membership end date far enough in the future to count as active.
pub fn future_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
}

/// A membership end date safely in the past.
pub fn past_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}
