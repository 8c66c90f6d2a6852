mod common;

use chrono::NaiveDate;
use gym_admin::domain::entities::NewMember;
use gym_admin::domain::repositories::MemberRepository;
use gym_admin::error::AppError;
use gym_admin::infrastructure::persistence::PgMemberRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_member(email: &str) -> NewMember {
    NewMember {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone_number: "555-0101".to_string(),
        date_of_birth: date(1990, 6, 1),
        gender: "Female".to_string(),
        joining_date: date(2024, 1, 10),
        membership_type: "Monthly".to_string(),
        membership_start_date: date(2024, 1, 15),
        membership_end_date: date(2024, 2, 15),
        pricing: 700,
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let created = repo.create(new_member("jane@example.com")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.email, "jane@example.com");
    assert_eq!(created.membership_end_date, date(2024, 2, 15));

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.first_name, "Jane");
    assert_eq!(found.pricing, 700);
}

#[sqlx::test]
async fn test_find_missing_returns_none(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let found = repo.find_by_id(999_999).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_update_replaces_record(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let created = repo.create(new_member("before@example.com")).await.unwrap();

    let mut replacement = new_member("after@example.com");
    replacement.membership_type = "Yearly".to_string();
    replacement.pricing = 8000;

    let updated = repo.update(created.id, replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "after@example.com");
    assert_eq!(updated.membership_type, "Yearly");
    assert_eq!(updated.pricing, 8000);
}

#[sqlx::test]
async fn test_update_missing_not_found(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let result = repo.update(999_999, new_member("ghost@example.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_list_summaries_ordered_by_id(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let first = repo.create(new_member("a@example.com")).await.unwrap();
    let second = repo.create(new_member("b@example.com")).await.unwrap();

    let summaries = repo.list_summaries().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, first.id);
    assert_eq!(summaries[1].id, second.id);
    assert_eq!(summaries[0].email, "a@example.com");
}

#[sqlx::test]
async fn test_stats_aggregates(pool: PgPool) {
    common::insert_test_member(&pool, "active1@example.com", common::future_date(), 700).await;
    common::insert_test_member(&pool, "active2@example.com", common::future_date(), 2000).await;
    common::insert_test_member(&pool, "expired@example.com", common::past_date(), 8000).await;

    let repo = PgMemberRepository::new(Arc::new(pool));

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_members, 3);
    assert_eq!(stats.active_members, 2);
    assert_eq!(stats.revenue, 10_700);
}

#[sqlx::test]
async fn test_stats_empty(pool: PgPool) {
    let repo = PgMemberRepository::new(Arc::new(pool));

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_members, 0);
    assert_eq!(stats.active_members, 0);
    assert_eq!(stats.revenue, 0);
}
