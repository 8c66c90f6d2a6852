//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgMemberRepository`] - Member record storage and listing
//! - [`PgSettingsRepository`] - Singleton pricing table with atomic first-access creation
//! - [`PgTokenRepository`] - Staff API token storage and validation

pub mod pg_member_repository;
pub mod pg_settings_repository;
pub mod pg_token_repository;

pub use pg_member_repository::PgMemberRepository;
pub use pg_settings_repository::PgSettingsRepository;
pub use pg_token_repository::PgTokenRepository;
