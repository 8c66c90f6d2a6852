//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MemberRepository`] - Member record CRUD operations
//! - [`SettingsRepository`] - Singleton pricing table access
//! - [`TokenRepository`] - Staff API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod member_repository;
pub mod settings_repository;
pub mod token_repository;

pub use member_repository::MemberRepository;
pub use settings_repository::SettingsRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use member_repository::MockMemberRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
