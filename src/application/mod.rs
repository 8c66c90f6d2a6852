//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::member_service::MemberService`] - Member record contract and term computation
//! - [`services::pricing_service::PricingService`] - Singleton pricing table management
//! - [`services::dashboard_service::DashboardService`] - Dashboard aggregation
//! - [`services::auth_service::AuthService`] - Staff API token authentication

pub mod services;
