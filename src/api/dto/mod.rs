//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field names are
//! camelCase on the wire.

pub mod dashboard;
pub mod envelope;
pub mod health;
pub mod member;
pub mod pricing;
pub mod term;

pub use envelope::ApiResponse;
