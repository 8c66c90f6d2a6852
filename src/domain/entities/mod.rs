//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Member`] - A gym member record
//! - [`MemberSummary`] - Reduced member projection for listing views
//! - [`PricingSettings`] - The singleton membership pricing table
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for input:
//! - `NewMember` - For creating and replacing member records
//! - `PricingUpdate` - For overwriting the pricing table

pub mod member;
pub mod pricing;

pub use member::{Member, MemberStats, MemberSummary, NewMember};
pub use pricing::{PricingSettings, PricingUpdate};
