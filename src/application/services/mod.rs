//! Business logic services for the application layer.

pub mod auth_service;
pub mod dashboard_service;
pub mod member_service;
pub mod pricing_service;

pub use auth_service::AuthService;
pub use dashboard_service::DashboardService;
pub use member_service::{MemberForm, MemberService, TermPreview};
pub use pricing_service::{PricingListing, PricingService};
