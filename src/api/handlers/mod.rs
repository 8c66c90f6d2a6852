//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dashboard;
pub mod health;
pub mod members;
pub mod pricing;

pub use dashboard::{dashboard_handler, dashboard_method_not_allowed};
pub use health::health_handler;
pub use members::{
    create_member_handler, get_member_handler, member_list_handler, member_method_not_allowed,
    members_method_not_allowed, term_method_not_allowed, term_preview_handler,
    update_member_handler,
};
pub use pricing::{
    pricing_get_handler, pricing_list_handler, pricing_list_method_not_allowed,
    pricing_method_not_allowed, pricing_update_handler,
};
