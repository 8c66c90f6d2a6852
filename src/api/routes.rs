//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_member_handler, dashboard_handler, dashboard_method_not_allowed, get_member_handler,
    member_list_handler, member_method_not_allowed, members_method_not_allowed,
    pricing_get_handler, pricing_list_handler, pricing_list_method_not_allowed,
    pricing_method_not_allowed, pricing_update_handler, term_method_not_allowed,
    term_preview_handler, update_member_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /members`                - List members (reduced projection)
/// - `POST /members`                - Create a member record
/// - `GET  /members/term`           - Preview end date and price for a plan selection
/// - `GET  /members/{id}`           - Fetch a full member record
/// - `PUT  /members/{id}`           - Replace a member record
/// - `GET  /settings/pricing`       - Fetch pricing (creates defaults on first access)
/// - `PUT  /settings/pricing`       - Overwrite pricing
/// - `GET  /settings/pricing-list`  - Read-optimized pricing shape
/// - `GET  /dashboard`              - Aggregate member counters
///
/// Unsupported verbs answer 405 with an `Allow` header and the standard
/// envelope body.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/members",
            get(member_list_handler)
                .post(create_member_handler)
                .fallback(members_method_not_allowed),
        )
        .route(
            "/members/term",
            get(term_preview_handler).fallback(term_method_not_allowed),
        )
        .route(
            "/members/{id}",
            get(get_member_handler)
                .put(update_member_handler)
                .fallback(member_method_not_allowed),
        )
        .route(
            "/settings/pricing",
            get(pricing_get_handler)
                .put(pricing_update_handler)
                .fallback(pricing_method_not_allowed),
        )
        .route(
            "/settings/pricing-list",
            get(pricing_list_handler).fallback(pricing_list_method_not_allowed),
        )
        .route(
            "/dashboard",
            get(dashboard_handler).fallback(dashboard_method_not_allowed),
        )
}
