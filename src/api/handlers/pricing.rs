//! Handlers for pricing settings endpoints.

use axum::{
    Json,
    extract::State,
    http::Method,
};
use serde_json::json;

use crate::api::dto::ApiResponse;
use crate::api::dto::pricing::{PricingListView, PricingPayload, PricingView};
use crate::domain::entities::{PricingSettings, PricingUpdate};
use crate::error::AppError;
use crate::state::AppState;

fn settings_to_view(s: PricingSettings) -> PricingView {
    PricingView {
        monthly_membership: s.monthly_membership,
        quarterly_membership: s.quarterly_membership,
        yearly_membership: s.yearly_membership,
    }
}

/// Returns the pricing table, creating it with defaults on first access.
///
/// # Endpoint
///
/// `GET /api/settings/pricing`
pub async fn pricing_get_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PricingView>>, AppError> {
    let settings = state.pricing_service.get_or_create().await?;

    Ok(Json(ApiResponse::ok(
        "Pricing fetched successfully.",
        settings_to_view(settings),
    )))
}

/// Overwrites the three price fields on the pricing table.
///
/// # Endpoint
///
/// `PUT /api/settings/pricing`
///
/// # Errors
///
/// Returns 400 if any of the three price fields is missing.
/// Returns 404 if no settings row exists yet; this path never creates one.
pub async fn pricing_update_handler(
    State(state): State<AppState>,
    Json(payload): Json<PricingPayload>,
) -> Result<Json<ApiResponse<PricingView>>, AppError> {
    let (Some(monthly), Some(quarterly), Some(yearly)) = (
        payload.monthly_membership,
        payload.quarterly_membership,
        payload.yearly_membership,
    ) else {
        return Err(AppError::bad_request(
            "All required fields must be provided.",
            json!({"required": ["monthlyMembership", "quarterlyMembership", "yearlyMembership"]}),
        ));
    };

    let settings = state
        .pricing_service
        .update(PricingUpdate {
            monthly_membership: monthly,
            quarterly_membership: quarterly,
            yearly_membership: yearly,
        })
        .await?;

    Ok(Json(ApiResponse::ok(
        "Pricing updated successfully.",
        settings_to_view(settings),
    )))
}

/// Returns the pricing table in its read-optimized listing shape.
///
/// # Endpoint
///
/// `GET /api/settings/pricing-list`
///
/// When no settings row exists, the hard-coded defaults are returned without
/// being persisted.
pub async fn pricing_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PricingListView>>, AppError> {
    let listing = state.pricing_service.listing().await?;

    let message = if listing.is_default {
        "Default pricing returned."
    } else {
        "Pricing list fetched successfully."
    };

    Ok(Json(ApiResponse::ok(
        message,
        PricingListView {
            monthly: listing.monthly,
            quarterly: listing.quarterly,
            yearly: listing.yearly,
        },
    )))
}

/// Fallback for unsupported verbs on `/api/settings/pricing`.
pub async fn pricing_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET", "PUT"])
}

/// Fallback for unsupported verbs on `/api/settings/pricing-list`.
pub async fn pricing_list_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET"])
}
