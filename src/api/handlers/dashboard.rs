//! Handler for the dashboard endpoint.

use axum::{Json, extract::State, http::Method};

use crate::api::dto::ApiResponse;
use crate::api::dto::dashboard::DashboardView;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate member counters for the dashboard cards.
///
/// # Endpoint
///
/// `GET /api/dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardView>>, AppError> {
    let stats = state.dashboard_service.stats().await?;

    Ok(Json(ApiResponse::ok(
        "Dashboard statistics retrieved successfully.",
        DashboardView {
            total_members: stats.total_members,
            active_members: stats.active_members,
            revenue: stats.revenue,
        },
    )))
}

/// Fallback for unsupported verbs on `/api/dashboard`.
pub async fn dashboard_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET"])
}
