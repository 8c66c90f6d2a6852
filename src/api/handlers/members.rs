//! Handlers for member record endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{Method, StatusCode},
};

use crate::api::dto::ApiResponse;
use crate::api::dto::member::{MemberListItem, MemberPayload, MemberView};
use crate::api::dto::term::{TermQuery, TermView};
use crate::domain::entities::{Member, MemberSummary};
use crate::error::AppError;
use crate::state::AppState;

fn member_to_view(m: Member) -> MemberView {
    MemberView {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone_number: m.phone_number,
        date_of_birth: m.date_of_birth,
        gender: m.gender,
        joining_date: m.joining_date,
        membership_type: m.membership_type,
        membership_start_date: m.membership_start_date,
        membership_end_date: m.membership_end_date,
        pricing: m.pricing,
    }
}

fn summary_to_item(s: MemberSummary) -> MemberListItem {
    MemberListItem {
        id: s.id,
        first_name: s.first_name,
        last_name: s.last_name,
        email: s.email,
        phone_number: s.phone_number,
        membership_end_date: s.membership_end_date,
    }
}

/// Creates a new member record.
///
/// # Endpoint
///
/// `POST /api/members`
///
/// # Errors
///
/// Returns 400 if any required field is missing, empty, or carries a
/// malformed date; nothing is persisted in that case.
pub async fn create_member_handler(
    State(state): State<AppState>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<ApiResponse<MemberView>>), AppError> {
    let member = state.member_service.create_member(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Member added successfully.",
            member_to_view(member),
        )),
    ))
}

/// Lists all members as reduced summaries.
///
/// # Endpoint
///
/// `GET /api/members`
///
/// Returns only the listing projection (id, names, contact fields and
/// membership end date), not full records.
pub async fn member_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MemberListItem>>>, AppError> {
    let members = state.member_service.list_members().await?;

    Ok(Json(ApiResponse::ok(
        "Members retrieved successfully.",
        members.into_iter().map(summary_to_item).collect(),
    )))
}

/// Fetches a single member by id.
///
/// # Endpoint
///
/// `GET /api/members/{id}`
///
/// # Errors
///
/// Returns 404 if the member does not exist.
pub async fn get_member_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MemberView>>, AppError> {
    let member = state.member_service.get_member(id).await?;

    Ok(Json(ApiResponse::ok(
        "Member fetched successfully.",
        member_to_view(member),
    )))
}

/// Replaces an existing member record.
///
/// # Endpoint
///
/// `PUT /api/members/{id}`
///
/// # Errors
///
/// Returns 400 on contract violations.
/// Returns 404 if the member does not exist.
pub async fn update_member_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<ApiResponse<MemberView>>, AppError> {
    let member = state
        .member_service
        .update_member(id, payload.into())
        .await?;

    Ok(Json(ApiResponse::ok(
        "Member updated successfully.",
        member_to_view(member),
    )))
}

/// Computes the membership end date and plan price for a selection.
///
/// # Endpoint
///
/// `GET /api/members/term?membershipStartDate=YYYY-MM-DD&membershipType=Plan`
///
/// Both parameters are optional; with an incomplete pair the end date is
/// omitted rather than treated as an error. An unknown plan yields a
/// zero-length term and a price of 0.
///
/// # Errors
///
/// Returns 400 if the start date is present but malformed.
pub async fn term_preview_handler(
    State(state): State<AppState>,
    Query(query): Query<TermQuery>,
) -> Result<Json<ApiResponse<TermView>>, AppError> {
    let preview = state
        .member_service
        .term_preview(query.membership_start_date, query.membership_type)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Membership term computed successfully.",
        TermView {
            membership_end_date: preview.membership_end_date,
            pricing: preview.pricing,
        },
    )))
}

/// Fallback for unsupported verbs on `/api/members`.
pub async fn members_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET", "POST"])
}

/// Fallback for unsupported verbs on `/api/members/{id}`.
pub async fn member_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET", "PUT"])
}

/// Fallback for unsupported verbs on `/api/members/term`.
pub async fn term_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str(), &["GET"])
}
