//! DTOs for member endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::MemberForm;

/// Member fields as submitted for create and update requests.
///
/// All fields are optional at the wire level; the service decides which are
/// required and answers with the contract's validation message. Dates travel
/// as `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub joining_date: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start_date: Option<String>,
    pub membership_end_date: Option<String>,
    pub pricing: Option<i64>,
}

impl From<MemberPayload> for MemberForm {
    fn from(payload: MemberPayload) -> Self {
        MemberForm {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone_number: payload.phone_number,
            date_of_birth: payload.date_of_birth,
            gender: payload.gender,
            joining_date: payload.joining_date,
            membership_type: payload.membership_type,
            membership_start_date: payload.membership_start_date,
            membership_end_date: payload.membership_end_date,
            pricing: payload.pricing,
        }
    }
}

/// Full member record as returned by create, read and update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub joining_date: NaiveDate,
    pub membership_type: String,
    pub membership_start_date: NaiveDate,
    pub membership_end_date: NaiveDate,
    pub pricing: i64,
}

/// Reduced member projection returned by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListItem {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub membership_end_date: NaiveDate,
}
