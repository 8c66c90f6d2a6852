//! Member management service.

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Member, MemberSummary, NewMember};
use crate::domain::membership_term;
use crate::domain::repositories::{MemberRepository, SettingsRepository};
use crate::error::AppError;

/// Raw member fields as submitted by a client, prior to validation.
///
/// Every field is optional so that the service, not the deserializer, decides
/// what a missing field means and answers with the contract's validation
/// message instead of a serde error.
#[derive(Debug, Clone, Default)]
pub struct MemberForm {
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

/// Result of a membership term preview.
///
/// The end date is only present when both a start date and a plan were given;
/// an incomplete pair is not an error, just an incomplete form.
#[derive(Debug, Clone, Copy)]
pub struct TermPreview {
    pub membership_end_date: Option<NaiveDate>,
    pub pricing: i64,
}

/// Service for managing gym member records.
///
/// Validates incoming member data against the record contract, fills the
/// stored price from the pricing table when the client did not supply one,
/// and delegates persistence to the repositories.
pub struct MemberService<M: MemberRepository, S: SettingsRepository> {
    members: Arc<M>,
    settings: Arc<S>,
}

impl<M: MemberRepository, S: SettingsRepository> MemberService<M, S> {
    /// Creates a new member service.
    pub fn new(members: Arc<M>, settings: Arc<S>) -> Self {
        Self { members, settings }
    }

    /// Creates a member record from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing, empty,
    /// or carries a malformed date. Nothing is persisted in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_member(&self, form: MemberForm) -> Result<Member, AppError> {
        let record = self.build_record(form).await?;
        self.members.create(record).await
    }

    /// Replaces an existing member record with the submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on contract violations.
    /// Returns [`AppError::NotFound`] if the member does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_member(&self, id: i64, form: MemberForm) -> Result<Member, AppError> {
        let record = self.build_record(form).await?;
        self.members.update(id, record).await
    }

    /// Retrieves a member by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the member does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_member(&self, id: i64) -> Result<Member, AppError> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Member not found.", json!({"id": id})))
    }

    /// Lists all members as reduced summaries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_members(&self) -> Result<Vec<MemberSummary>, AppError> {
        self.members.list_summaries().await
    }

    /// Computes the membership end date and plan price for a partially filled
    /// form.
    ///
    /// The end date is computed only when both the start date and the plan
    /// are present. The price is looked up whenever a plan is present, so the
    /// two values a client displays always correspond to the same selection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the start date is malformed.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn term_preview(
        &self,
        start_date: Option<String>,
        plan: Option<String>,
    ) -> Result<TermPreview, AppError> {
        let start = match start_date.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_date("membershipStartDate", raw)?),
            None => None,
        };
        let plan = plan.filter(|p| !p.is_empty());

        let membership_end_date = match (start, plan.as_deref()) {
            (Some(start), Some(plan)) => Some(membership_term::compute_end_date(start, plan)),
            _ => None,
        };

        let pricing = match plan.as_deref() {
            Some(plan) => {
                let settings = self.settings.get_or_create_default().await?;
                membership_term::price_for(plan, &settings)
            }
            None => 0,
        };

        Ok(TermPreview {
            membership_end_date,
            pricing,
        })
    }

    /// Validates a form and assembles the persistable record.
    ///
    /// When the form omits `pricing`, the price is looked up from the current
    /// pricing table for the selected plan. The stored value reflects the
    /// table at edit time and is never recomputed afterwards.
    async fn build_record(&self, form: MemberForm) -> Result<NewMember, AppError> {
        let mut missing = Vec::new();

        let first_name = require("firstName", &form.first_name, &mut missing);
        let last_name = require("lastName", &form.last_name, &mut missing);
        let email = require("email", &form.email, &mut missing);
        let phone_number = require("phoneNumber", &form.phone_number, &mut missing);
        let date_of_birth = require("dateOfBirth", &form.date_of_birth, &mut missing);
        let gender = require("gender", &form.gender, &mut missing);
        let joining_date = require("joiningDate", &form.joining_date, &mut missing);
        let membership_type = require("membershipType", &form.membership_type, &mut missing);
        let membership_start_date =
            require("membershipStartDate", &form.membership_start_date, &mut missing);
        let membership_end_date =
            require("membershipEndDate", &form.membership_end_date, &mut missing);

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "All required fields must be provided.",
                json!({"missing": missing}),
            ));
        }

        let date_of_birth = parse_date("dateOfBirth", &date_of_birth)?;
        let joining_date = parse_date("joiningDate", &joining_date)?;
        let membership_start_date = parse_date("membershipStartDate", &membership_start_date)?;
        let membership_end_date = parse_date("membershipEndDate", &membership_end_date)?;

        let pricing = match form.pricing {
            Some(price) => price,
            None => {
                let settings = self.settings.get_or_create_default().await?;
                membership_term::price_for(&membership_type, &settings)
            }
        };

        Ok(NewMember {
            first_name,
            last_name,
            email,
            phone_number,
            date_of_birth,
            gender,
            joining_date,
            membership_type,
            membership_start_date,
            membership_end_date,
            pricing,
        })
    }
}

/// Returns the field value when present and non-empty, recording the field
/// name otherwise.
fn require(
    field: &'static str,
    value: &Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Parses a `YYYY-MM-DD` date field.
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::bad_request(
            format!("Invalid value for {field}. Expected a YYYY-MM-DD date."),
            json!({"field": field, "value": value}),
        )
    })
}
