use super::Validate;
use crate::domain::entities::ResponseStatus;
use crate::domain::projection::DisplayState;
use serde::{Deserialize, Serialize};

const MAX_REASON_LENGTH: usize = 500;

// リクエストDTO
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    pub schedule_id: String,
    pub status: String,
    pub reason: Option<String>,
}

impl Validate for SubmitResponseRequest {
    fn validate(&self) -> Result<(), String> {
        if self.schedule_id.trim().is_empty() {
            return Err("schedule id is required".to_string());
        }
        if ResponseStatus::parse(&self.status).is_none() {
            return Err(format!(
                "status must be 'accepted' or 'rejected', got '{}'",
                self.status
            ));
        }
        if let Some(reason) = &self.reason {
            if reason.len() > MAX_REASON_LENGTH {
                return Err(format!(
                    "reason is too long (max {MAX_REASON_LENGTH} characters)"
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesRequest {
    pub employee_id: String,
    /// ISO date, inclusive.
    pub from: String,
    /// ISO date, inclusive.
    pub to: String,
}

impl Validate for ListSchedulesRequest {
    fn validate(&self) -> Result<(), String> {
        if self.employee_id.trim().is_empty() {
            return Err("employee id is required".to_string());
        }
        for (label, value) in [("from", &self.from), ("to", &self.to)] {
            if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                return Err(format!("{label} must be an ISO date (YYYY-MM-DD)"));
            }
        }
        Ok(())
    }
}

// レスポンスDTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseResponse {
    /// "applied" for a first response, "submitted" for a change request.
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItemResponse {
    pub id: String,
    pub employee_id: String,
    pub work_date: String,
    pub section: String,
    pub shift_name: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub display_state: String,
    /// Present only while awaiting approval.
    pub pending_status: Option<String>,
    pub pending_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBoardResponse {
    pub employee_id: String,
    pub schedules: Vec<ScheduleItemResponse>,
}

pub(crate) fn display_state_label(state: &DisplayState) -> &'static str {
    match state {
        DisplayState::Completed => "completed",
        DisplayState::AwaitingApproval { .. } => "awaiting_approval",
        DisplayState::NeedsFirstResponse => "needs_first_response",
        DisplayState::Accepted => "accepted",
        DisplayState::Rejected => "rejected",
        DisplayState::Unknown => "unknown",
    }
}
