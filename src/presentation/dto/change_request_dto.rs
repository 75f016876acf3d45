use super::Validate;
use crate::application::services::approval_service::ResolutionDecision;
use serde::{Deserialize, Serialize};

// リクエストDTO
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveChangeRequestRequest {
    pub change_request_id: String,
    pub decision: String,
}

impl Validate for ResolveChangeRequestRequest {
    fn validate(&self) -> Result<(), String> {
        if self.change_request_id.trim().is_empty() {
            return Err("change request id is required".to_string());
        }
        if ResolutionDecision::parse(&self.decision).is_none() {
            return Err(format!(
                "decision must be 'approve' or 'deny', got '{}'",
                self.decision
            ));
        }
        Ok(())
    }
}

// レスポンスDTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenChangeRequestDto {
    pub id: String,
    pub requested_status: String,
    pub reason: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestStatusResponse {
    pub has_open_request: bool,
    pub open_request: Option<OpenChangeRequestDto>,
}
