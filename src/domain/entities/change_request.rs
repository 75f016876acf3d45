use super::schedule::ResponseStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeRequestState {
    Open,
    Approved,
    Denied,
}

impl ChangeRequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeRequestState::Open => "open",
            ChangeRequestState::Approved => "approved",
            ChangeRequestState::Denied => "denied",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(ChangeRequestState::Open),
            "approved" => Some(ChangeRequestState::Approved),
            "denied" => Some(ChangeRequestState::Denied),
            _ => None,
        }
    }
}

/// A proposed status override for a schedule that already carries a committed
/// response. At most one open request may exist per schedule; once resolved
/// the request is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub id: String,
    pub schedule_id: String,
    pub requested_status: ResponseStatus,
    pub reason: String,
    pub state: ChangeRequestState,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ChangeRequest {
    pub fn new(schedule_id: String, requested_status: ResponseStatus, reason: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            schedule_id,
            requested_status,
            reason,
            state: ChangeRequestState::Open,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == ChangeRequestState::Open
    }
}
