use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored response status of a schedule assignment.
///
/// `Unset` means no response has ever been recorded. `Pending` can also be
/// stored without a live change request (left over from an earlier anomalous
/// write path); classification treats that the same as `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Unset,
    Pending,
    Accepted,
    Rejected,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Unset => "unset",
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Accepted => "accepted",
            ScheduleStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unset" => Some(ScheduleStatus::Unset),
            "pending" => Some(ScheduleStatus::Pending),
            "accepted" => Some(ScheduleStatus::Accepted),
            "rejected" => Some(ScheduleStatus::Rejected),
            _ => None,
        }
    }
}

/// The requestable subset of [`ScheduleStatus`]: what an employee may submit
/// either as a first response or as a proposed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Accepted,
    Rejected,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Accepted => "accepted",
            ResponseStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ResponseStatus::Accepted),
            "rejected" => Some(ResponseStatus::Rejected),
            _ => None,
        }
    }
}

impl From<ResponseStatus> for ScheduleStatus {
    fn from(status: ResponseStatus) -> Self {
        match status {
            ResponseStatus::Accepted => ScheduleStatus::Accepted,
            ResponseStatus::Rejected => ScheduleStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// One employee's scheduled shift occurrence and its response status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub section: String,
    pub shift_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ScheduleStatus,
    pub rejection_reason: Option<String>,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(
        employee_id: String,
        work_date: NaiveDate,
        section: String,
        shift_name: String,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id,
            work_date,
            section,
            shift_name,
            start_time,
            end_time,
            status: ScheduleStatus::Unset,
            rejection_reason: None,
            visibility: Visibility::Public,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// True when the shift date is strictly before the given calendar date.
    /// Elapsed shifts are immutable.
    pub fn is_elapsed(&self, today: NaiveDate) -> bool {
        self.work_date < today
    }
}
