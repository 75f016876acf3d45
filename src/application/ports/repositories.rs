use crate::domain::entities::{ChangeRequest, Employee, ResponseStatus, Schedule};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create_schedule(&self, schedule: &Schedule) -> Result<(), AppError>;
    async fn get_schedule(&self, id: &str) -> Result<Option<Schedule>, AppError>;

    /// Apply a committed first response directly to the schedule row.
    /// `rejection_reason` is stored only for rejections and cleared otherwise.
    /// The write is guarded on the row still lacking a committed response;
    /// returns `false` when another submission committed one first.
    async fn apply_response(
        &self,
        id: &str,
        status: ResponseStatus,
        rejection_reason: Option<&str>,
    ) -> Result<bool, AppError>;

    /// Schedule directory surface: public rows for one employee inside a
    /// date window, ordered by date.
    async fn list_public_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Schedule>, AppError>;
}

#[async_trait]
pub trait ChangeRequestRepository: Send + Sync {
    /// Insert a new open request. The storage layer enforces the
    /// at-most-one-open-request invariant and reports a violation as
    /// `AppError::DuplicatePending`.
    async fn create_request(&self, request: &ChangeRequest) -> Result<(), AppError>;

    async fn get_request(&self, id: &str) -> Result<Option<ChangeRequest>, AppError>;

    async fn find_open_for_schedule(
        &self,
        schedule_id: &str,
    ) -> Result<Option<ChangeRequest>, AppError>;

    /// Atomically apply the requested status to the schedule and close the
    /// request. Returns `false` when the request was no longer open.
    async fn approve_open_request(&self, request: &ChangeRequest) -> Result<bool, AppError>;

    /// Close the request without touching the schedule. Returns `false` when
    /// the request was no longer open.
    async fn deny_open_request(&self, request_id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn upsert_employee(&self, employee: &Employee) -> Result<(), AppError>;
    async fn get_employee(&self, id: &str) -> Result<Option<Employee>, AppError>;
}

/// One co-scheduled row from the same-day roster query, pre-joined with the
/// employee's display name.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub employee_id: String,
    pub display_name: String,
    pub shift_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Public rows on the same date and organizational section, excluding
    /// the queried schedule itself.
    async fn list_same_day_section(
        &self,
        work_date: NaiveDate,
        section: &str,
        exclude_schedule_id: &str,
    ) -> Result<Vec<RosterRow>, AppError>;
}
