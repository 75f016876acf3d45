use crate::application::ports::repositories::RosterRow;
use crate::domain::entities::{
    ChangeRequest, ChangeRequestState, Employee, ResponseStatus, Schedule, ScheduleStatus,
    Visibility,
};
use crate::shared::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{Row, sqlite::SqliteRow};

pub(super) fn map_schedule_row(row: &SqliteRow) -> Result<Schedule, AppError> {
    let status_raw: String = row.try_get("status")?;
    let status = ScheduleStatus::parse(&status_raw)
        .ok_or_else(|| AppError::Database(format!("invalid schedule status: {status_raw}")))?;

    let visibility_raw: String = row.try_get("visibility")?;
    let visibility = Visibility::parse(&visibility_raw)
        .ok_or_else(|| AppError::Database(format!("invalid visibility: {visibility_raw}")))?;

    Ok(Schedule {
        id: row.try_get("id")?,
        employee_id: row.try_get("employee_id")?,
        work_date: parse_date(&row.try_get::<String, _>("work_date")?)?,
        section: row.try_get("section")?,
        shift_name: row.try_get("shift_name")?,
        start_time: parse_time(&row.try_get::<String, _>("start_time")?)?,
        end_time: parse_time(&row.try_get::<String, _>("end_time")?)?,
        status,
        rejection_reason: row.try_get("rejection_reason")?,
        visibility,
        created_at: timestamp(row.try_get("created_at")?),
        updated_at: timestamp(row.try_get("updated_at")?),
    })
}

pub(super) fn map_change_request_row(row: &SqliteRow) -> Result<ChangeRequest, AppError> {
    let requested_raw: String = row.try_get("requested_status")?;
    let requested_status = ResponseStatus::parse(&requested_raw)
        .ok_or_else(|| AppError::Database(format!("invalid requested status: {requested_raw}")))?;

    let state_raw: String = row.try_get("state")?;
    let state = ChangeRequestState::parse(&state_raw)
        .ok_or_else(|| AppError::Database(format!("invalid request state: {state_raw}")))?;

    Ok(ChangeRequest {
        id: row.try_get("id")?,
        schedule_id: row.try_get("schedule_id")?,
        requested_status,
        reason: row.try_get("reason")?,
        state,
        created_at: timestamp(row.try_get("created_at")?),
        resolved_at: row
            .try_get::<Option<i64>, _>("resolved_at")?
            .map(timestamp),
    })
}

pub(super) fn map_employee_row(row: &SqliteRow) -> Result<Employee, AppError> {
    Ok(Employee {
        id: row.try_get("id")?,
        display_name: row.try_get("display_name")?,
        created_at: timestamp(row.try_get("created_at")?),
    })
}

pub(super) fn map_roster_row(row: &SqliteRow) -> Result<RosterRow, AppError> {
    Ok(RosterRow {
        employee_id: row.try_get("employee_id")?,
        display_name: row.try_get("display_name")?,
        shift_name: row.try_get("shift_name")?,
        start_time: parse_time(&row.try_get::<String, _>("start_time")?)?,
        end_time: parse_time(&row.try_get::<String, _>("end_time")?)?,
    })
}

pub(super) fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Database(format!("invalid date: {value}")))
}

pub(super) fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Database(format!("invalid time: {value}")))
}

fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}
