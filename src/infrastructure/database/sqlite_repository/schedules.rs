use super::SqliteRepository;
use super::mapper::map_schedule_row;
use super::queries::{
    INSERT_SCHEDULE, SELECT_PUBLIC_SCHEDULES_FOR_EMPLOYEE, SELECT_SCHEDULE_BY_ID,
    UPDATE_SCHEDULE_RESPONSE,
};
use crate::application::ports::repositories::ScheduleRepository;
use crate::domain::entities::{ResponseStatus, Schedule, ScheduleStatus};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

#[async_trait]
impl ScheduleRepository for SqliteRepository {
    async fn create_schedule(&self, schedule: &Schedule) -> Result<(), AppError> {
        sqlx::query(INSERT_SCHEDULE)
            .bind(&schedule.id)
            .bind(&schedule.employee_id)
            .bind(schedule.work_date.to_string())
            .bind(&schedule.section)
            .bind(&schedule.shift_name)
            .bind(schedule.start_time.format("%H:%M").to_string())
            .bind(schedule.end_time.format("%H:%M").to_string())
            .bind(schedule.status.as_str())
            .bind(&schedule.rejection_reason)
            .bind(schedule.visibility.as_str())
            .bind(schedule.created_at.timestamp_millis())
            .bind(schedule.updated_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }

    async fn get_schedule(&self, id: &str) -> Result<Option<Schedule>, AppError> {
        let row = sqlx::query(SELECT_SCHEDULE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_schedule_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn apply_response(
        &self,
        id: &str,
        status: ResponseStatus,
        rejection_reason: Option<&str>,
    ) -> Result<bool, AppError> {
        let stored: ScheduleStatus = status.into();
        let updated = sqlx::query(UPDATE_SCHEDULE_RESPONSE)
            .bind(id)
            .bind(stored.as_str())
            .bind(rejection_reason)
            .bind(Utc::now().timestamp_millis())
            .execute(self.pool.get_pool())
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    async fn list_public_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Schedule>, AppError> {
        let rows = sqlx::query(SELECT_PUBLIC_SCHEDULES_FOR_EMPLOYEE)
            .bind(employee_id)
            .bind(from.to_string())
            .bind(to.to_string())
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut schedules = Vec::with_capacity(rows.len());
        for row in rows {
            schedules.push(map_schedule_row(&row)?);
        }

        Ok(schedules)
    }
}
