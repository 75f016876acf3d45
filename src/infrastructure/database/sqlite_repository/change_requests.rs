use super::SqliteRepository;
use super::mapper::map_change_request_row;
use super::queries::{
    APPLY_REQUESTED_STATUS_TO_SCHEDULE, CLOSE_OPEN_CHANGE_REQUEST, INSERT_CHANGE_REQUEST,
    SELECT_CHANGE_REQUEST_BY_ID, SELECT_OPEN_CHANGE_REQUEST_BY_SCHEDULE,
};
use crate::application::ports::repositories::ChangeRequestRepository;
use crate::domain::entities::{ChangeRequest, ChangeRequestState, ResponseStatus, ScheduleStatus};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ChangeRequestRepository for SqliteRepository {
    async fn create_request(&self, request: &ChangeRequest) -> Result<(), AppError> {
        let result = sqlx::query(INSERT_CHANGE_REQUEST)
            .bind(&request.id)
            .bind(&request.schedule_id)
            .bind(request.requested_status.as_str())
            .bind(&request.reason)
            .bind(request.state.as_str())
            .bind(request.created_at.timestamp_millis())
            .bind(request.resolved_at.map(|t| t.timestamp_millis()))
            .execute(self.pool.get_pool())
            .await;

        match result {
            Ok(_) => Ok(()),
            // The partial unique index on (schedule_id) WHERE state = 'open'
            // serializes concurrent submissions.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AppError::DuplicatePending(format!(
                    "schedule {} already has an open change request",
                    request.schedule_id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_request(&self, id: &str) -> Result<Option<ChangeRequest>, AppError> {
        let row = sqlx::query(SELECT_CHANGE_REQUEST_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_change_request_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_open_for_schedule(
        &self,
        schedule_id: &str,
    ) -> Result<Option<ChangeRequest>, AppError> {
        let row = sqlx::query(SELECT_OPEN_CHANGE_REQUEST_BY_SCHEDULE)
            .bind(schedule_id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_change_request_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn approve_open_request(&self, request: &ChangeRequest) -> Result<bool, AppError> {
        let now = Utc::now().timestamp_millis();
        let mut tx = self.pool.get_pool().begin().await?;

        let closed = sqlx::query(CLOSE_OPEN_CHANGE_REQUEST)
            .bind(&request.id)
            .bind(ChangeRequestState::Approved.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if closed == 0 {
            return Ok(false);
        }

        let stored: ScheduleStatus = request.requested_status.into();
        let rejection_reason = match request.requested_status {
            ResponseStatus::Rejected => Some(request.reason.as_str()),
            ResponseStatus::Accepted => None,
        };
        sqlx::query(APPLY_REQUESTED_STATUS_TO_SCHEDULE)
            .bind(&request.schedule_id)
            .bind(stored.as_str())
            .bind(rejection_reason)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn deny_open_request(&self, request_id: &str) -> Result<bool, AppError> {
        let closed = sqlx::query(CLOSE_OPEN_CHANGE_REQUEST)
            .bind(request_id)
            .bind(ChangeRequestState::Denied.as_str())
            .bind(Utc::now().timestamp_millis())
            .execute(self.pool.get_pool())
            .await?
            .rows_affected();

        Ok(closed > 0)
    }
}
