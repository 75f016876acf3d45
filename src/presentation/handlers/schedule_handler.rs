use crate::{
    application::services::{ScheduleResponseService, SubmitOutcome},
    domain::projection::DisplayState,
    presentation::dto::{
        Validate,
        change_request_dto::{ChangeRequestStatusResponse, OpenChangeRequestDto},
        schedule_dto::{
            ListSchedulesRequest, ScheduleBoardResponse, ScheduleItemResponse,
            SubmitResponseRequest, SubmitResponseResponse, display_state_label,
        },
    },
    shared::error::AppError,
};
use crate::domain::entities::ResponseStatus;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct ScheduleHandler {
    response_service: Arc<ScheduleResponseService>,
}

impl ScheduleHandler {
    pub fn new(response_service: Arc<ScheduleResponseService>) -> Self {
        Self { response_service }
    }

    /// シフトへの応答を送信する
    pub async fn submit_response(
        &self,
        request: SubmitResponseRequest,
    ) -> Result<SubmitResponseResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let status = ResponseStatus::parse(&request.status)
            .ok_or_else(|| AppError::InvalidInput(format!("invalid status: {}", request.status)))?;

        let outcome = self
            .response_service
            .submit_response(&request.schedule_id, status, request.reason.as_deref())
            .await?;

        Ok(SubmitResponseResponse {
            outcome: match outcome {
                SubmitOutcome::Applied => "applied".to_string(),
                SubmitOutcome::Submitted => "submitted".to_string(),
            },
        })
    }

    /// オープン変更リクエストの有無を取得する
    pub async fn change_request_status(
        &self,
        schedule_id: &str,
    ) -> Result<ChangeRequestStatusResponse, AppError> {
        let status = self
            .response_service
            .change_request_status(schedule_id)
            .await?;

        Ok(ChangeRequestStatusResponse {
            has_open_request: status.has_open_request,
            open_request: status.open_request.map(|request| OpenChangeRequestDto {
                id: request.id,
                requested_status: request.requested_status.as_str().to_string(),
                reason: request.reason,
                created_at: request.created_at.timestamp(),
            }),
        })
    }

    /// 従業員のスケジュール一覧を投影状態付きで取得する
    pub async fn list_schedules(
        &self,
        request: ListSchedulesRequest,
    ) -> Result<ScheduleBoardResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let from = parse_date(&request.from)?;
        let to = parse_date(&request.to)?;

        let projected = self
            .response_service
            .list_for_employee(&request.employee_id, from, to)
            .await?;

        let schedules = projected
            .into_iter()
            .map(|item| {
                let (pending_status, pending_reason) = match &item.display_state {
                    DisplayState::AwaitingApproval {
                        requested_status,
                        reason,
                    } => (
                        Some(requested_status.as_str().to_string()),
                        Some(reason.clone()),
                    ),
                    _ => (None, None),
                };

                ScheduleItemResponse {
                    id: item.schedule.id,
                    employee_id: item.schedule.employee_id,
                    work_date: item.schedule.work_date.to_string(),
                    section: item.schedule.section,
                    shift_name: item.schedule.shift_name,
                    start_time: item.schedule.start_time.format("%H:%M").to_string(),
                    end_time: item.schedule.end_time.format("%H:%M").to_string(),
                    status: item.schedule.status.as_str().to_string(),
                    rejection_reason: item.schedule.rejection_reason,
                    display_state: display_state_label(&item.display_state).to_string(),
                    pending_status,
                    pending_reason,
                }
            })
            .collect();

        Ok(ScheduleBoardResponse {
            employee_id: request.employee_id,
            schedules,
        })
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("invalid date: {value}")))
}
