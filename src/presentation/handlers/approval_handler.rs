use crate::{
    application::services::approval_service::{ApprovalService, ResolutionDecision},
    presentation::dto::{Validate, change_request_dto::ResolveChangeRequestRequest},
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ApprovalHandler {
    approval_service: Arc<ApprovalService>,
}

impl ApprovalHandler {
    pub fn new(approval_service: Arc<ApprovalService>) -> Self {
        Self { approval_service }
    }

    /// 変更リクエストを承認または却下する
    pub async fn resolve(&self, request: ResolveChangeRequestRequest) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let decision = ResolutionDecision::parse(&request.decision).ok_or_else(|| {
            AppError::InvalidInput(format!("invalid decision: {}", request.decision))
        })?;

        self.approval_service
            .resolve(&request.change_request_id, decision)
            .await
    }
}
