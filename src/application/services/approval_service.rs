use crate::application::ports::cache::OpenRequestCache;
use crate::application::ports::refresh_notifier::RefreshNotifier;
use crate::application::ports::repositories::ChangeRequestRepository;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Supervisor-side decision on an open change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionDecision {
    Approve,
    Deny,
}

impl ResolutionDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionDecision::Approve => "approve",
            ResolutionDecision::Deny => "deny",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(ResolutionDecision::Approve),
            "deny" => Some(ResolutionDecision::Deny),
            _ => None,
        }
    }
}

pub struct ApprovalService {
    change_requests: Arc<dyn ChangeRequestRepository>,
    cache: Arc<dyn OpenRequestCache>,
    notifier: Arc<dyn RefreshNotifier>,
}

impl ApprovalService {
    pub fn new(
        change_requests: Arc<dyn ChangeRequestRepository>,
        cache: Arc<dyn OpenRequestCache>,
        notifier: Arc<dyn RefreshNotifier>,
    ) -> Self {
        Self {
            change_requests,
            cache,
            notifier,
        }
    }

    /// Resolve an open change request. Approval copies the requested status
    /// onto the schedule; denial leaves the schedule untouched. Either way
    /// the request becomes terminal and the schedule is reclassified from
    /// scratch on the next projection.
    pub async fn resolve(
        &self,
        change_request_id: &str,
        decision: ResolutionDecision,
    ) -> Result<(), AppError> {
        let request = self
            .change_requests
            .get_request(change_request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("change request {change_request_id}")))?;

        if !request.is_open() {
            return Err(AppError::NotFound(format!(
                "change request {change_request_id} is not open"
            )));
        }

        let updated = match decision {
            ResolutionDecision::Approve => {
                self.change_requests.approve_open_request(&request).await?
            }
            ResolutionDecision::Deny => self.change_requests.deny_open_request(&request.id).await?,
        };
        if !updated {
            // Lost the race against a concurrent resolver.
            return Err(AppError::NotFound(format!(
                "change request {change_request_id} is not open"
            )));
        }

        self.cache.invalidate(&request.schedule_id).await;
        if let Err(e) = self.notifier.schedule_changed(&request.schedule_id).await {
            warn!(
                schedule_id = %request.schedule_id,
                "refresh notification failed: {e}"
            );
        }

        info!(
            change_request_id = %request.id,
            schedule_id = %request.schedule_id,
            decision = decision.as_str(),
            "change request resolved"
        );
        Ok(())
    }
}
