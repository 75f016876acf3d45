use super::entities::{ChangeRequest, ResponseStatus, Schedule, ScheduleStatus};
use chrono::NaiveDate;

/// Effective, caller-visible state of a schedule assignment, combining the
/// stored status with any open change request.
///
/// This is the single source of truth for classifying a submission as a
/// first response or a change request; the submission service and the
/// presentation layer both derive from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// The shift date has elapsed; no further action is offered.
    Completed,
    /// An open change request exists and awaits supervisor resolution.
    AwaitingApproval {
        requested_status: ResponseStatus,
        reason: String,
    },
    /// No committed response yet: either never responded, or a stored
    /// `pending` with no live change request.
    NeedsFirstResponse,
    Accepted,
    Rejected,
    /// Defensive fallback; unreachable while the invariants hold.
    Unknown,
}

/// Project the effective state from the schedule, its open change request (if
/// any) and the current calendar date.
///
/// Clause order matters: a past date dominates everything, an open request
/// dominates the stored status, and a stored `pending` without an open
/// request classifies as needing a first response rather than as awaiting
/// approval.
pub fn effective_status(
    schedule: &Schedule,
    open_request: Option<&ChangeRequest>,
    today: NaiveDate,
) -> DisplayState {
    if schedule.is_elapsed(today) {
        return DisplayState::Completed;
    }

    if let Some(request) = open_request {
        return DisplayState::AwaitingApproval {
            requested_status: request.requested_status,
            reason: request.reason.clone(),
        };
    }

    match schedule.status {
        ScheduleStatus::Unset | ScheduleStatus::Pending => DisplayState::NeedsFirstResponse,
        ScheduleStatus::Accepted => DisplayState::Accepted,
        ScheduleStatus::Rejected => DisplayState::Rejected,
    }
}
