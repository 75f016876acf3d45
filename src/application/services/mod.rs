pub mod approval_service;
pub mod roster_service;
pub mod schedule_response_service;

pub use approval_service::{ApprovalService, ResolutionDecision};
pub use roster_service::{RosterService, SameDayRoster};
pub use schedule_response_service::{
    ChangeRequestStatus, ProjectedSchedule, ScheduleResponseService, SubmitOutcome,
};
