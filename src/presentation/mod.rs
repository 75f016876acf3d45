pub mod dto;
pub mod handlers;

pub use handlers::{ApprovalHandler, RosterHandler, ScheduleHandler};
