pub mod ports;
pub mod services;

pub use services::{ApprovalService, RosterService, ScheduleResponseService};
