pub mod approval_handler;
pub mod roster_handler;
pub mod schedule_handler;

pub use approval_handler::ApprovalHandler;
pub use roster_handler::RosterHandler;
pub use schedule_handler::ScheduleHandler;
