mod change_request;
mod employee;
mod schedule;

pub use change_request::{ChangeRequest, ChangeRequestState};
pub use employee::Employee;
pub use schedule::{ResponseStatus, Schedule, ScheduleStatus, Visibility};
