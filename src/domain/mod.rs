#![allow(unused_imports)]

pub mod entities;
pub mod projection;

pub use entities::{
    ChangeRequest, ChangeRequestState, Employee, ResponseStatus, Schedule, ScheduleStatus,
    Visibility,
};
pub use projection::{DisplayState, effective_status};
