use crate::application::ports::repositories::{
    ChangeRequestRepository, EmployeeRepository, RosterRepository, ScheduleRepository,
};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Storage backend contract: all port repositories plus lifecycle hooks.
#[async_trait]
pub trait Repository:
    ScheduleRepository + ChangeRequestRepository + EmployeeRepository + RosterRepository
{
    async fn initialize(&self) -> Result<(), AppError>;
    async fn health_check(&self) -> Result<bool, AppError>;
}
