use super::SqliteRepository;
use super::mapper::map_employee_row;
use super::queries::{INSERT_EMPLOYEE, SELECT_EMPLOYEE_BY_ID};
use crate::application::ports::repositories::EmployeeRepository;
use crate::domain::entities::Employee;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl EmployeeRepository for SqliteRepository {
    async fn upsert_employee(&self, employee: &Employee) -> Result<(), AppError> {
        sqlx::query(INSERT_EMPLOYEE)
            .bind(&employee.id)
            .bind(&employee.display_name)
            .bind(employee.created_at.timestamp_millis())
            .execute(self.pool.get_pool())
            .await?;

        Ok(())
    }

    async fn get_employee(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(SELECT_EMPLOYEE_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_employee_row(&row)?)),
            None => Ok(None),
        }
    }
}
