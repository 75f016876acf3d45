use super::SqliteRepository;
use super::mapper::map_roster_row;
use super::queries::SELECT_SAME_DAY_SECTION_ROSTER;
use crate::application::ports::repositories::{RosterRepository, RosterRow};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
impl RosterRepository for SqliteRepository {
    async fn list_same_day_section(
        &self,
        work_date: NaiveDate,
        section: &str,
        exclude_schedule_id: &str,
    ) -> Result<Vec<RosterRow>, AppError> {
        let rows = sqlx::query(SELECT_SAME_DAY_SECTION_ROSTER)
            .bind(work_date.to_string())
            .bind(section)
            .bind(exclude_schedule_id)
            .fetch_all(self.pool.get_pool())
            .await?;

        let mut roster = Vec::with_capacity(rows.len());
        for row in rows {
            roster.push(map_roster_row(&row)?);
        }

        Ok(roster)
    }
}
